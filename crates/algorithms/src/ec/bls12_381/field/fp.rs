//! BLS12-381 base field `GF(p)` where p = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use core::fmt;

use num_bigint::BigUint;
use num_traits::Num;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::{validate, Error, Result};
use blscore_params::bls12_381::FP_BYTES;

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p, little-endian limbs
pub(crate) const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// R = 2^384 mod p
const R: Fp = Fp([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// R^2 = 2^768 mod p
const R2: Fp = Fp([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// R^3 = 2^1152 mod p
const R3: Fp = Fp([
    0xed48_ac6b_d94c_a1e0,
    0x315f_831e_03a7_adf8,
    0x9a53_352a_615e_29dd,
    0x34c0_4e5e_921e_1761,
    0x2512_d435_6572_4728,
    0x0aa6_3460_9175_5d4d,
]);

/// (p + 1) / 4
const P_PLUS_1_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaab,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// p - 2
const P_MINUS_2: [u64; 6] = [
    0xb9fe_ffff_ffff_aaa9,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// (p + 1) / 2, the smallest lexicographically largest residue
const P_PLUS_1_DIV_2: [u64; 6] = [
    0xdcff_7fff_ffff_d556,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^384
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 6]);

/// Returns the borrow of `a - b` over six limbs; nonzero iff a < b
#[inline]
const fn borrow_of(a: &[u64; 6], b: &[u64; 6]) -> u64 {
    let mut borrow = 0;
    let mut i = 0;
    while i < 6 {
        let (_, br) = sbb(a[i], b[i], borrow);
        borrow = br;
        i += 1;
    }
    borrow
}

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0; 6])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Create from Montgomery limbs without checking canonicity
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fp {
        Fp(v)
    }

    /// Embed a small integer
    pub fn from_u64(v: u64) -> Fp {
        Fp([v, 0, 0, 0, 0, 0]).mul(&R2)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp::one())
    }

    /// Subtract p once if the value is at least p
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let mut r = [0u64; 6];
        let mut borrow = 0;
        let mut i = 0;
        while i < 6 {
            let (d, br) = sbb(self.0[i], MODULUS[i], borrow);
            r[i] = d;
            borrow = br;
            i += 1;
        }

        // borrow is all ones when self < p
        let mut i = 0;
        while i < 6 {
            r[i] = (self.0[i] & borrow) | (r[i] & !borrow);
            i += 1;
        }
        Fp(r)
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let mut r = [0u64; 6];
        let mut carry = 0;
        let mut i = 0;
        while i < 6 {
            let (d, c) = adc(self.0[i], rhs.0[i], carry);
            r[i] = d;
            carry = c;
            i += 1;
        }
        Fp(r).subtract_p()
    }

    /// Double a field element
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let mut r = [0u64; 6];
        let mut borrow = 0;
        let mut i = 0;
        while i < 6 {
            let (d, br) = sbb(MODULUS[i], self.0[i], borrow);
            r[i] = d;
            borrow = br;
            i += 1;
        }

        // -0 must stay 0 rather than p
        let nonzero = (self.0[0] | self.0[1] | self.0[2] | self.0[3] | self.0[4] | self.0[5]) != 0;
        let mask = (nonzero as u64).wrapping_neg();
        let mut i = 0;
        while i < 6 {
            r[i] &= mask;
            i += 1;
        }
        Fp(r)
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        Fp::add(&rhs.neg(), self)
    }

    /// Montgomery multiplication, operand scanning with interleaved reduction
    #[inline]
    pub fn mul(&self, rhs: &Fp) -> Fp {
        let mut t = [0u64; 8];
        for i in 0..6 {
            let mut carry = 0;
            for j in 0..6 {
                (t[j], carry) = mac(t[j], self.0[j], rhs.0[i], carry);
            }
            (t[6], t[7]) = adc(t[6], carry, 0);

            let k = t[0].wrapping_mul(INV);
            let (_, mut carry) = mac(t[0], k, MODULUS[0], 0);
            for j in 1..6 {
                (t[j - 1], carry) = mac(t[j], k, MODULUS[j], carry);
            }
            let (top, c) = adc(t[6], carry, 0);
            t[5] = top;
            t[6] = t[7] + c;
            t[7] = 0;
        }

        Fp([t[0], t[1], t[2], t[3], t[4], t[5]]).subtract_p()
    }

    /// Square this element
    #[inline]
    pub fn square(&self) -> Fp {
        self.mul(self)
    }

    /// Canonical little-endian limbs of the residue, out of Montgomery form
    pub(crate) fn to_canonical(self) -> [u64; 6] {
        self.mul(&Fp([1, 0, 0, 0, 0, 0])).0
    }

    /// Lift canonical little-endian limbs into Montgomery form, rejecting values >= p
    pub(crate) fn from_canonical(limbs: [u64; 6]) -> CtOption<Fp> {
        let is_some = Choice::from((borrow_of(&limbs, &MODULUS) & 1) as u8);
        CtOption::new(Fp(limbs).mul(&R2), is_some)
    }
}

// ============================================================================
// Exponentiation, inversion and square roots
// ============================================================================

impl Fp {
    /// Variable-time exponentiation by little-endian u64 limbs
    ///
    /// Scans from the most significant bit; an empty or zero exponent gives one.
    pub fn pow_vartime(&self, by: &[u64]) -> Fp {
        let mut res = Fp::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Exponentiation by an arbitrary-precision exponent
    pub fn pow(&self, by: &BigUint) -> Fp {
        self.pow_vartime(&by.to_u64_digits())
    }

    /// Multiplicative inverse via a^(p-2); none for zero
    #[inline]
    pub fn invert(&self) -> CtOption<Fp> {
        let t = self.pow_vartime(&P_MINUS_2);
        CtOption::new(t, !self.is_zero())
    }

    /// Total inverse with inverse(0) = 0
    pub fn inverse(&self) -> Fp {
        // 0^(p-2) is already 0
        self.pow_vartime(&P_MINUS_2)
    }

    /// Square root a^((p+1)/4), present only for quadratic residues
    #[inline]
    pub fn sqrt(&self) -> CtOption<Fp> {
        let sqrt = self.pow_vartime(&P_PLUS_1_DIV_4);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// True iff the canonical residue is greater than (p-1)/2
    pub fn lexicographically_largest(&self) -> Choice {
        let tmp = self.to_canonical();
        let borrow = borrow_of(&tmp, &P_PLUS_1_DIV_2);
        Choice::from(((borrow & 1) ^ 1) as u8)
    }

    /// Parity of the canonical residue
    pub fn sgn0(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from 48 big-endian bytes; none if the value is not below p
    pub fn from_bytes(bytes: &[u8; FP_BYTES]) -> CtOption<Fp> {
        let mut limbs = [0u64; 6];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[5 - i] = u64::from_be_bytes(word);
        }
        Fp::from_canonical(limbs)
    }

    /// Decode from a byte slice, checking length and range
    pub fn from_slice(bytes: &[u8]) -> Result<Fp> {
        validate::length("Fp", bytes.len(), FP_BYTES)?;
        let mut buf = [0u8; FP_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp::from_bytes(&buf))
            .ok_or_else(|| Error::encoding("Fp", "value is not less than the modulus"))
    }

    /// Encode to 48 big-endian bytes
    pub fn to_bytes(self) -> [u8; FP_BYTES] {
        let limbs = self.to_canonical();
        let mut res = [0u8; FP_BYTES];
        for (i, chunk) in res.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&limbs[5 - i].to_be_bytes());
        }
        res
    }

    /// Convert from an integer, rejecting values >= p
    pub fn from_biguint(v: &BigUint) -> Result<Fp> {
        let digits = v.to_u64_digits();
        if digits.len() > 6 {
            return Err(Error::encoding("Fp", "integer is not less than the modulus"));
        }
        let mut limbs = [0u64; 6];
        limbs[..digits.len()].copy_from_slice(&digits);
        Option::from(Fp::from_canonical(limbs))
            .ok_or_else(|| Error::encoding("Fp", "integer is not less than the modulus"))
    }

    /// Canonical residue as an integer
    pub fn to_biguint(&self) -> BigUint {
        let limbs = self.to_canonical();
        let mut digits = Vec::with_capacity(12);
        for limb in limbs.iter() {
            digits.push(*limb as u32);
            digits.push((*limb >> 32) as u32);
        }
        BigUint::new(digits)
    }

    /// Parse a base-10 string
    pub fn from_decimal(s: &str) -> Result<Fp> {
        let v = BigUint::from_str_radix(s, 10)
            .map_err(|_| Error::encoding("Fp", "not a decimal integer"))?;
        Fp::from_biguint(&v)
    }

    /// Base-10 representation of the canonical residue
    pub fn to_decimal(&self) -> String {
        self.to_biguint().to_str_radix(10)
    }

    /// Parse big-endian hex, with or without a `0x` prefix, up to 96 digits
    pub fn from_hex(s: &str) -> Result<Fp> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        validate::encoding(
            !digits.is_empty() && digits.len() <= 2 * FP_BYTES,
            "Fp",
            "hex string must hold 1 to 96 digits",
        )?;
        let padded = format!("{:0>width$}", digits, width = 2 * FP_BYTES);
        let mut buf = [0u8; FP_BYTES];
        hex::decode_to_slice(&padded, &mut buf)
            .map_err(|_| Error::encoding("Fp", "invalid hex digit"))?;
        Option::from(Fp::from_bytes(&buf))
            .ok_or_else(|| Error::encoding("Fp", "value is not less than the modulus"))
    }

    /// 96-digit big-endian hex, no prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Uniformly random element
    pub fn random(rng: &mut impl RngCore) -> Fp {
        let mut bytes = [0u8; 96];
        rng.fill_bytes(&mut bytes);

        // Reduce a 768-bit integer: lo + hi * 2^384
        let mut lo = [0u64; 6];
        let mut hi = [0u64; 6];
        for i in 0..6 {
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[8 * i..8 * i + 8]);
            lo[i] = u64::from_le_bytes(word);
            word.copy_from_slice(&bytes[48 + 8 * i..48 + 8 * i + 8]);
            hi[i] = u64::from_le_bytes(word);
        }
        Fp(lo).mul(&R2).add(&Fp(hi).mul(&R3))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = [0u64; 6];
        for (i, limb) in r.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(r)
    }
}

impl From<u64> for Fp {
    fn from(v: u64) -> Fp {
        Fp::from_u64(v)
    }
}

impl_field_ops!(Fp);
