//! Quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`

use core::fmt;

use num_bigint::BigUint;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use crate::error::{validate, Error, Result};
use blscore_params::bls12_381::{FP2_BYTES, FP_BYTES};

/// (p - 3) / 4
const P_MINUS_3_DIV_4: [u64; 6] = [
    0xee7f_bfff_ffff_eaaa,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// (p - 1) / 2
const P_MINUS_1_DIV_2: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// Element c0 + c1·u
#[derive(Copy, Clone, Default)]
pub struct Fp2 {
    /// Constant coefficient
    pub c0: Fp,
    /// Coefficient of u
    pub c1: Fp,
}

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Build from coefficients
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero()
    }

    /// Add two elements
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::add(&self.c0, &rhs.c0),
            c1: Fp::add(&self.c1, &rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::sub(&self.c0, &rhs.c0),
            c1: Fp::sub(&self.c1, &rhs.c1),
        }
    }

    /// Negate an element
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: Fp::neg(&self.c0),
            c1: Fp::neg(&self.c1),
        }
    }

    /// Double an element
    #[inline]
    pub const fn double(&self) -> Fp2 {
        Fp2 {
            c0: Fp::double(&self.c0),
            c1: Fp::double(&self.c1),
        }
    }

    /// Karatsuba multiplication: three base-field products
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let s = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp2 {
            c0: v0 - v1,
            c1: s - v0 - v1,
        }
    }

    /// Squaring with two base-field products
    pub fn square(&self) -> Fp2 {
        // (c0 + c1)(c0 - c1) + 2·c0·c1·u
        let a = self.c0 + self.c1;
        let b = self.c0 - self.c1;
        let c = self.c0 * self.c1;

        Fp2 {
            c0: a * b,
            c1: c.double(),
        }
    }

    /// Multiply by a base-field scalar
    pub fn mul_by_fp(&self, rhs: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * rhs,
            c1: self.c1 * rhs,
        }
    }

    /// Multiply by the sextic non-residue u + 1
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1 u)(1 + u) = (c0 - c1) + (c0 + c1) u
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Conjugate c0 - c1·u
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Frobenius endomorphism a -> a^(p^power)
    pub fn frobenius_map(&self, power: usize) -> Fp2 {
        if power % 2 == 0 {
            *self
        } else {
            self.conjugate()
        }
    }

    /// Inverse through the norm c0^2 + c1^2; none for zero
    pub fn invert(&self) -> CtOption<Fp2> {
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    /// Total inverse with inverse(0) = 0
    pub fn inverse(&self) -> Fp2 {
        self.invert().unwrap_or(Fp2::zero())
    }

    /// Variable-time exponentiation by little-endian u64 limbs
    pub fn pow_vartime(&self, by: &[u64]) -> Fp2 {
        let mut res = Fp2::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Exponentiation by an arbitrary-precision exponent
    pub fn pow(&self, by: &BigUint) -> Fp2 {
        self.pow_vartime(&by.to_u64_digits())
    }

    /// Square root for p = 3 mod 4 (Algorithm 9, eprint 2012/685)
    ///
    /// Returns none for non-residues. The candidate is always re-squared.
    pub fn sqrt(&self) -> CtOption<Fp2> {
        let a1 = self.pow_vartime(&P_MINUS_3_DIV_4);
        let alpha = a1.square() * self;
        let x0 = a1 * self;

        // alpha = -1 means a = -x0^2, so the root is x0·u
        let rotated = Fp2 {
            c0: -x0.c1,
            c1: x0.c0,
        };
        let general = (alpha + Fp2::one()).pow_vartime(&P_MINUS_1_DIV_2) * x0;
        let candidate = Fp2::conditional_select(&general, &rotated, alpha.ct_eq(&-Fp2::one()));

        let candidate = Fp2::conditional_select(&candidate, &Fp2::zero(), self.is_zero());
        CtOption::new(candidate, candidate.square().ct_eq(self))
    }

    /// Ordering used to pick the sign of a y-coordinate: c1 decides, c0 breaks ties
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }

    /// Sign as defined for hash-to-curve
    pub fn sgn0(&self) -> Choice {
        self.c0.sgn0() | (self.c0.is_zero() & self.c1.sgn0())
    }

    /// Decode c1 || c0
    pub fn from_bytes(bytes: &[u8; FP2_BYTES]) -> CtOption<Fp2> {
        let mut hi = [0u8; FP_BYTES];
        let mut lo = [0u8; FP_BYTES];
        hi.copy_from_slice(&bytes[..FP_BYTES]);
        lo.copy_from_slice(&bytes[FP_BYTES..]);

        let c1 = Fp::from_bytes(&hi);
        let c0 = Fp::from_bytes(&lo);
        c0.and_then(|c0| c1.map(|c1| Fp2 { c0, c1 }))
    }

    /// Decode from a byte slice, checking length and range
    pub fn from_slice(bytes: &[u8]) -> Result<Fp2> {
        validate::length("Fp2", bytes.len(), FP2_BYTES)?;
        let mut buf = [0u8; FP2_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp2::from_bytes(&buf))
            .ok_or_else(|| Error::encoding("Fp2", "coefficient is not less than the modulus"))
    }

    /// Encode c1 || c0
    pub fn to_bytes(self) -> [u8; FP2_BYTES] {
        let mut res = [0u8; FP2_BYTES];
        res[..FP_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[FP_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Uniformly random element
    pub fn random(rng: &mut impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(rng),
            c1: Fp::random(rng),
        }
    }
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl From<Fp> for Fp2 {
    fn from(c0: Fp) -> Fp2 {
        Fp2 {
            c0,
            c1: Fp::zero(),
        }
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fp2);
