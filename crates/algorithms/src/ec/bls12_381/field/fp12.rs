//! Degree-twelve extension `Fp12 = Fp6[w] / (w^2 - v)`
//!
//! The pairing engine builds on the general product, squaring, inversion and
//! the sparse `mul_by_014` line multiplication below.

use core::fmt;

use num_bigint::BigUint;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp2::Fp2;
use super::fp6::Fp6;
use crate::error::{validate, Error, Result};
use blscore_params::bls12_381::{FP12_BYTES, FP6_BYTES};

/// Element c0 + c1·w
#[derive(Copy, Clone, Default)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of w
    pub c1: Fp6,
}

impl Fp12 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Build from coefficients
    pub const fn new(c0: Fp6, c1: Fp6) -> Fp12 {
        Fp12 { c0, c1 }
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
    pub const fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: Fp6::add(&self.c0, &rhs.c0),
            c1: Fp6::add(&self.c1, &rhs.c1),
        }
    }

    /// Subtract two elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: Fp6::sub(&self.c0, &rhs.c0),
            c1: Fp6::sub(&self.c1, &rhs.c1),
        }
    }

    /// Negate an element
    #[inline]
    pub const fn neg(&self) -> Fp12 {
        Fp12 {
            c0: Fp6::neg(&self.c0),
            c1: Fp6::neg(&self.c1),
        }
    }

    /// Double an element
    #[inline]
    pub const fn double(&self) -> Fp12 {
        Fp12 {
            c0: Fp6::double(&self.c0),
            c1: Fp6::double(&self.c1),
        }
    }

    /// Karatsuba multiplication over Fp6
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;

        Fp12 {
            c0: bb.mul_by_nonresidue() + aa,
            c1,
        }
    }

    /// Complex squaring over Fp6
    pub fn square(&self) -> Fp12 {
        let ab = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1.mul_by_nonresidue()) * (self.c0 + self.c1)
            - ab
            - ab.mul_by_nonresidue();

        Fp12 {
            c0,
            c1: ab.double(),
        }
    }

    /// Multiply by the sparse element (c0 + c1·v) + (c4·v)·w
    ///
    /// Equal to `self * Fp12::new(Fp6::new(c0, c1, 0), Fp6::new(0, c4, 0))`.
    pub fn mul_by_014(&self, c0: &Fp2, c1: &Fp2, c4: &Fp2) -> Fp12 {
        let aa = self.c0.mul_by_01(c0, c1);
        let bb = self.c1.mul_by_1(c4);
        let o = c1 + c4;
        let t1 = (self.c1 + self.c0).mul_by_01(c0, &o) - aa - bb;

        Fp12 {
            c0: bb.mul_by_nonresidue() + aa,
            c1: t1,
        }
    }

    /// Conjugate c0 - c1·w
    pub fn conjugate(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Inverse; none for zero
    pub fn invert(&self) -> CtOption<Fp12> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    /// Total inverse with inverse(0) = 0
    pub fn inverse(&self) -> Fp12 {
        self.invert().unwrap_or(Fp12::zero())
    }

    /// Variable-time exponentiation by little-endian u64 limbs
    pub fn pow_vartime(&self, by: &[u64]) -> Fp12 {
        let mut res = Fp12::one();
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
    pub fn pow(&self, by: &BigUint) -> Fp12 {
        self.pow_vartime(&by.to_u64_digits())
    }

    /// Decode c1 || c0
    pub fn from_bytes(bytes: &[u8; FP12_BYTES]) -> CtOption<Fp12> {
        let mut hi = [0u8; FP6_BYTES];
        let mut lo = [0u8; FP6_BYTES];
        hi.copy_from_slice(&bytes[..FP6_BYTES]);
        lo.copy_from_slice(&bytes[FP6_BYTES..]);

        let c1 = Fp6::from_bytes(&hi);
        let c0 = Fp6::from_bytes(&lo);
        c0.and_then(|c0| c1.map(|c1| Fp12 { c0, c1 }))
    }

    /// Decode from a byte slice, checking length and range
    pub fn from_slice(bytes: &[u8]) -> Result<Fp12> {
        validate::length("Fp12", bytes.len(), FP12_BYTES)?;
        let mut buf = [0u8; FP12_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp12::from_bytes(&buf))
            .ok_or_else(|| Error::encoding("Fp12", "coefficient is not less than the modulus"))
    }

    /// Encode c1 || c0
    pub fn to_bytes(self) -> [u8; FP12_BYTES] {
        let mut res = [0u8; FP12_BYTES];
        res[..FP6_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[FP6_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Uniformly random element
    pub fn random(rng: &mut impl RngCore) -> Fp12 {
        Fp12 {
            c0: Fp6::random(rng),
            c1: Fp6::random(rng),
        }
    }
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl From<Fp6> for Fp12 {
    fn from(c0: Fp6) -> Fp12 {
        Fp12 {
            c0,
            c1: Fp6::zero(),
        }
    }
}

impl zeroize::DefaultIsZeroes for Fp12 {}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl_field_ops!(Fp12);
