//! Sextic extension `Fp6 = Fp2[v] / (v^3 - (u + 1))`

use core::fmt;

use num_bigint::BigUint;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp2::Fp2;
use crate::error::{validate, Error, Result};
use blscore_params::bls12_381::{FP2_BYTES, FP6_BYTES};

/// Element c0 + c1·v + c2·v^2
#[derive(Copy, Clone, Default)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of v
    pub c1: Fp2,
    /// Coefficient of v^2
    pub c2: Fp2,
}

impl Fp6 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Build from coefficients
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Fp6 {
        Fp6 { c0, c1, c2 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.c0.is_one() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Add two elements
    #[inline]
    pub const fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: Fp2::add(&self.c0, &rhs.c0),
            c1: Fp2::add(&self.c1, &rhs.c1),
            c2: Fp2::add(&self.c2, &rhs.c2),
        }
    }

    /// Subtract two elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: Fp2::sub(&self.c0, &rhs.c0),
            c1: Fp2::sub(&self.c1, &rhs.c1),
            c2: Fp2::sub(&self.c2, &rhs.c2),
        }
    }

    /// Negate an element
    #[inline]
    pub const fn neg(&self) -> Fp6 {
        Fp6 {
            c0: Fp2::neg(&self.c0),
            c1: Fp2::neg(&self.c1),
            c2: Fp2::neg(&self.c2),
        }
    }

    /// Double an element
    #[inline]
    pub const fn double(&self) -> Fp6 {
        Fp6 {
            c0: Fp2::double(&self.c0),
            c1: Fp2::double(&self.c1),
            c2: Fp2::double(&self.c2),
        }
    }

    /// Karatsuba multiplication over Fp2 (six Fp2 products)
    ///
    /// Toom-3 reaches five products but its interpolation divides by 2 and 3,
    /// which costs more than the product it saves at this size.
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = self.c2 * rhs.c2;

        let c0 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - t1 - t2).mul_by_nonresidue() + t0;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1 + t2.mul_by_nonresidue();
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - t0 - t2 + t1;

        Fp6 { c0, c1, c2 }
    }

    /// Chung-Hasan SQR2 squaring
    pub fn square(&self) -> Fp6 {
        let s0 = self.c0.square();
        let s1 = (self.c0 * self.c1).double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let s3 = (self.c1 * self.c2).double();
        let s4 = self.c2.square();

        Fp6 {
            c0: s3.mul_by_nonresidue() + s0,
            c1: s4.mul_by_nonresidue() + s1,
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    /// Multiply by v: (c0, c1, c2) -> (ξ·c2, c0, c1)
    pub fn mul_by_nonresidue(&self) -> Fp6 {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Multiply by b0 + b1·v
    pub fn mul_by_01(&self, b0: &Fp2, b1: &Fp2) -> Fp6 {
        let aa = self.c0 * b0;
        let bb = self.c1 * b1;

        Fp6 {
            c0: (self.c2 * b1).mul_by_nonresidue() + aa,
            c1: (b0 + b1) * (self.c0 + self.c1) - aa - bb,
            c2: self.c2 * b0 + bb,
        }
    }

    /// Multiply by b1·v
    pub fn mul_by_1(&self, b1: &Fp2) -> Fp6 {
        Fp6 {
            c0: (self.c2 * b1).mul_by_nonresidue(),
            c1: self.c0 * b1,
            c2: self.c1 * b1,
        }
    }

    /// Inverse; none for zero
    pub fn invert(&self) -> CtOption<Fp6> {
        let c0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let c1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c2 = self.c1.square() - self.c0 * self.c2;

        let t = (self.c1 * c2 + self.c2 * c1).mul_by_nonresidue() + self.c0 * c0;
        t.invert().map(|t| Fp6 {
            c0: c0 * t,
            c1: c1 * t,
            c2: c2 * t,
        })
    }

    /// Total inverse with inverse(0) = 0
    pub fn inverse(&self) -> Fp6 {
        self.invert().unwrap_or(Fp6::zero())
    }

    /// Variable-time exponentiation by little-endian u64 limbs
    pub fn pow_vartime(&self, by: &[u64]) -> Fp6 {
        let mut res = Fp6::one();
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
    pub fn pow(&self, by: &BigUint) -> Fp6 {
        self.pow_vartime(&by.to_u64_digits())
    }

    /// Decode c2 || c1 || c0
    pub fn from_bytes(bytes: &[u8; FP6_BYTES]) -> CtOption<Fp6> {
        let coeff = |i: usize| {
            let mut buf = [0u8; FP2_BYTES];
            buf.copy_from_slice(&bytes[i * FP2_BYTES..(i + 1) * FP2_BYTES]);
            Fp2::from_bytes(&buf)
        };
        let (c2, c1, c0) = (coeff(0), coeff(1), coeff(2));
        c0.and_then(|c0| c1.and_then(|c1| c2.map(|c2| Fp6 { c0, c1, c2 })))
    }

    /// Decode from a byte slice, checking length and range
    pub fn from_slice(bytes: &[u8]) -> Result<Fp6> {
        validate::length("Fp6", bytes.len(), FP6_BYTES)?;
        let mut buf = [0u8; FP6_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp6::from_bytes(&buf))
            .ok_or_else(|| Error::encoding("Fp6", "coefficient is not less than the modulus"))
    }

    /// Encode c2 || c1 || c0
    pub fn to_bytes(self) -> [u8; FP6_BYTES] {
        let mut res = [0u8; FP6_BYTES];
        res[..FP2_BYTES].copy_from_slice(&self.c2.to_bytes());
        res[FP2_BYTES..2 * FP2_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[2 * FP2_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Uniformly random element
    pub fn random(rng: &mut impl RngCore) -> Fp6 {
        Fp6 {
            c0: Fp2::random(rng),
            c1: Fp2::random(rng),
            c2: Fp2::random(rng),
        }
    }
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl From<Fp2> for Fp6 {
    fn from(c0: Fp2) -> Fp6 {
        Fp6 {
            c0,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl zeroize::DefaultIsZeroes for Fp6 {}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl_field_ops!(Fp6);
