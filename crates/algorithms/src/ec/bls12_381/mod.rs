//! BLS12-381 field tower and G2 group.
//!
//! Fp, Fp2, Fp6 and Fp12 arithmetic in Montgomery form, Jacobian G2
//! arithmetic, wNAF and Pippenger multiplication, the two hash-to-curve maps
//! and the zcash-compatible point encodings.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

// Operator boilerplate for types exposing inherent `add`, `sub`, `neg` (and `mul`)
macro_rules! impl_binops_additive {
    ($t:ident) => {
        impl<'a> core::ops::Neg for &'a $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                $t::neg(self)
            }
        }

        impl core::ops::Neg for $t {
            type Output = $t;
            #[inline]
            fn neg(self) -> $t {
                $t::neg(&self)
            }
        }

        impl<'a, 'b> core::ops::Add<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t {
                $t::add(self, rhs)
            }
        }

        impl<'b> core::ops::Add<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: &'b $t) -> $t {
                $t::add(&self, rhs)
            }
        }

        impl<'a> core::ops::Add<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t::add(self, &rhs)
            }
        }

        impl core::ops::Add<$t> for $t {
            type Output = $t;
            #[inline]
            fn add(self, rhs: $t) -> $t {
                $t::add(&self, &rhs)
            }
        }

        impl<'a, 'b> core::ops::Sub<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t {
                $t::sub(self, rhs)
            }
        }

        impl<'b> core::ops::Sub<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: &'b $t) -> $t {
                $t::sub(&self, rhs)
            }
        }

        impl<'a> core::ops::Sub<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t::sub(self, &rhs)
            }
        }

        impl core::ops::Sub<$t> for $t {
            type Output = $t;
            #[inline]
            fn sub(self, rhs: $t) -> $t {
                $t::sub(&self, &rhs)
            }
        }

        impl core::ops::AddAssign<$t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self = $t::add(self, &rhs);
            }
        }

        impl<'b> core::ops::AddAssign<&'b $t> for $t {
            #[inline]
            fn add_assign(&mut self, rhs: &'b $t) {
                *self = $t::add(self, rhs);
            }
        }

        impl core::ops::SubAssign<$t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self = $t::sub(self, &rhs);
            }
        }

        impl<'b> core::ops::SubAssign<&'b $t> for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: &'b $t) {
                *self = $t::sub(self, rhs);
            }
        }
    };
}

macro_rules! impl_binops_multiplicative {
    ($t:ident) => {
        impl<'a, 'b> core::ops::Mul<&'b $t> for &'a $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: &'b $t) -> $t {
                $t::mul(self, rhs)
            }
        }

        impl<'b> core::ops::Mul<&'b $t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: &'b $t) -> $t {
                $t::mul(&self, rhs)
            }
        }

        impl<'a> core::ops::Mul<$t> for &'a $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t::mul(self, &rhs)
            }
        }

        impl core::ops::Mul<$t> for $t {
            type Output = $t;
            #[inline]
            fn mul(self, rhs: $t) -> $t {
                $t::mul(&self, &rhs)
            }
        }

        impl core::ops::MulAssign<$t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self = $t::mul(self, &rhs);
            }
        }

        impl<'b> core::ops::MulAssign<&'b $t> for $t {
            #[inline]
            fn mul_assign(&mut self, rhs: &'b $t) {
                *self = $t::mul(self, rhs);
            }
        }
    };
}

macro_rules! impl_field_ops {
    ($t:ident) => {
        impl_binops_additive!($t);
        impl_binops_multiplicative!($t);
    };
}

// Module declarations
pub mod field;
mod encoding;
mod g2;
mod group;
mod hash_to_curve;
mod msm;
mod params;

#[cfg(test)]
mod tests;

// Public API exports
pub use field::{fp::Fp, fp12::Fp12, fp2::Fp2, fp6::Fp6};
pub use g2::G2Point;
pub use group::{G2Config, G2};
pub(crate) use msm::Workspace;
pub use params::{curve_params, CurveParams};
