//! G2 points in Jacobian coordinates
//!
//! A point (X, Y, Z) stands for the affine point (X/Z², Y/Z³) on the twist
//! y² = x³ + 4(u + 1). Any point with Z = 0 is the point at infinity; the
//! canonical identity is (0, 1, 0).

use core::fmt;
use core::ops::{Mul, MulAssign};

use num_bigint::BigUint;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::field::fp2::Fp2;
use super::params::curve_params;

/// A G2 point in Jacobian coordinates
#[derive(Copy, Clone)]
pub struct G2Point {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

impl G2Point {
    /// The point at infinity (0, 1, 0)
    pub const fn identity() -> G2Point {
        G2Point {
            x: Fp2::zero(),
            y: Fp2::one(),
            z: Fp2::zero(),
        }
    }

    /// The standard generator in affine form
    pub fn generator() -> G2Point {
        curve_params().generator
    }

    /// Wrap affine coordinates without checking the curve equation
    pub const fn from_affine_unchecked(x: Fp2, y: Fp2) -> G2Point {
        G2Point { x, y, z: Fp2::one() }
    }

    /// Wrap Jacobian coordinates without any check
    pub const fn from_jacobian_unchecked(x: Fp2, y: Fp2, z: Fp2) -> G2Point {
        G2Point { x, y, z }
    }

    /// Jacobian X
    pub fn x(&self) -> &Fp2 {
        &self.x
    }

    /// Jacobian Y
    pub fn y(&self) -> &Fp2 {
        &self.y
    }

    /// Jacobian Z
    pub fn z(&self) -> &Fp2 {
        &self.z
    }

    /// Z = 0
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Z = 1
    pub fn is_affine(&self) -> Choice {
        self.z.is_one()
    }

    /// Y² = X³ + b·Z⁶, or the point at infinity
    pub fn is_on_curve(&self) -> Choice {
        let z2 = self.z.square();
        let z6 = z2.square() * z2;
        let lhs = self.y.square();
        let rhs = self.x.square() * self.x + z6 * curve_params().b2;

        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// q·P = 0
    pub fn is_torsion_free(&self) -> Choice {
        self.mul_scalar(&curve_params().q).is_identity()
    }

    /// Normalize to Z = 1 with one inversion; the identity is returned unchanged
    pub fn to_affine(&self) -> G2Point {
        let zinv = self.z.inverse();
        let zinv2 = zinv.square();
        let affine = G2Point {
            x: self.x * zinv2,
            y: self.y * zinv2 * zinv,
            z: Fp2::one(),
        };

        G2Point::conditional_select(&affine, &G2Point::identity(), self.is_identity())
    }

    /// Affine (x, y), or `None` for the point at infinity
    pub fn to_affine_coordinates(&self) -> Option<(Fp2, Fp2)> {
        if bool::from(self.is_identity()) {
            return None;
        }
        let p = self.to_affine();
        Some((p.x, p.y))
    }

    /// Normalize a batch with a single field inversion (Montgomery's trick)
    pub fn batch_normalize(points: &mut [G2Point]) {
        let mut acc = Fp2::one();
        let mut prefix = Vec::with_capacity(points.len());
        for p in points.iter() {
            prefix.push(acc);
            acc = Fp2::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        // acc is a product of non-zero values
        let mut inv = acc.inverse();
        for (p, before) in points.iter_mut().zip(prefix).rev() {
            let skip = p.is_identity();
            let zinv = inv * before;
            inv = Fp2::conditional_select(&(inv * p.z), &inv, skip);

            let zinv2 = zinv.square();
            let affine = G2Point {
                x: p.x * zinv2,
                y: p.y * zinv2 * zinv,
                z: Fp2::one(),
            };
            *p = G2Point::conditional_select(&affine, &G2Point::identity(), skip);
        }
    }

    /// Point doubling (dbl-2009-l)
    pub fn double(&self) -> G2Point {
        if bool::from(self.is_identity()) {
            return *self;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let y3 = e * (d - x3) - c.double().double().double();
        let z3 = (self.y * self.z).double();

        G2Point {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point addition (add-2007-bl), falling back to doubling for equal inputs
    pub fn add(&self, rhs: &G2Point) -> G2Point {
        if bool::from(self.is_identity()) {
            return *rhs;
        }
        if bool::from(rhs.is_identity()) {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        if u1 == u2 {
            if s1 == s2 {
                return self.double();
            }
            return G2Point::identity();
        }

        let h = u2 - u1;
        let i = h.double().square();
        let j = h * i;
        let r = (s2 - s1).double();
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        G2Point {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// (X, -Y, Z)
    pub fn neg(&self) -> G2Point {
        G2Point {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// self - rhs
    pub fn sub(&self, rhs: &G2Point) -> G2Point {
        self.add(&rhs.neg())
    }

    /// Right-to-left double-and-add over the bits of `e`
    ///
    /// Any non-negative integer is accepted; nothing is reduced mod q.
    pub fn mul_scalar(&self, e: &BigUint) -> G2Point {
        let mut acc = G2Point::identity();
        let mut base = *self;
        for i in 0..e.bits() {
            if e.bit(i) {
                acc = acc.add(&base);
            }
            base = base.double();
        }
        acc
    }

    /// Multiply by the effective cofactor h_eff
    pub fn clear_cofactor(&self) -> G2Point {
        self.mul_scalar(&curve_params().h_eff)
    }

    /// Random point in the prime-order subgroup: a random multiple of the generator
    pub fn random(rng: &mut impl RngCore) -> G2Point {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        let k = BigUint::from_bytes_be(&bytes) % &curve_params().q;
        G2Point::generator().mul_scalar(&k)
    }
}

impl Default for G2Point {
    fn default() -> G2Point {
        G2Point::identity()
    }
}

impl fmt::Debug for G2Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("G2Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl fmt::Display for G2Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_affine_coordinates() {
            None => write!(f, "G2(infinity)"),
            Some((x, y)) => write!(f, "G2({:?}, {:?})", x, y),
        }
    }
}

impl zeroize::DefaultIsZeroes for G2Point {}

impl ConstantTimeEq for G2Point {
    /// Projective equality: X1·Z2² = X2·Z1² and Y1·Z2³ = Y2·Z1³
    fn ct_eq(&self, other: &Self) -> Choice {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let x_eq = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let y_eq = (self.y * z2z2 * other.z).ct_eq(&(other.y * z1z1 * self.z));

        let self_inf = self.is_identity();
        let other_inf = other.is_identity();

        (self_inf & other_inf) | (!self_inf & !other_inf & x_eq & y_eq)
    }
}

impl Eq for G2Point {}
impl PartialEq for G2Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for G2Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Point {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            z: Fp2::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a G2Point {
    type Output = G2Point;

    fn mul(self, rhs: &'b BigUint) -> G2Point {
        self.mul_scalar(rhs)
    }
}

impl<'b> Mul<&'b BigUint> for G2Point {
    type Output = G2Point;

    fn mul(self, rhs: &'b BigUint) -> G2Point {
        self.mul_scalar(rhs)
    }
}

impl<'b> MulAssign<&'b BigUint> for G2Point {
    fn mul_assign(&mut self, rhs: &'b BigUint) {
        *self = self.mul_scalar(rhs);
    }
}

impl<T> core::iter::Sum<T> for G2Point
where
    T: core::borrow::Borrow<G2Point>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(G2Point::identity(), |acc, item| acc + item.borrow())
    }
}

impl_binops_additive!(G2Point);
