//! Deterministic maps from field bytes to G2
//!
//! Two maps are provided: try-and-increment, which walks x upward until
//! x³ + b is a square, and the simplified SWU map onto a 3-isogenous curve
//! followed by the isogeny. Both finish by clearing the cofactor, so every
//! output lies in the prime-order subgroup.

use subtle::ConditionallySelectable;
use tracing::{debug, trace};

use super::field::fp2::Fp2;
use super::g2::G2Point;
use super::msm::Workspace;
use super::params::CurveParams;
use crate::error::{validate, Result};

/// Try-and-increment map
///
/// `bytes` is an Fp2 encoding (c1 || c0). The loop has no iteration cap;
/// roughly half of all x values succeed.
pub(crate) fn map_to_point_ti(params: &CurveParams, bytes: &[u8]) -> Result<G2Point> {
    let mut x = Fp2::from_slice(bytes)?;
    let mut tries = 0u64;

    let y = loop {
        let y2 = x.square() * x + params.b2;
        let root = y2.sqrt();
        if bool::from(root.is_some()) {
            break root.unwrap_or(Fp2::zero());
        }
        x += Fp2::one();
        tries += 1;
    };
    trace!(increments = tries, "try-and-increment found a square");

    // keep the lexicographically largest root
    let y = Fp2::conditional_select(&-y, &y, y.lexicographically_largest());
    let p = G2Point::from_affine_unchecked(x, y);

    Ok(p.mul_scalar(&params.h_eff))
}

/// Simplified SWU for the isogenous curve y² = x³ + A'x + B'
pub(crate) fn swu(params: &CurveParams, u: &Fp2) -> (Fp2, Fp2) {
    let z = params.sswu_z;
    let tv1 = z * u.square();
    let tv2 = tv1.square() + tv1;

    let x1 = if bool::from(tv2.is_zero()) {
        debug!("SWU exceptional case, x1 = B/(Z·A)");
        params.sswu_b_over_za
    } else {
        params.sswu_minus_b_over_a * (Fp2::one() + tv2.inverse())
    };

    let gx1 = (x1.square() + params.sswu_a) * x1 + params.sswu_b;
    let x2 = tv1 * x1;
    let gx2 = gx1 * tv1.square() * tv1;

    let root1 = gx1.sqrt();
    let (x, y) = if bool::from(root1.is_some()) {
        (x1, root1.unwrap_or(Fp2::zero()))
    } else {
        // gx2 = Z³u⁶·gx1 is square whenever gx1 is not
        (x2, gx2.sqrt().unwrap_or(Fp2::zero()))
    };

    let flip = u.sgn0() ^ y.sgn0();
    (x, Fp2::conditional_select(&y, &-y, flip))
}

/// Horner evaluation of a polynomial given constant term first
fn eval(coeffs: &[Fp2], x: &Fp2) -> Fp2 {
    coeffs
        .iter()
        .rev()
        .fold(Fp2::zero(), |acc, c| acc * x + c)
}

/// The 3-isogeny from the SWU curve onto y² = x³ + 4(u + 1)
pub(crate) fn iso_map(params: &CurveParams, x: &Fp2, y: &Fp2) -> (Fp2, Fp2) {
    let x_num = eval(&params.iso_x_num, x);
    let x_den = eval(&params.iso_x_den, x);
    let y_num = eval(&params.iso_y_num, x);
    let y_den = eval(&params.iso_y_den, x);

    (x_num * x_den.inverse(), *y * y_num * y_den.inverse())
}

/// SWU map, isogeny, cofactor clearing with wNAF; the result is affine
pub(crate) fn map_to_point_swu(
    params: &CurveParams,
    workspace: &mut Workspace,
    window: usize,
    bytes: &[u8],
) -> Result<G2Point> {
    let u = Fp2::from_slice(bytes)?;
    let (x, y) = swu(params, &u);
    let (x, y) = iso_map(params, &x, &y);

    let p = G2Point::from_affine_unchecked(x, y);
    validate::on_curve(bool::from(p.is_on_curve()), "SWU map")?;

    Ok(workspace.wnaf_mul(&p, &params.h_eff_limbs, window).to_affine())
}
