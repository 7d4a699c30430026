//! Curve constants decoded once from their hex form

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::field::fp::{Fp, MODULUS};
use super::field::fp2::Fp2;
use super::g2::G2Point;
use crate::error::{validate, Error, Result};
use blscore_params::bls12_381::curve::{
    BLS_X, G2_B, G2_EFFECTIVE_COFACTOR_HEX, G2_GENERATOR_X, G2_GENERATOR_Y, GROUP_ORDER_HEX,
    MODULUS_HEX,
};
use blscore_params::bls12_381::hash_to_curve::{
    ISO3_XDEN, ISO3_XNUM, ISO3_YDEN, ISO3_YNUM, SSWU_A, SSWU_B, SSWU_Z,
};

/// Decoded BLS12-381 constants shared by every G2 operation
#[derive(Debug, Clone)]
pub struct CurveParams {
    /// Base field modulus p
    pub modulus: BigUint,
    /// Prime subgroup order q
    pub q: BigUint,
    /// Effective cofactor h_eff
    pub h_eff: BigUint,
    /// h_eff as little-endian limbs, the form the wNAF recoder consumes
    pub h_eff_limbs: Vec<u64>,
    /// |x| of the curve parameter
    pub x: u64,
    /// Twist coefficient b2 = 4(u + 1)
    pub b2: Fp2,
    /// Standard generator, affine (Z = 1)
    pub generator: G2Point,
    /// A' of the isogenous curve used by the SWU map
    pub sswu_a: Fp2,
    /// B' of the isogenous curve used by the SWU map
    pub sswu_b: Fp2,
    /// Non-square Z of the SWU map
    pub sswu_z: Fp2,
    /// B' / (Z A'), the exceptional-case x1
    pub sswu_b_over_za: Fp2,
    /// -B' / A'
    pub sswu_minus_b_over_a: Fp2,
    /// 3-isogeny x numerator, constant term first
    pub iso_x_num: [Fp2; 4],
    /// 3-isogeny x denominator, constant term first (monic, degree 2)
    pub iso_x_den: [Fp2; 3],
    /// 3-isogeny y numerator, constant term first
    pub iso_y_num: [Fp2; 4],
    /// 3-isogeny y denominator, constant term first (monic, degree 3)
    pub iso_y_den: [Fp2; 4],
}

static CURVE: Lazy<CurveParams> = Lazy::new(|| match CurveParams::build() {
    Ok(params) => params,
    Err(e) => panic!("BLS12-381 constant table is inconsistent: {}", e),
});

/// Process-wide curve constants
pub fn curve_params() -> &'static CurveParams {
    &CURVE
}

fn parse_fp2(pair: (&str, &str)) -> Result<Fp2> {
    Ok(Fp2::new(Fp::from_hex(pair.0)?, Fp::from_hex(pair.1)?))
}

fn parse_table<const N: usize>(table: &[(&str, &str); N]) -> Result<[Fp2; N]> {
    let mut out = [Fp2::zero(); N];
    for (slot, pair) in out.iter_mut().zip(table.iter()) {
        *slot = parse_fp2(*pair)?;
    }
    Ok(out)
}

fn parse_biguint(name: &'static str, hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or_else(|| Error::encoding(name, "invalid hex"))
}

impl CurveParams {
    fn build() -> Result<CurveParams> {
        let modulus = parse_biguint("modulus", MODULUS_HEX)?;
        let limbs = modulus.to_u64_digits();
        validate::parameter(
            limbs.as_slice() == MODULUS.as_slice(),
            "modulus",
            "hex modulus disagrees with the Montgomery limbs",
        )?;

        let q = parse_biguint("group order", GROUP_ORDER_HEX)?;
        let h_eff = parse_biguint("effective cofactor", G2_EFFECTIVE_COFACTOR_HEX)?;
        let h_eff_limbs = h_eff.to_u64_digits();

        let b2 = parse_fp2(G2_B)?;
        let gx = parse_fp2(G2_GENERATOR_X)?;
        let gy = parse_fp2(G2_GENERATOR_Y)?;
        validate::on_curve(gy.square() == gx.square() * gx + b2, "G2 generator")?;

        let sswu_a = parse_fp2(SSWU_A)?;
        let sswu_b = parse_fp2(SSWU_B)?;
        let sswu_z = parse_fp2(SSWU_Z)?;
        let za = sswu_z * sswu_a;
        validate::parameter(
            !bool::from(za.is_zero()),
            "SWU constants",
            "Z·A' must be invertible",
        )?;

        Ok(CurveParams {
            modulus,
            q,
            h_eff,
            h_eff_limbs,
            x: BLS_X,
            b2,
            generator: G2Point::from_affine_unchecked(gx, gy),
            sswu_a,
            sswu_b,
            sswu_z,
            sswu_b_over_za: sswu_b * za.inverse(),
            sswu_minus_b_over_a: -(sswu_b * sswu_a.inverse()),
            iso_x_num: parse_table(&ISO3_XNUM)?,
            iso_x_den: parse_table(&ISO3_XDEN)?,
            iso_y_num: parse_table(&ISO3_YNUM)?,
            iso_y_den: parse_table(&ISO3_YDEN)?,
        })
    }
}
