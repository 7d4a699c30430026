//! The G2 engine: curve constants, tuning knobs and scratch space in one place

use num_bigint::BigUint;

use super::g2::G2Point;
use super::hash_to_curve;
use super::msm::Workspace;
use super::params::{curve_params, CurveParams};
use crate::error::{validate, Result};
use blscore_params::bls12_381::{
    G2_COMPRESSED_BYTES, G2_UNCOMPRESSED_BYTES, MSM_SMALL_THRESHOLD, MSM_SMALL_WINDOW,
    WNAF_WINDOW,
};

/// Tuning for windowed and multi-scalar multiplication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct G2Config {
    /// wNAF window width used by `wnaf_mul` and the SWU map
    pub wnaf_window: usize,
    /// Bucket window for multi-exponentiation below the threshold
    pub msm_small_window: usize,
    /// Input count from which the bucket window becomes ⌈log10 n⌉
    pub msm_small_threshold: usize,
}

impl Default for G2Config {
    fn default() -> Self {
        G2Config {
            wnaf_window: WNAF_WINDOW,
            msm_small_window: MSM_SMALL_WINDOW,
            msm_small_threshold: MSM_SMALL_THRESHOLD,
        }
    }
}

impl G2Config {
    /// Check the window widths are usable
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            (2..=16).contains(&self.wnaf_window),
            "wnaf_window",
            "window must be between 2 and 16",
        )?;
        validate::parameter(
            (1..=16).contains(&self.msm_small_window),
            "msm_small_window",
            "window must be between 1 and 16",
        )?;
        validate::parameter(
            self.msm_small_threshold >= 1,
            "msm_small_threshold",
            "threshold must be at least 1",
        )?;
        Ok(())
    }
}

/// G2 group engine
///
/// Owns the scratch tables used by wNAF and bucket multiplication. Methods
/// that touch them take `&mut self`, so one engine serves one caller at a
/// time; create one per thread for parallel use.
#[derive(Debug, Clone)]
pub struct G2 {
    params: &'static CurveParams,
    config: G2Config,
    workspace: Workspace,
}

impl Default for G2 {
    fn default() -> Self {
        G2::new()
    }
}

impl G2 {
    /// Engine with the default configuration
    pub fn new() -> G2 {
        G2 {
            params: curve_params(),
            config: G2Config::default(),
            workspace: Workspace::new(),
        }
    }

    /// Engine with a custom configuration
    pub fn with_config(config: G2Config) -> Result<G2> {
        config.validate()?;
        Ok(G2 {
            params: curve_params(),
            config,
            workspace: Workspace::new(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &G2Config {
        &self.config
    }

    /// Curve constants
    pub fn params(&self) -> &'static CurveParams {
        self.params
    }

    /// Prime subgroup order
    pub fn q(&self) -> &BigUint {
        &self.params.q
    }

    /// Point at infinity
    pub fn zero(&self) -> G2Point {
        G2Point::identity()
    }

    /// Standard generator
    pub fn one(&self) -> G2Point {
        self.params.generator
    }

    /// Whether `p` is the point at infinity
    pub fn is_zero(&self, p: &G2Point) -> bool {
        bool::from(p.is_identity())
    }

    /// Projective equality
    pub fn equal(&self, a: &G2Point, b: &G2Point) -> bool {
        a == b
    }

    /// Whether `p` satisfies the curve equation
    pub fn is_on_curve(&self, p: &G2Point) -> bool {
        bool::from(p.is_on_curve())
    }

    /// q·P is the point at infinity
    pub fn in_correct_subgroup(&self, p: &G2Point) -> bool {
        bool::from(p.is_torsion_free())
    }

    /// Whether Z = 1
    pub fn is_affine(&self, p: &G2Point) -> bool {
        bool::from(p.is_affine())
    }

    /// Normalize in place to Z = 1 (the identity stays as it is)
    pub fn affine(&self, p: &mut G2Point) {
        *p = p.to_affine();
    }

    /// Normalize every point in place with a single inversion
    pub fn affine_batch(&self, points: &mut [G2Point]) {
        G2Point::batch_normalize(points);
    }

    /// a + b
    pub fn add(&self, a: &G2Point, b: &G2Point) -> G2Point {
        a + b
    }

    /// 2·p
    pub fn double(&self, p: &G2Point) -> G2Point {
        p.double()
    }

    /// -p
    pub fn neg(&self, p: &G2Point) -> G2Point {
        -p
    }

    /// a - b
    pub fn sub(&self, a: &G2Point, b: &G2Point) -> G2Point {
        a - b
    }

    /// Double-and-add by any non-negative integer
    pub fn mul_scalar(&self, p: &G2Point, e: &BigUint) -> G2Point {
        p.mul_scalar(e)
    }

    /// Windowed NAF multiplication by any non-negative integer
    pub fn wnaf_mul(&mut self, p: &G2Point, e: &BigUint) -> G2Point {
        let window = self.config.wnaf_window;
        self.workspace.wnaf_mul(p, &e.to_u64_digits(), window)
    }

    /// Multiply in place by the effective cofactor
    pub fn clear_cofactor(&self, p: &mut G2Point) {
        *p = p.clear_cofactor();
    }

    /// Σ scalars[i]·points[i]; the slices must have equal length
    pub fn multi_exp(&mut self, points: &[G2Point], scalars: &[BigUint]) -> Result<G2Point> {
        self.workspace.multi_exp(
            points,
            scalars,
            self.config.msm_small_window,
            self.config.msm_small_threshold,
        )
    }

    /// Try-and-increment map of a 96-byte Fp2 encoding
    pub fn map_to_point_ti(&self, bytes: &[u8]) -> Result<G2Point> {
        hash_to_curve::map_to_point_ti(self.params, bytes)
    }

    /// SWU map of a 96-byte Fp2 encoding; the result is affine
    pub fn map_to_point_swu(&mut self, bytes: &[u8]) -> Result<G2Point> {
        hash_to_curve::map_to_point_swu(
            self.params,
            &mut self.workspace,
            self.config.wnaf_window,
            bytes,
        )
    }

    /// 96-byte compressed encoding
    pub fn to_compressed(&self, p: &G2Point) -> [u8; G2_COMPRESSED_BYTES] {
        p.to_compressed()
    }

    /// 192-byte uncompressed encoding
    pub fn to_uncompressed(&self, p: &G2Point) -> [u8; G2_UNCOMPRESSED_BYTES] {
        p.to_uncompressed()
    }

    /// Compressed decode with the subgroup check
    pub fn from_compressed(&self, bytes: &[u8]) -> Result<G2Point> {
        G2Point::from_compressed(bytes)
    }

    /// Compressed decode without the subgroup check
    pub fn from_compressed_unchecked(&self, bytes: &[u8]) -> Result<G2Point> {
        G2Point::from_compressed_unchecked(bytes)
    }

    /// Uncompressed decode with curve and subgroup checks
    pub fn from_uncompressed(&self, bytes: &[u8]) -> Result<G2Point> {
        G2Point::from_uncompressed(bytes)
    }

    /// Uncompressed decode with no point validation
    pub fn from_uncompressed_unchecked(&self, bytes: &[u8]) -> Result<G2Point> {
        G2Point::from_uncompressed_unchecked(bytes)
    }

    /// Raw x || y, checked against the curve equation only
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<G2Point> {
        G2Point::from_raw_bytes(bytes)
    }

    /// Raw x || y of the affine point
    pub fn to_bytes(&self, p: &G2Point) -> [u8; G2_UNCOMPRESSED_BYTES] {
        p.to_raw_bytes()
    }
}
