//! zcash-compatible G2 encodings
//!
//! Coordinates are written c1 || c0, each 48 bytes big-endian. The top three
//! bits of the first byte carry the compression, infinity and sign flags.

use subtle::{Choice, ConditionallySelectable};
use tracing::debug;

use super::field::fp2::Fp2;
use super::g2::G2Point;
use super::params::curve_params;
use crate::error::{validate, Error, Result};
use blscore_params::bls12_381::{
    FLAG_COMPRESSED, FLAG_INFINITY, FLAG_MASK, FLAG_SIGN, FP2_BYTES, G2_COMPRESSED_BYTES,
    G2_UNCOMPRESSED_BYTES,
};

fn reject(e: Error) -> Error {
    debug!(error = %e, "rejected G2 encoding");
    e
}

fn coordinate(bytes: &[u8], context: &'static str) -> Result<Fp2> {
    let mut buf = [0u8; FP2_BYTES];
    buf.copy_from_slice(bytes);
    Option::from(Fp2::from_bytes(&buf))
        .ok_or_else(|| Error::encoding(context, "coordinate is not less than the modulus"))
}

fn is_zero_tail(bytes: &[u8]) -> bool {
    bytes[1..].iter().all(|&b| b == 0)
}

impl G2Point {
    /// 96-byte compressed form: x with the sign of y in the flag bits
    pub fn to_compressed(&self) -> [u8; G2_COMPRESSED_BYTES] {
        let mut out = [0u8; G2_COMPRESSED_BYTES];
        match self.to_affine_coordinates() {
            None => out[0] = FLAG_COMPRESSED | FLAG_INFINITY,
            Some((x, y)) => {
                out.copy_from_slice(&x.to_bytes());
                out[0] |= FLAG_COMPRESSED;
                if bool::from(y.lexicographically_largest()) {
                    out[0] |= FLAG_SIGN;
                }
            }
        }
        out
    }

    /// 192-byte uncompressed form x || y
    pub fn to_uncompressed(&self) -> [u8; G2_UNCOMPRESSED_BYTES] {
        let mut out = [0u8; G2_UNCOMPRESSED_BYTES];
        match self.to_affine_coordinates() {
            None => out[0] = FLAG_INFINITY,
            Some((x, y)) => {
                out[..FP2_BYTES].copy_from_slice(&x.to_bytes());
                out[FP2_BYTES..].copy_from_slice(&y.to_bytes());
            }
        }
        out
    }

    /// Decode a compressed point and require it to lie in the prime-order subgroup
    pub fn from_compressed(bytes: &[u8]) -> Result<G2Point> {
        let p = G2Point::from_compressed_unchecked(bytes)?;
        validate::in_subgroup(bool::from(p.is_torsion_free()), "G2 compressed").map_err(reject)?;
        Ok(p)
    }

    /// Decode a compressed point without the subgroup check
    ///
    /// The point is on the curve by construction.
    pub fn from_compressed_unchecked(bytes: &[u8]) -> Result<G2Point> {
        const CTX: &str = "G2 compressed";
        validate::length(CTX, bytes.len(), G2_COMPRESSED_BYTES).map_err(reject)?;

        let flags = bytes[0];
        validate::encoding(
            flags & FLAG_COMPRESSED != 0,
            CTX,
            "compression flag must be set",
        )
        .map_err(reject)?;

        if flags & FLAG_INFINITY != 0 {
            validate::encoding(
                flags == FLAG_COMPRESSED | FLAG_INFINITY && is_zero_tail(bytes),
                CTX,
                "infinity must be encoded with all other bits zero",
            )
            .map_err(reject)?;
            return Ok(G2Point::identity());
        }

        let mut buf = [0u8; G2_COMPRESSED_BYTES];
        buf.copy_from_slice(bytes);
        buf[0] &= FLAG_MASK;
        let x = coordinate(&buf, CTX).map_err(reject)?;

        let y2 = x.square() * x + curve_params().b2;
        let y = Option::<Fp2>::from(y2.sqrt())
            .ok_or(Error::NotOnCurve { context: CTX })
            .map_err(reject)?;

        let sign = Choice::from(((flags & FLAG_SIGN) != 0) as u8);
        let y = Fp2::conditional_select(&y, &-y, y.lexicographically_largest() ^ sign);

        Ok(G2Point::from_affine_unchecked(x, y))
    }

    /// Decode an uncompressed point, checking the curve equation and the subgroup
    pub fn from_uncompressed(bytes: &[u8]) -> Result<G2Point> {
        let p = G2Point::from_uncompressed_unchecked(bytes)?;
        validate::on_curve(bool::from(p.is_on_curve()), "G2 uncompressed").map_err(reject)?;
        validate::in_subgroup(bool::from(p.is_torsion_free()), "G2 uncompressed")
            .map_err(reject)?;
        Ok(p)
    }

    /// Decode an uncompressed point checking only the flags and field ranges
    pub fn from_uncompressed_unchecked(bytes: &[u8]) -> Result<G2Point> {
        const CTX: &str = "G2 uncompressed";
        validate::length(CTX, bytes.len(), G2_UNCOMPRESSED_BYTES).map_err(reject)?;

        let flags = bytes[0];
        validate::encoding(
            flags & FLAG_COMPRESSED == 0,
            CTX,
            "compression flag must be clear",
        )
        .map_err(reject)?;
        validate::encoding(flags & FLAG_SIGN == 0, CTX, "sign flag must be clear")
            .map_err(reject)?;

        if flags & FLAG_INFINITY != 0 {
            validate::encoding(
                flags == FLAG_INFINITY && is_zero_tail(bytes),
                CTX,
                "infinity must be encoded with all other bits zero",
            )
            .map_err(reject)?;
            return Ok(G2Point::identity());
        }

        let mut buf = [0u8; G2_UNCOMPRESSED_BYTES];
        buf.copy_from_slice(bytes);
        buf[0] &= FLAG_MASK;
        let x = coordinate(&buf[..FP2_BYTES], CTX).map_err(reject)?;
        let y = coordinate(&buf[FP2_BYTES..], CTX).map_err(reject)?;

        Ok(G2Point::from_affine_unchecked(x, y))
    }

    /// Raw 192-byte x || y with no flags; only the curve equation is checked
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<G2Point> {
        const CTX: &str = "G2 raw";
        validate::length(CTX, bytes.len(), G2_UNCOMPRESSED_BYTES).map_err(reject)?;

        let x = coordinate(&bytes[..FP2_BYTES], CTX).map_err(reject)?;
        let y = coordinate(&bytes[FP2_BYTES..], CTX).map_err(reject)?;
        let p = G2Point::from_affine_unchecked(x, y);
        validate::on_curve(bool::from(p.is_on_curve()), CTX).map_err(reject)?;
        Ok(p)
    }

    /// Raw 192-byte x || y of the affine point; infinity encodes as all zeros
    pub fn to_raw_bytes(&self) -> [u8; G2_UNCOMPRESSED_BYTES] {
        let mut out = [0u8; G2_UNCOMPRESSED_BYTES];
        if let Some((x, y)) = self.to_affine_coordinates() {
            out[..FP2_BYTES].copy_from_slice(&x.to_bytes());
            out[FP2_BYTES..].copy_from_slice(&y.to_bytes());
        }
        out
    }
}

impl blscore_api::Serialize for G2Point {
    fn from_bytes(bytes: &[u8]) -> blscore_api::Result<Self> {
        G2Point::from_compressed(bytes).map_err(blscore_api::Error::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}
