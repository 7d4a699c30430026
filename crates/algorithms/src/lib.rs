//! BLS12-381 algebraic core
//!
//! This crate implements the arithmetic underneath BLS12-381 signature and
//! pairing schemes:
//!
//! - the extension tower Fp → Fp2 → Fp6 → Fp12 in Montgomery form
//! - G2 points in Jacobian coordinates with double-and-add, wNAF and
//!   bucket multi-scalar multiplication
//! - try-and-increment and simplified SWU maps to G2
//! - zcash-compatible compressed and uncompressed point encodings
//!
//! Variable-time code paths exist (point addition branches on equality,
//! scalar multiplication walks the scalar bits). Do not feed secret scalars
//! to this crate where timing is observable.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic curve primitives
pub mod ec;
pub use ec::bls12_381::{
    curve_params, CurveParams, Fp, Fp12, Fp2, Fp6, G2Config, G2Point, G2,
};
