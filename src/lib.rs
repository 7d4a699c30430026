//! # blscore
//!
//! The algebraic core of BLS12-381: the field tower, the G2 group, windowed
//! and multi-scalar multiplication, hash-to-curve and the zcash point format.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! blscore = "0.3"
//! ```
//!
//! ```no_run
//! use blscore::prelude::*;
//!
//! let mut g2 = G2::new();
//! let p = g2.map_to_point_swu(&[7u8; 96]).unwrap();
//! let bytes = g2.to_compressed(&p);
//! assert_eq!(g2.from_compressed(&bytes).unwrap(), p);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support in the dependencies
//! - `serde`: `Serialize`/`Deserialize` for [`G2Config`](algorithms::G2Config)
//!   and `Serialize` for the public error type
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`blscore-api`]: public error type and the byte serialization trait
//! - [`blscore-params`]: curve constants in hex and encoding sizes
//! - [`blscore-algorithms`]: field and group arithmetic

#![forbid(unsafe_code)]

pub use blscore_algorithms as algorithms;
pub use blscore_api as api;
pub use blscore_params as params;

/// Common imports for blscore users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result, Serialize};

    // Field tower and group
    pub use crate::algorithms::{Fp, Fp12, Fp2, Fp6, G2Config, G2Point, G2};

    // Scalars are plain non-negative integers
    pub use num_bigint::BigUint;

    // Constant-time helpers used by the field API
    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

    pub use rand::RngCore;
    pub use zeroize::Zeroize;
}
