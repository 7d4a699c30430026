//! Constant values for the blscore library
//!
//! Byte widths, window sizes and the canonical encodings of every fixed
//! BLS12-381 constant live here so that the arithmetic crates and external
//! tooling agree on a single source.

#![no_std]

pub mod bls12_381;
