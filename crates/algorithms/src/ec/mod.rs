//! Elliptic curve primitives

pub mod bls12_381;
