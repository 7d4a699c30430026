//! Testing utilities and benchmarks for the blscore library
//!
//! Integration tests live under `tests/`, benchmarks under `benches/`. This
//! library holds what they share: tracing setup, seeded randomness and the
//! known-answer tables.

pub mod logging;
pub mod vectors;

use blscore_algorithms::G2Point;
use num_bigint::BigUint;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible tests and benchmarks
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Uniform integer of `bytes` bytes
pub fn random_scalar(rng: &mut impl RngCore, bytes: usize) -> BigUint {
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);
    BigUint::from_bytes_be(&buf)
}

/// `n` random subgroup points
pub fn random_points(rng: &mut impl RngCore, n: usize) -> Vec<G2Point> {
    (0..n).map(|_| G2Point::random(rng)).collect()
}
