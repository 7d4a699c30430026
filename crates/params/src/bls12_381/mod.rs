//! Constants for BLS12-381

pub mod curve;
pub mod hash_to_curve;

/// Size of a canonical Fp encoding in bytes
pub const FP_BYTES: usize = 48;

/// Size of a canonical Fp2 encoding in bytes (c1 || c0)
pub const FP2_BYTES: usize = 2 * FP_BYTES;

/// Size of a canonical Fp6 encoding in bytes (c2 || c1 || c0)
pub const FP6_BYTES: usize = 3 * FP2_BYTES;

/// Size of a canonical Fp12 encoding in bytes (c1 || c0)
pub const FP12_BYTES: usize = 2 * FP6_BYTES;

/// Size of a compressed G2 point in bytes
pub const G2_COMPRESSED_BYTES: usize = FP2_BYTES;

/// Size of an uncompressed G2 point in bytes
pub const G2_UNCOMPRESSED_BYTES: usize = 2 * FP2_BYTES;

/// Bit 7 of the first byte: compressed encoding
pub const FLAG_COMPRESSED: u8 = 1 << 7;

/// Bit 6 of the first byte: point at infinity
pub const FLAG_INFINITY: u8 = 1 << 6;

/// Bit 5 of the first byte: y is the lexicographically largest root
pub const FLAG_SIGN: u8 = 1 << 5;

/// Mask clearing the three flag bits
pub const FLAG_MASK: u8 = 0x1f;

/// Window width of the wNAF recoding used for cofactor clearing
pub const WNAF_WINDOW: usize = 6;

/// Bucket window used by multi-scalar multiplication for small inputs
pub const MSM_SMALL_WINDOW: usize = 3;

/// Input count from which the bucket window grows with log10(n)
pub const MSM_SMALL_THRESHOLD: usize = 32;
