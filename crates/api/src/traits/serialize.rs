//! Traits for byte serialization of public curve types.

use crate::Result;

/// A trait for public types that can be serialized to and from bytes.
///
/// Implementations must reject any input that is not the canonical encoding
/// of a valid value; `from_bytes(&x.to_bytes())` must return `x`.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
