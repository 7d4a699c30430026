//! Public API traits and types for the blscore library
//!
//! This crate provides the public API surface shared by the blscore crates:
//! the error type returned from every fallible boundary operation and the
//! byte serialization trait implemented by group elements.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::Serialize;

// Re-export trait modules for direct access
pub use traits::serialize;
