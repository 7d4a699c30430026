//! Traits shared across the blscore crates

pub mod serialize;

pub use serialize::Serialize;
