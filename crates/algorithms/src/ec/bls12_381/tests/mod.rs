//! BLS12-381 test suite

mod hash_to_curve;
