//! Validation utilities for boundary checks

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an encoding rule
#[inline(always)]
pub fn encoding(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::encoding(context, reason));
    }
    Ok(())
}

/// Validate that a point satisfies the curve equation
#[inline(always)]
pub fn on_curve(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NotOnCurve { context });
    }
    Ok(())
}

/// Validate that a point lies in the prime-order subgroup
#[inline(always)]
pub fn in_subgroup(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NotInSubgroup { context });
    }
    Ok(())
}
