//! Error handling for field and curve primitives

use std::borrow::Cow;
use std::fmt;

use blscore_api::Error as CoreError;

/// The error type for field and curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Input bytes or text are not a canonical encoding
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// Which rule the input broke
        reason: Cow<'static, str>,
    },

    /// Coordinates do not satisfy the curve equation
    NotOnCurve {
        /// Operation that produced or received the point
        context: &'static str,
    },

    /// Point is on the curve but outside the prime-order subgroup
    NotInSubgroup {
        /// Operation that received the point
        context: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Encoding {
            context,
            reason: reason.into(),
        }
    }
}

/// Result type for field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, reason } => {
                write!(f, "Invalid encoding for {}: {}", context, reason)
            }
            Error::NotOnCurve { context } => write!(f, "{}: point is not on curve", context),
            Error::NotInSubgroup { context } => {
                write!(f, "{}: point is not in the correct subgroup", context)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, reason } => CoreError::SerializationError {
                context,
                message: reason.into_owned(),
            },
            Error::NotOnCurve { context } => CoreError::InvalidPoint {
                context,
                message: "point is not on curve".to_string(),
            },
            Error::NotInSubgroup { context } => CoreError::InvalidPoint {
                context,
                message: "point is not in the correct subgroup".to_string(),
            },
        }
    }
}

pub use blscore_api::error::ResultExt;

pub mod validate;
