//! Error handling for the P-256 primitives

use core::fmt;

use meshbus_api::Error as CoreError;

pub mod validate;

/// The error type for elliptic-curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
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

    /// A point failed validation
    InvalidPoint {
        /// Operation that validated the point
        context: &'static str,
        /// Which check failed
        reason: &'static str,
    },

    /// The random number generator failed
    RandomGeneration {
        /// Operation that requested randomness
        context: &'static str,
    },

}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for elliptic-curve primitives
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
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::InvalidPoint { context, reason } => {
                write!(f, "Invalid point in {}: {}", context, reason)
            }
            Error::RandomGeneration { context } => {
                write!(f, "Random generation failed in {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                CoreError::invalid_parameter(name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidPoint { context, reason } => CoreError::invalid_key(context, reason),
            Error::RandomGeneration { context } => {
                CoreError::random_generation(context, "generator returned an error")
            }
        }
    }
}

#[cfg(test)]
mod tests;
