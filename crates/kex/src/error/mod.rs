//! Error handling for key agreement operations

use core::fmt;
use meshbus_algorithms::error::Error as PrimitiveError;
use meshbus_api::Error as CoreError;

#[cfg(feature = "std")]
use std::string::ToString;

pub mod validate;

/// Error type for ECDH and EC-SPEKE operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error from the curve arithmetic
    Primitive(PrimitiveError),

    /// A key failed validation
    InvalidKey {
        /// Kind of key
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A caller-supplied argument was rejected
    InvalidParameter {
        /// Operation that rejected the argument
        context: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Hash-to-curve derivation failed
    Derivation {
        /// Derivation step
        context: &'static str,
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for key agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidParameter { context, reason } => {
                write!(f, "Invalid parameter in {}: {}", context, reason)
            }
            Error::Derivation { context, details } => {
                write!(f, "Derivation error in {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::invalid_key(key_type, reason),
            Error::InvalidParameter { context, reason } => {
                CoreError::invalid_parameter(context, reason)
            }
            #[allow(unused_variables)]
            Error::Derivation { context, details } => CoreError::Other {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}
