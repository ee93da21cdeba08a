//! Error type definitions for key agreement and routing callers

#[cfg(feature = "std")]
use std::string::{String, ToString};

/// Primary error type of the public API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key failed validation (off-curve point, out-of-range scalar, ...)
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        /// Why the key was rejected
        #[cfg(feature = "std")]
        message: String,
    },

    /// Input had the wrong length
    InvalidLength {
        /// Operation that checked the length
        context: &'static str,
        /// Length required
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// An argument was outside its domain
    InvalidParameter {
        /// Operation that rejected the argument
        context: &'static str,
        /// Why the argument was rejected
        #[cfg(feature = "std")]
        message: String,
    },

    /// The random number generator failed to produce output
    RandomGenerationError {
        /// Operation that needed randomness
        context: &'static str,
        /// Failure reported by the generator
        #[cfg(feature = "std")]
        message: String,
    },

    /// Any other failure
    Other {
        /// Operation that failed
        context: &'static str,
        /// Failure details
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type of the public API
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Invalid key with a static explanation
    #[allow(unused_variables)]
    pub fn invalid_key(context: &'static str, message: &'static str) -> Self {
        Self::InvalidKey {
            context,
            #[cfg(feature = "std")]
            message: message.to_string(),
        }
    }

    /// Invalid parameter with a static explanation
    #[allow(unused_variables)]
    pub fn invalid_parameter(context: &'static str, message: &'static str) -> Self {
        Self::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: message.to_string(),
        }
    }

    /// Random generation failure with a static explanation
    #[allow(unused_variables)]
    pub fn random_generation(context: &'static str, message: &'static str) -> Self {
        Self::RandomGenerationError {
            context,
            #[cfg(feature = "std")]
            message: message.to_string(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::RandomGenerationError {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::RandomGenerationError {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Self::Other {
                #[cfg(feature = "std")]
                message,
                ..
            } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message,
            },
        }
    }

    /// Replace the message of an existing error
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength { .. } => self,
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// Context string of any variant
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => write!(f, "Invalid key: {}", context),
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
            #[cfg(not(feature = "std"))]
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
