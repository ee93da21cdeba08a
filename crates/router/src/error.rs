//! Errors returned by the rule table

/// Error type for rule table mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The endpoint has no rules, or none equal to the one given
    #[error("no matching rule for endpoint {endpoint}")]
    NotFound {
        /// Debug rendering of the endpoint
        endpoint: String,
    },
}

/// Result type for rule table mutations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn not_found<E: std::fmt::Debug>(endpoint: &E) -> Self {
        Error::NotFound {
            endpoint: format!("{:?}", endpoint),
        }
    }
}
