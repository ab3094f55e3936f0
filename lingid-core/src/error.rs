//! Error types for profile loading and classifier construction

use thiserror::Error;

/// Error type for building a classifier
///
/// "No confident language" is not an error; it is the `None` result of
/// classification.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or contradictory settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A profile source could not be read or parsed
    #[error("Failed to load profile from {origin}: {reason}")]
    ProfileLoad {
        /// The built-in code or location that failed
        origin: String,
        /// What went wrong
        reason: String,
    },

    /// The classifier itself could not be built
    #[error("Build error: {0}")]
    Build(String),
}

impl Error {
    pub(crate) fn profile_load(origin: impl Into<String>, reason: impl ToString) -> Self {
        Error::ProfileLoad {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for classifier construction
pub type Result<T> = std::result::Result<T, Error>;
