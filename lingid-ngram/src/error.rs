//! Error types for profile parsing and detector construction

use thiserror::Error;

/// A profile could not be decoded or is structurally unusable
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The bytes are not a JSON profile
    #[error("malformed profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The profile has no language name
    #[error("profile has an empty language name")]
    MissingName,

    /// `n_words` must carry one total per gram length
    #[error("profile '{name}' has {found} n_words totals, expected {expected}")]
    GramTotals {
        /// Language name of the offending profile
        name: String,
        /// Number of totals found
        found: usize,
        /// Number of totals required
        expected: usize,
    },

    /// A frequency key is empty or longer than the supported gram length
    #[error("profile '{name}' contains an invalid n-gram {gram:?}")]
    InvalidGram {
        /// Language name of the offending profile
        name: String,
        /// The rejected key
        gram: String,
    },

    /// Grams of some length are present but their total is zero
    #[error("profile '{name}' has {len}-grams but a zero total for them")]
    ZeroTotal {
        /// Language name of the offending profile
        name: String,
        /// Gram length whose total is zero
        len: usize,
    },
}

/// A detector could not be built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectorError {
    /// Nothing to score against
    #[error("cannot build a detector without profiles")]
    NoProfiles,

    /// Confidence threshold outside `(0, 1]`
    #[error("minimum confidence must be in (0, 1], got {0}")]
    InvalidConfidence(f64),
}
