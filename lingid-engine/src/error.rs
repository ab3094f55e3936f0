//! Layered error types
//!
//! Build failures come from `lingid-core` and abort a whole call. Problems
//! with a single target are reported per target in the dispatch report and
//! never abort a document.

use lingid_core::Error as CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The classifier could not be configured or built
    #[error("language identifier error: {0}")]
    Core(#[from] CoreError),

    /// A host document could not be decoded or encoded
    #[error("invalid document: {0}")]
    Document(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Document(err.to_string())
    }
}

/// Why a single target could not be classified
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// The annotation does not cover a valid slice of the document text
    #[error("annotation {id} has invalid span {start}..{end} for text of {len} bytes")]
    InvalidSpan {
        /// Annotation id
        id: u64,
        /// Start offset in bytes
        start: usize,
        /// End offset in bytes
        end: usize,
        /// Length of the document text in bytes
        len: usize,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
