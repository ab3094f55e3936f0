//! Document-level language identification
//!
//! This crate applies a `lingid-core` classifier to host documents. It
//! decides what to classify (the whole text, or every annotation of a type),
//! writes the detected language as a feature, and manages the classifier's
//! lifecycle: lazy build, sharing, and swap-on-rebuild or reconfiguration.
//!
//! # Example
//!
//! ```rust
//! use lingid_engine::{Document, IdentifierConfig, LanguageIdentifier, RunOptions, TextMode};
//!
//! let config = IdentifierConfig::builder()
//!     .text_mode(TextMode::Short)
//!     .builtin_languages(["en", "fr"])
//!     .build()?;
//! let identifier = LanguageIdentifier::new(config)?;
//!
//! let mut doc = Document::new("Bonjour tout le monde");
//! identifier.execute(&mut doc, &RunOptions::default())?;
//! assert_eq!(doc.features.get("lang").map(String::as_str), Some("fr"));
//! # Ok::<(), lingid_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod dispatcher;
pub mod document;
pub mod error;
pub mod identifier;
pub mod options;

pub use dispatcher::{DispatchReport, Dispatcher, Target, TargetOutcome, TargetReport};
pub use document::{Annotation, AnnotationSet, Document, FeatureMap, DEFAULT_SET_NAME};
pub use error::{EngineError, Result, TargetError};
pub use identifier::LanguageIdentifier;
pub use options::{RunOptions, RunOptionsBuilder};

// Re-export from core for convenience
pub use lingid_core::{
    Classifier, ExtraProfiles, IdentifierConfig, IdentifierConfigBuilder, TextMode,
};
