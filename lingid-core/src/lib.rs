//! Profile loading and classification for n-gram language identification
//!
//! This crate turns a configuration into an immutable [`Classifier`]:
//!
//! - [`ProfileStore`] gathers built-in and external language profiles
//! - [`TextMode`] picks profile variants and the text normalization
//! - [`Classifier`] wraps the n-gram detector and answers one question,
//!   "which language is this text in, if any"
//!
//! # Example
//!
//! ```rust
//! use lingid_core::{IdentifierConfig, TextMode};
//!
//! let config = IdentifierConfig::builder()
//!     .text_mode(TextMode::Short)
//!     .builtin_languages(["en", "fr"])
//!     .build()?;
//!
//! let classifier = config.build_classifier()?;
//! assert_eq!(classifier.classify("Bonjour tout le monde").as_deref(), Some("fr"));
//! assert_eq!(classifier.classify("12345 67890"), None);
//! # Ok::<(), lingid_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod builtin;
pub mod classifier;
pub mod config;
pub mod error;
pub mod filter;
pub mod mode;
pub mod script;
pub mod source;
pub mod store;

pub use builtin::ProfileVariant;
pub use classifier::{Classifier, DetectorSettings};
pub use config::{IdentifierConfig, IdentifierConfigBuilder};
pub use error::{Error, Result};
pub use mode::TextMode;
pub use source::{ExtraProfiles, ProfileSource};
pub use store::ProfileStore;

/// Re-exported so hosts can name profile types without a direct dependency
pub use lingid_ngram::NgramProfile;
