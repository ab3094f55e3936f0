//! Character n-gram language detection
//!
//! This crate is the statistical leaf of the workspace. It knows nothing
//! about documents, text modes or where profiles come from; it only provides:
//!
//! - [`NgramExtractor`]: turns text into 1- to 3-character grams
//! - [`NgramProfile`]: the frequency table of one language, stored in the
//!   langdetect JSON profile format
//! - [`Detector`]: an immutable scorer built once over a set of profiles
//!
//! # Example
//!
//! ```rust
//! use lingid_ngram::{DetectorBuilder, NgramProfile};
//!
//! let en = NgramProfile::from_json_str(
//!     r#"{"name":"en","freq":{"t":4,"h":3,"e":3,"th":3,"he":3,"the":3},"n_words":[10,6,3]}"#,
//! ).unwrap();
//! let fr = NgramProfile::from_json_str(
//!     r#"{"name":"fr","freq":{"l":4,"e":4,"le":4," le":3,"le ":3},"n_words":[8,4,6]}"#,
//! ).unwrap();
//!
//! let detector = DetectorBuilder::new().profile(en).profile(fr).build().unwrap();
//! assert_eq!(detector.detect("the the the").as_deref(), Some("en"));
//! assert_eq!(detector.detect("   "), None);
//! ```

#![warn(missing_docs)]

pub mod detector;
pub mod error;
pub mod extract;
pub mod profile;

pub use detector::{Detector, DetectorBuilder, DEFAULT_MIN_CONFIDENCE};
pub use error::{DetectorError, ProfileError};
pub use extract::{NgramExtractor, MAX_GRAM_LEN};
pub use profile::NgramProfile;
