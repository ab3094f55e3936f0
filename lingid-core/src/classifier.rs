//! Language classifier
//!
//! A [`Classifier`] is built once from a list of profiles and a text mode and
//! never changes afterwards. It holds no per-call state, so one instance can
//! be shared across threads behind an `Arc`.

use crate::{
    error::{Error, Result},
    mode::TextMode,
    store::ProfileStore,
};
use lingid_ngram::{DetectorBuilder, DetectorError, NgramProfile, DEFAULT_MIN_CONFIDENCE};

/// Tuning of the underlying detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorSettings {
    /// Posterior a language needs before it is reported
    pub min_confidence: f64,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

/// Immutable language classifier
#[derive(Debug)]
pub struct Classifier {
    detector: lingid_ngram::Detector,
    mode: TextMode,
}

impl Classifier {
    /// Build a classifier over `profiles`
    ///
    /// Fails with [`Error::Build`] when `profiles` is empty and with
    /// [`Error::Configuration`] when the settings are out of range.
    pub fn build(
        profiles: Vec<NgramProfile>,
        mode: TextMode,
        settings: DetectorSettings,
    ) -> Result<Self> {
        log::info!(
            "building language classifier with {} profiles, optimized for {} text",
            profiles.len(),
            mode
        );

        let detector = DetectorBuilder::new()
            .profiles(profiles)
            .min_confidence(settings.min_confidence)
            .build()
            .map_err(|e| match e {
                DetectorError::NoProfiles => {
                    Error::Build("no language profiles to build a classifier from".into())
                }
                DetectorError::InvalidConfidence(_) => Error::Configuration(e.to_string()),
            })?;

        Ok(Self { detector, mode })
    }

    /// Load the profiles of `store` and build a classifier in its mode
    pub fn from_store(store: &ProfileStore, settings: DetectorSettings) -> Result<Self> {
        Self::build(store.load()?, store.mode(), settings)
    }

    /// Detect the language of text already normalized for [`Self::mode`]
    ///
    /// Returns `None` when no language is confident enough, including for
    /// empty and whitespace-only text.
    pub fn detect(&self, normalized: &str) -> Option<String> {
        self.detector.detect(normalized)
    }

    /// Normalize raw text for this classifier's mode, then detect
    pub fn classify(&self, text: &str) -> Option<String> {
        self.detect(&self.mode.normalize(text))
    }

    /// Number of profiles the classifier was built from
    pub fn profile_count(&self) -> usize {
        self.detector.profile_count()
    }

    /// Distinct language codes, in load order
    pub fn languages(&self) -> &[String] {
        self.detector.languages()
    }

    /// Text mode fixed at build time
    pub fn mode(&self) -> TextMode {
        self.mode
    }
}
