//! Build-time configuration of a language identifier
//!
//! Everything that determines which classifier gets built lives here. The
//! per-call options (fallback value, annotation type and set) are not part of
//! it, so changing them never requires a rebuild.
//!
//! ```toml
//! text_mode = "short"
//! builtin_languages = ["en", "fr"]
//! language_feature_name = "lang"
//! extra_profiles = { index_file = "profiles/index.txt" }
//! ```

use crate::{
    classifier::{Classifier, DetectorSettings},
    error::{Error, Result},
    mode::TextMode,
    source::ExtraProfiles,
    store::ProfileStore,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Feature the detected language is written to
    pub const LANGUAGE_FEATURE_NAME: &str = "lang";

    /// Built-in profiles are loaded unless switched off
    pub const INCLUDE_BUILTIN_PROFILES: bool = true;

    /// Posterior a language needs before it is reported
    pub const MIN_CONFIDENCE: f64 = lingid_ngram::DEFAULT_MIN_CONFIDENCE;

    pub(super) fn include_builtin_profiles() -> bool {
        INCLUDE_BUILTIN_PROFILES
    }

    pub(super) fn language_feature_name() -> String {
        LANGUAGE_FEATURE_NAME.to_string()
    }

    pub(super) fn min_confidence() -> f64 {
        MIN_CONFIDENCE
    }
}

/// Configuration of the classifier and of where results are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierConfig {
    /// Expected text length; required before a classifier can be built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_mode: Option<TextMode>,

    /// Load the embedded profiles
    #[serde(default = "defaults::include_builtin_profiles")]
    pub include_builtin_profiles: bool,

    /// Built-in languages to load; empty means all
    #[serde(default)]
    pub builtin_languages: Vec<String>,

    /// Profiles to load in addition to the built-in ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_profiles: Option<ExtraProfiles>,

    /// Feature name results are written under
    #[serde(default = "defaults::language_feature_name")]
    pub language_feature_name: String,

    /// Posterior a language needs before it is reported
    #[serde(default = "defaults::min_confidence")]
    pub min_confidence: f64,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            text_mode: None,
            include_builtin_profiles: defaults::INCLUDE_BUILTIN_PROFILES,
            builtin_languages: Vec::new(),
            extra_profiles: None,
            language_feature_name: defaults::LANGUAGE_FEATURE_NAME.to_string(),
            min_confidence: defaults::MIN_CONFIDENCE,
        }
    }
}

impl IdentifierConfig {
    /// Create a configuration builder
    pub fn builder() -> IdentifierConfigBuilder {
        IdentifierConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check the settings that do not require loading profiles
    pub fn validate(&self) -> Result<()> {
        self.text_mode()?;

        if self.language_feature_name.trim().is_empty() {
            return Err(Error::Configuration(
                "language_feature_name must not be empty".into(),
            ));
        }

        if !(self.min_confidence > 0.0 && self.min_confidence <= 1.0) {
            return Err(Error::Configuration(format!(
                "min_confidence must be in (0, 1], got {}",
                self.min_confidence
            )));
        }

        Ok(())
    }

    /// The configured text mode
    pub fn text_mode(&self) -> Result<TextMode> {
        self.text_mode
            .ok_or_else(|| Error::Configuration("text_mode is required".into()))
    }

    /// Profile store described by this configuration
    pub fn profile_store(&self) -> Result<ProfileStore> {
        let mut store = ProfileStore::new(self.text_mode()?)
            .include_builtins(self.include_builtin_profiles)
            .builtin_languages(self.builtin_languages.iter().cloned());
        if let Some(extra) = &self.extra_profiles {
            store = store.extra_profiles(extra.clone());
        }
        Ok(store)
    }

    /// Detector tuning described by this configuration
    pub fn detector_settings(&self) -> DetectorSettings {
        DetectorSettings {
            min_confidence: self.min_confidence,
        }
    }

    /// Validate, load every profile and build a classifier
    pub fn build_classifier(&self) -> Result<Classifier> {
        self.validate()?;
        Classifier::from_store(&self.profile_store()?, self.detector_settings())
    }
}

/// Fluent builder for [`IdentifierConfig`]
#[derive(Debug, Default)]
pub struct IdentifierConfigBuilder {
    config: IdentifierConfig,
}

impl IdentifierConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text mode
    pub fn text_mode(mut self, mode: TextMode) -> Self {
        self.config.text_mode = Some(mode);
        self
    }

    /// Switch built-in profiles on or off
    pub fn include_builtin_profiles(mut self, include: bool) -> Self {
        self.config.include_builtin_profiles = include;
        self
    }

    /// Restrict the built-in languages
    pub fn builtin_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.builtin_languages = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Load extra profiles
    pub fn extra_profiles(mut self, extra: ExtraProfiles) -> Self {
        self.config.extra_profiles = Some(extra);
        self
    }

    /// Set the output feature name
    pub fn language_feature_name(mut self, name: impl Into<String>) -> Self {
        self.config.language_feature_name = name.into();
        self
    }

    /// Set the detector confidence threshold
    pub fn min_confidence(mut self, min_confidence: f64) -> Self {
        self.config.min_confidence = min_confidence;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<IdentifierConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
