//! Per-call run options
//!
//! These may change between calls without rebuilding the classifier.

use serde::{Deserialize, Serialize};

/// Options of one `execute` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    /// Written when no language is confident; unset or empty leaves the
    /// feature absent
    #[serde(default)]
    pub unknown_value: Option<String>,

    /// Classify each annotation of this type instead of the whole document
    #[serde(default)]
    pub annotation_type: Option<String>,

    /// Annotation set to read; unset selects the default set
    #[serde(default)]
    pub annotation_set_name: Option<String>,
}

impl RunOptions {
    /// Create a builder
    pub fn builder() -> RunOptionsBuilder {
        RunOptionsBuilder::default()
    }

    /// Annotation type to classify, `None` for whole-document mode
    ///
    /// A blank type counts as absent. Any other type is matched exactly as
    /// given, surrounding whitespace included.
    pub fn target_type(&self) -> Option<&str> {
        self.annotation_type
            .as_deref()
            .filter(|kind| !kind.trim().is_empty())
    }

    /// Value to write when classification has no answer
    pub fn fallback(&self) -> Option<&str> {
        self.unknown_value
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    /// Annotation set to read, `None` for the default set
    pub fn set_name(&self) -> Option<&str> {
        self.annotation_set_name.as_deref()
    }
}

/// Fluent builder for [`RunOptions`]
#[derive(Debug, Default)]
pub struct RunOptionsBuilder {
    options: RunOptions,
}

impl RunOptionsBuilder {
    /// Set the fallback value
    pub fn unknown_value(mut self, value: impl Into<String>) -> Self {
        self.options.unknown_value = Some(value.into());
        self
    }

    /// Classify annotations of this type
    pub fn annotation_type(mut self, kind: impl Into<String>) -> Self {
        self.options.annotation_type = Some(kind.into());
        self
    }

    /// Read annotations from this set
    pub fn annotation_set_name(mut self, name: impl Into<String>) -> Self {
        self.options.annotation_set_name = Some(name.into());
        self
    }

    /// Finish the options
    pub fn build(self) -> RunOptions {
        self.options
    }
}
