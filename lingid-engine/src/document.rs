//! Host document model
//!
//! A [`Document`] is text plus feature maps: one for the document itself and
//! one per annotation. Annotations live in named sets; the default set has
//! the empty name. Offsets are byte offsets into the text, half-open.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String features attached to a document or an annotation
pub type FeatureMap = BTreeMap<String, String>;

/// Name under which the default annotation set is stored
pub const DEFAULT_SET_NAME: &str = "";

/// A typed span of the document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique within its set
    pub id: u64,
    /// Annotation type, e.g. `Sentence`
    pub kind: String,
    /// Start byte offset, inclusive
    pub start: usize,
    /// End byte offset, exclusive
    pub end: usize,
    /// Features of this annotation
    #[serde(default)]
    pub features: FeatureMap,
}

impl Annotation {
    /// Text covered by this annotation, or `None` if the span is out of
    /// bounds, reversed or splits a character
    pub fn text<'a>(&self, content: &'a str) -> Option<&'a str> {
        content.get(self.start..self.end)
    }
}

/// Ordered collection of annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSet {
    #[serde(default)]
    annotations: Vec<Annotation>,
}

impl AnnotationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation and return its id
    pub fn add(&mut self, kind: impl Into<String>, start: usize, end: usize) -> u64 {
        let id = self
            .annotations
            .iter()
            .map(|a| a.id + 1)
            .max()
            .unwrap_or(0);
        self.annotations.push(Annotation {
            id,
            kind: kind.into(),
            start,
            end,
            features: FeatureMap::new(),
        });
        id
    }

    /// Annotation with the given id
    pub fn get(&self, id: u64) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// All annotations in order
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }

    /// Annotations of one type, in order
    pub fn of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Annotation> + 'a {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }

    pub(crate) fn annotations_mut(&mut self) -> &mut [Annotation] {
        &mut self.annotations
    }

    /// Number of annotations
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// True if the set has no annotations
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Text with document features and annotation sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document text
    pub content: String,
    /// Document-level features
    #[serde(default)]
    pub features: FeatureMap,
    /// Annotation sets by name, the default set under `""`
    #[serde(default)]
    pub annotation_sets: BTreeMap<String, AnnotationSet>,
}

impl Document {
    /// Create a document without features or annotations
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Decode a document from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the document as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Annotation set by name; `None` selects the default set
    pub fn annotation_set(&self, name: Option<&str>) -> Option<&AnnotationSet> {
        self.annotation_sets.get(name.unwrap_or(DEFAULT_SET_NAME))
    }

    /// Annotation set by name, created empty if missing
    pub fn annotation_set_or_insert(&mut self, name: Option<&str>) -> &mut AnnotationSet {
        self.annotation_sets
            .entry(name.unwrap_or(DEFAULT_SET_NAME).to_string())
            .or_default()
    }
}
