//! Per-document dispatch
//!
//! Selects what to classify in a document (the whole text, or every
//! annotation of a type), runs the classifier on each target and writes the
//! result, or the fallback, into the target's feature map.

use crate::{
    document::{Document, FeatureMap, DEFAULT_SET_NAME},
    error::TargetError,
    options::RunOptions,
};
use lingid_core::Classifier;

/// What a target refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The whole document text, results go to the document features
    Document,
    /// One annotation, by id
    Annotation(u64),
}

/// What happened to one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    /// A language was detected and written
    Detected(String),
    /// No language was confident; the fallback value was written
    Fallback(String),
    /// No language was confident and no fallback is configured
    Unset,
    /// The target could not be classified
    Failed(TargetError),
}

/// Outcome of one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// The target
    pub target: Target,
    /// What happened to it
    pub outcome: TargetOutcome,
}

/// Outcomes of every target of one document, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    targets: Vec<TargetReport>,
}

impl DispatchReport {
    fn push(&mut self, target: Target, outcome: TargetOutcome) {
        self.targets.push(TargetReport { target, outcome });
    }

    /// All target reports
    pub fn targets(&self) -> &[TargetReport] {
        &self.targets
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if the document had no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of targets with a detected language
    pub fn detected(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Detected(_)))
    }

    /// Number of targets that received the fallback value
    pub fn fallbacks(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Fallback(_)))
    }

    /// Number of targets left without the feature
    pub fn unset(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Unset))
    }

    /// Targets that failed, with their errors
    pub fn failures(&self) -> impl Iterator<Item = (Target, &TargetError)> {
        self.targets.iter().filter_map(|r| match &r.outcome {
            TargetOutcome::Failed(err) => Some((r.target, err)),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&TargetOutcome) -> bool) -> usize {
        self.targets.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Applies one classifier to documents
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    classifier: &'a Classifier,
    feature_name: &'a str,
}

impl<'a> Dispatcher<'a> {
    /// Write results of `classifier` under `feature_name`
    pub fn new(classifier: &'a Classifier, feature_name: &'a str) -> Self {
        Self {
            classifier,
            feature_name,
        }
    }

    /// Classify every target of `document`
    ///
    /// Targets are independent: a failed target is reported and the rest
    /// are still processed. A missing annotation set yields no targets.
    pub fn dispatch(&self, document: &mut Document, options: &RunOptions) -> DispatchReport {
        let fallback = options.fallback();
        let Document {
            content,
            features,
            annotation_sets,
        } = document;
        let content = content.as_str();
        let mut report = DispatchReport::default();

        match options.target_type() {
            None => {
                let outcome = self.apply(Ok(content), features, fallback);
                report.push(Target::Document, outcome);
            }
            Some(kind) => {
                let set_name = options.set_name().unwrap_or(DEFAULT_SET_NAME);
                let Some(set) = annotation_sets.get_mut(set_name) else {
                    log::debug!("annotation set '{set_name}' not found, nothing to classify");
                    return report;
                };
                for annotation in set.annotations_mut().iter_mut().filter(|a| a.kind == kind) {
                    let text = annotation.text(content).ok_or(TargetError::InvalidSpan {
                        id: annotation.id,
                        start: annotation.start,
                        end: annotation.end,
                        len: content.len(),
                    });
                    let outcome = self.apply(text, &mut annotation.features, fallback);
                    report.push(Target::Annotation(annotation.id), outcome);
                }
            }
        }

        log::debug!(
            "classified {} targets: {} detected, {} fallback, {} unset",
            report.len(),
            report.detected(),
            report.fallbacks(),
            report.unset()
        );
        report
    }

    /// Classify one target and write its outcome
    fn apply(
        &self,
        text: Result<&str, TargetError>,
        sink: &mut FeatureMap,
        fallback: Option<&str>,
    ) -> TargetOutcome {
        let text = match text {
            Ok(text) => text,
            Err(err) => {
                log::warn!("skipping target: {err}");
                return TargetOutcome::Failed(err);
            }
        };

        match self.classifier.classify(text) {
            Some(code) => {
                let language = primary_language(&code).to_string();
                sink.insert(self.feature_name.to_string(), language.clone());
                TargetOutcome::Detected(language)
            }
            None => match fallback {
                Some(value) => {
                    sink.insert(self.feature_name.to_string(), value.to_string());
                    TargetOutcome::Fallback(value.to_string())
                }
                None => TargetOutcome::Unset,
            },
        }
    }
}

/// Language subtag of a profile name, so `zh-TW` and `zh-CN` both give `zh`
fn primary_language(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingid_core::{IdentifierConfig, TextMode};

    fn classifier() -> Classifier {
        IdentifierConfig::builder()
            .text_mode(TextMode::Short)
            .builtin_languages(["en", "fr"])
            .build()
            .unwrap()
            .build_classifier()
            .unwrap()
    }

    #[test]
    fn test_whole_document() {
        let classifier = classifier();
        let mut doc = Document::new("Bonjour tout le monde");
        let report = Dispatcher::new(&classifier, "lang").dispatch(&mut doc, &RunOptions::default());

        assert_eq!(report.len(), 1);
        assert_eq!(report.targets()[0].target, Target::Document);
        assert_eq!(doc.features.get("lang").map(String::as_str), Some("fr"));
    }

    #[test]
    fn test_noise_without_fallback_leaves_feature_unset() {
        let classifier = classifier();
        let mut doc = Document::new("12345 67890 !!! ???");
        let report = Dispatcher::new(&classifier, "lang").dispatch(&mut doc, &RunOptions::default());

        assert_eq!(report.unset(), 1);
        assert!(doc.features.is_empty());
    }

    #[test]
    fn test_noise_with_fallback() {
        let classifier = classifier();
        let mut doc = Document::new("   ");
        let options = RunOptions::builder().unknown_value("unk").build();
        let report = Dispatcher::new(&classifier, "language").dispatch(&mut doc, &options);

        assert_eq!(report.fallbacks(), 1);
        assert_eq!(doc.features.get("language").map(String::as_str), Some("unk"));
    }

    #[test]
    fn test_primary_language() {
        assert_eq!(primary_language("en"), "en");
        assert_eq!(primary_language("en-GB"), "en");
        assert_eq!(primary_language("zh-TW"), "zh");
        assert_eq!(primary_language("sr-Latn-RS"), "sr");
    }

    #[test]
    fn test_missing_set_has_no_targets() {
        let classifier = classifier();
        let mut doc = Document::new("Bonjour tout le monde");
        let options = RunOptions::builder()
            .annotation_type("Sentence")
            .annotation_set_name("missing")
            .unknown_value("unk")
            .build();
        let report = Dispatcher::new(&classifier, "lang").dispatch(&mut doc, &options);

        assert!(report.is_empty());
        assert!(doc.features.is_empty());
    }

    #[test]
    fn test_other_annotation_types_untouched() {
        let classifier = classifier();
        let mut doc = Document::new("Bonjour tout le monde");
        let set = doc.annotation_set_or_insert(None);
        let sentence = set.add("Sentence", 0, 21);
        let token = set.add("Token", 0, 7);

        let options = RunOptions::builder()
            .annotation_type("Sentence")
            .unknown_value("unk")
            .build();
        let report = Dispatcher::new(&classifier, "lang").dispatch(&mut doc, &options);

        assert_eq!(report.len(), 1);
        let set = doc.annotation_set(None).unwrap();
        assert_eq!(
            set.get(sentence).unwrap().features.get("lang").map(String::as_str),
            Some("fr")
        );
        assert!(set.get(token).unwrap().features.is_empty());
        assert!(doc.features.is_empty());
    }

    #[test]
    fn test_invalid_span_is_reported() {
        let classifier = classifier();
        let mut doc = Document::new("Bonjour tout le monde");
        let bad = doc.annotation_set_or_insert(None).add("Sentence", 10, 500);

        let options = RunOptions::builder().annotation_type("Sentence").build();
        let report = Dispatcher::new(&classifier, "lang").dispatch(&mut doc, &options);

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Target::Annotation(bad));
        assert!(matches!(failures[0].1, TargetError::InvalidSpan { end: 500, .. }));
    }
}
