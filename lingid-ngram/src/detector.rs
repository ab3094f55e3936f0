//! Naive Bayes scoring over n-gram profiles
//!
//! Every gram of the input that at least one profile knows contributes
//! `ln(p + SMOOTHING)` to each profile's score, where `p` is the gram's
//! relative frequency in that profile. Scores are turned into posteriors with
//! a softmax. Profiles that share a language code have their posteriors
//! summed, so loading the same language twice never splits its vote.

use crate::{error::DetectorError, extract::NgramExtractor, profile::NgramProfile};
use std::collections::HashMap;

/// Default posterior required before a language is reported
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.9999;

/// Floor added to every relative frequency, keeps unseen grams finite
const SMOOTHING: f64 = 0.5 / 10_000.0;

/// Immutable detector over a fixed set of profiles
///
/// Built once with [`DetectorBuilder`]; `detect` takes `&self` and allocates
/// its scratch space per call, so a detector can be shared across threads.
pub struct Detector {
    /// Distinct language codes in first-seen order
    codes: Vec<String>,
    /// For each profile, the index of its code in `codes`
    code_of: Vec<usize>,
    /// Gram -> per-profile log weight
    weights: HashMap<String, Vec<f64>>,
    min_confidence: f64,
    extractor: NgramExtractor,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("languages", &self.codes)
            .field("profiles", &self.code_of.len())
            .field("grams", &self.weights.len())
            .field("min_confidence", &self.min_confidence)
            .finish()
    }
}

impl Detector {
    /// Most likely language, if its posterior reaches the confidence threshold
    ///
    /// Returns `None` for text without any gram known to the profiles,
    /// which includes empty and whitespace-only text.
    pub fn detect(&self, text: &str) -> Option<String> {
        let probabilities = self.probabilities(text);
        let (code, probability) = probabilities.into_iter().next()?;
        (probability >= self.min_confidence).then_some(code)
    }

    /// Posterior per language code, highest first
    ///
    /// Empty when no gram of `text` is known to any profile.
    pub fn probabilities(&self, text: &str) -> Vec<(String, f64)> {
        let profile_count = self.code_of.len();
        let mut scores = vec![0.0_f64; profile_count];
        let mut known = 0usize;

        for gram in self.extractor.extract(text) {
            if let Some(row) = self.weights.get(&gram) {
                known += 1;
                for (score, weight) in scores.iter_mut().zip(row) {
                    *score += weight;
                }
            }
        }

        if known == 0 {
            return Vec::new();
        }

        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();

        let mut per_code = vec![0.0_f64; self.codes.len()];
        for (profile, exp) in exps.iter().enumerate() {
            per_code[self.code_of[profile]] += exp / sum;
        }

        let mut ranked: Vec<(String, f64)> = self.codes.iter().cloned().zip(per_code).collect();
        // Stable: equal posteriors keep first-seen order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Distinct language codes, in the order their first profile was added
    pub fn languages(&self) -> &[String] {
        &self.codes
    }

    /// Number of profiles the detector was built from
    pub fn profile_count(&self) -> usize {
        self.code_of.len()
    }

    /// Posterior threshold used by [`Detector::detect`]
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }
}

/// Builder for [`Detector`]
#[derive(Debug, Clone)]
pub struct DetectorBuilder {
    profiles: Vec<NgramProfile>,
    min_confidence: f64,
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorBuilder {
    /// Create a builder with no profiles and the default threshold
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Add one profile
    pub fn profile(mut self, profile: NgramProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Add several profiles, keeping their order
    pub fn profiles<I: IntoIterator<Item = NgramProfile>>(mut self, profiles: I) -> Self {
        self.profiles.extend(profiles);
        self
    }

    /// Set the posterior a language needs before it is reported
    pub fn min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Build the detector
    pub fn build(self) -> Result<Detector, DetectorError> {
        if self.profiles.is_empty() {
            return Err(DetectorError::NoProfiles);
        }
        if !(self.min_confidence > 0.0 && self.min_confidence <= 1.0) {
            return Err(DetectorError::InvalidConfidence(self.min_confidence));
        }

        let mut codes: Vec<String> = Vec::new();
        let mut code_of = Vec::with_capacity(self.profiles.len());
        for profile in &self.profiles {
            let index = match codes.iter().position(|c| c == profile.name()) {
                Some(index) => index,
                None => {
                    codes.push(profile.name().to_string());
                    codes.len() - 1
                }
            };
            code_of.push(index);
        }

        let floor = SMOOTHING.ln();
        let count = self.profiles.len();
        let mut weights: HashMap<String, Vec<f64>> = HashMap::new();
        for (i, profile) in self.profiles.iter().enumerate() {
            for (gram, _) in profile.grams() {
                let row = weights
                    .entry(gram.to_string())
                    .or_insert_with(|| vec![floor; count]);
                row[i] = (profile.probability(gram) + SMOOTHING).ln();
            }
        }

        Ok(Detector {
            codes,
            code_of,
            weights,
            min_confidence: self.min_confidence,
            extractor: NgramExtractor::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(json: &str) -> NgramProfile {
        NgramProfile::from_json_str(json).unwrap()
    }

    fn ab_profiles() -> (NgramProfile, NgramProfile) {
        (
            profile(r#"{"name":"aa","freq":{"a":10," a":5,"a ":5},"n_words":[10,10,1]}"#),
            profile(r#"{"name":"bb","freq":{"b":10," b":5,"b ":5},"n_words":[10,10,1]}"#),
        )
    }

    #[test]
    fn test_build_requires_profiles() {
        let err = DetectorBuilder::new().build().unwrap_err();
        assert_eq!(err, DetectorError::NoProfiles);
    }

    #[test]
    fn test_build_rejects_bad_confidence() {
        let (a, _) = ab_profiles();
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let result = DetectorBuilder::new()
                .profile(a.clone())
                .min_confidence(bad)
                .build();
            assert!(matches!(result, Err(DetectorError::InvalidConfidence(_))));
        }
    }

    #[test]
    fn test_detect_picks_matching_profile() {
        let (a, b) = ab_profiles();
        let detector = DetectorBuilder::new().profile(a).profile(b).build().unwrap();
        assert_eq!(detector.detect("aaa aa a").as_deref(), Some("aa"));
        assert_eq!(detector.detect("bb b bbb").as_deref(), Some("bb"));
    }

    #[test]
    fn test_unknown_grams_give_no_answer() {
        let (a, b) = ab_profiles();
        let detector = DetectorBuilder::new().profile(a).profile(b).build().unwrap();
        assert_eq!(detector.detect(""), None);
        assert_eq!(detector.detect(" \n\t "), None);
        assert_eq!(detector.detect("zzz"), None);
        assert!(detector.probabilities("zzz").is_empty());
    }

    #[test]
    fn test_low_confidence_gives_no_answer() {
        let (a, b) = ab_profiles();
        let detector = DetectorBuilder::new().profile(a).profile(b).build().unwrap();
        // One gram of each language: posteriors are even
        let probabilities = detector.probabilities("a b");
        assert_eq!(probabilities.len(), 2);
        assert!((probabilities[0].1 - 0.5).abs() < 1e-9);
        assert_eq!(detector.detect("a b"), None);
    }

    #[test]
    fn test_duplicate_codes_are_summed() {
        let (a, b) = ab_profiles();
        let detector = DetectorBuilder::new()
            .profile(a.clone())
            .profile(a)
            .profile(b)
            .build()
            .unwrap();
        assert_eq!(detector.profile_count(), 3);
        assert_eq!(detector.languages(), ["aa".to_string(), "bb".to_string()]);
        assert_eq!(detector.detect("aaa aa a").as_deref(), Some("aa"));

        let probabilities = detector.probabilities("aaa aa a");
        let total: f64 = probabilities.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_detect_is_deterministic() {
        let (a, b) = ab_profiles();
        let detector = DetectorBuilder::new().profile(a).profile(b).build().unwrap();
        let first = detector.probabilities("ab ba aab");
        for _ in 0..10 {
            assert_eq!(detector.probabilities("ab ba aab"), first);
        }
    }

    #[test]
    fn test_single_profile_always_wins_known_text() {
        let (a, _) = ab_profiles();
        let detector = DetectorBuilder::new().profile(a).build().unwrap();
        assert_eq!(detector.detect("a").as_deref(), Some("aa"));
    }
}
