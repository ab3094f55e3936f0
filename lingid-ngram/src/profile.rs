//! Language profile model
//!
//! A profile is the n-gram frequency table of one language. On disk it uses
//! the langdetect JSON layout:
//!
//! ```json
//! {"name": "en", "freq": {"e": 1200, "th": 310, "the": 240}, "n_words": [9000, 7000, 5000]}
//! ```
//!
//! `n_words[n - 1]` is the total number of n-grams seen when the profile was
//! trained. It is the denominator of every relative frequency, so profiles
//! that were pruned after training keep their training totals.

use crate::{error::ProfileError, extract::MAX_GRAM_LEN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk representation, validated into [`NgramProfile`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileJson {
    name: String,
    freq: BTreeMap<String, u64>,
    n_words: Vec<u64>,
}

/// Frequency table of one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramProfile {
    name: String,
    freq: BTreeMap<String, u64>,
    n_words: [u64; MAX_GRAM_LEN],
}

impl NgramProfile {
    /// Create a profile from its parts, validating it
    pub fn new(
        name: impl Into<String>,
        freq: BTreeMap<String, u64>,
        n_words: [u64; MAX_GRAM_LEN],
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            name: name.into(),
            freq,
            n_words,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Parse a profile from JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ProfileError> {
        let raw: ProfileJson = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    /// Parse a profile from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Serialize back to the langdetect JSON layout
    pub fn to_json_string(&self) -> String {
        let raw = ProfileJson {
            name: self.name.clone(),
            freq: self.freq.clone(),
            n_words: self.n_words.to_vec(),
        };
        // A map of strings to integers always serializes
        serde_json::to_string(&raw).unwrap_or_default()
    }

    /// Language code of this profile
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw count of a gram, zero when unseen
    pub fn count(&self, gram: &str) -> u64 {
        self.freq.get(gram).copied().unwrap_or(0)
    }

    /// Total number of grams of length `len` seen in training
    pub fn total(&self, len: usize) -> u64 {
        len.checked_sub(1)
            .and_then(|i| self.n_words.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Relative frequency of a gram within grams of the same length
    pub fn probability(&self, gram: &str) -> f64 {
        let total = self.total(gram.chars().count());
        if total == 0 {
            return 0.0;
        }
        self.count(gram) as f64 / total as f64
    }

    /// Iterate grams and their counts in lexical order
    pub fn grams(&self) -> impl Iterator<Item = (&str, u64)> {
        self.freq.iter().map(|(gram, &count)| (gram.as_str(), count))
    }

    /// Number of distinct grams
    pub fn len(&self) -> usize {
        self.freq.len()
    }

    /// True if the profile has no grams at all
    pub fn is_empty(&self) -> bool {
        self.freq.is_empty()
    }

    fn from_raw(raw: ProfileJson) -> Result<Self, ProfileError> {
        let n_words = <[u64; MAX_GRAM_LEN]>::try_from(raw.n_words.as_slice()).map_err(|_| {
            ProfileError::GramTotals {
                name: raw.name.clone(),
                found: raw.n_words.len(),
                expected: MAX_GRAM_LEN,
            }
        })?;
        Self::new(raw.name, raw.freq, n_words)
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::MissingName);
        }

        let mut seen = [false; MAX_GRAM_LEN];
        for gram in self.freq.keys() {
            let len = gram.chars().count();
            if len == 0 || len > MAX_GRAM_LEN {
                return Err(ProfileError::InvalidGram {
                    name: self.name.clone(),
                    gram: gram.clone(),
                });
            }
            seen[len - 1] = true;
        }

        for (i, used) in seen.iter().enumerate() {
            if *used && self.n_words[i] == 0 {
                return Err(ProfileError::ZeroTotal {
                    name: self.name.clone(),
                    len: i + 1,
                });
            }
        }

        Ok(())
    }
}
