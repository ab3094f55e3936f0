//! Text modes
//!
//! A [`TextMode`] fixes two things for a classifier: which built-in profile
//! variant it loads and how text is normalized before detection.

use crate::{
    builtin::{self, ProfileVariant},
    error::Error,
    filter,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Long texts are cut to this many characters before detection
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Scripts below this share of all letters are dropped in long mode
pub const MINORITY_SCRIPT_THRESHOLD: f64 = 0.3;

/// Expected length of the texts to classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextMode {
    /// Paragraphs and documents, possibly noisy
    Long,
    /// Short, clean snippets such as titles or single sentences
    Short,
}

impl TextMode {
    /// Variant preferred by this mode, whether or not a language has it
    pub fn preferred_variant(&self) -> ProfileVariant {
        match self {
            TextMode::Long => ProfileVariant::Standard,
            TextMode::Short => ProfileVariant::ShortText,
        }
    }

    /// Variant to load for the built-in language `code`
    ///
    /// Short mode falls back to the standard variant for languages that have
    /// no short-text profile.
    pub fn builtin_variant(&self, code: &str) -> ProfileVariant {
        let preferred = self.preferred_variant();
        if builtin::has_variant(code, preferred) {
            preferred
        } else {
            ProfileVariant::Standard
        }
    }

    /// Prepare raw text for detection
    pub fn normalize(&self, text: &str) -> String {
        match self {
            TextMode::Long => {
                let text = filter::strip_urls(text);
                let text = filter::strip_markup(&text);
                let text = filter::remove_minority_scripts(&text, MINORITY_SCRIPT_THRESHOLD);
                let text = filter::collapse_whitespace(&text);
                filter::truncate_chars(&text, MAX_TEXT_CHARS)
                    .trim_end()
                    .to_string()
            }
            TextMode::Short => filter::collapse_whitespace(text),
        }
    }

    /// Lowercase name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            TextMode::Long => "long",
            TextMode::Short => "short",
        }
    }
}

impl fmt::Display for TextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMode::Long => write!(f, "LONG"),
            TextMode::Short => write!(f, "SHORT"),
        }
    }
}

impl FromStr for TextMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(TextMode::Long),
            "short" => Ok(TextMode::Short),
            _ => Err(Error::Configuration(format!(
                "unknown text mode '{s}', expected 'long' or 'short'"
            ))),
        }
    }
}

impl Serialize for TextMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TextMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("long".parse::<TextMode>().unwrap(), TextMode::Long);
        assert_eq!("SHORT".parse::<TextMode>().unwrap(), TextMode::Short);
        assert_eq!(" Short ".parse::<TextMode>().unwrap(), TextMode::Short);
        assert!(matches!(
            "medium".parse::<TextMode>(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(TextMode::Long.to_string(), "LONG");
        assert_eq!(TextMode::Short.to_string(), "SHORT");
    }

    #[test]
    fn test_builtin_variant_selection() {
        assert_eq!(TextMode::Long.builtin_variant("en"), ProfileVariant::Standard);
        assert_eq!(
            TextMode::Short.builtin_variant("en"),
            ProfileVariant::ShortText
        );
        // Italian has no short-text profile
        assert_eq!(TextMode::Short.builtin_variant("it"), ProfileVariant::Standard);
    }

    #[test]
    fn test_long_normalization() {
        let raw = "<p>Visit our   https://example.com/some/page shop today</p>\n\nпривет";
        let long = TextMode::Long.normalize(raw);
        assert_eq!(long, "Visit our shop today");
    }

    #[test]
    fn test_short_normalization_keeps_everything() {
        let raw = "  Visit https://example.com/some/page\ttoday  ";
        assert_eq!(
            TextMode::Short.normalize(raw),
            "Visit https://example.com/some/page today"
        );
    }

    #[test]
    fn test_long_mode_truncates() {
        let raw = "a".repeat(MAX_TEXT_CHARS + 50);
        assert_eq!(TextMode::Long.normalize(&raw).chars().count(), MAX_TEXT_CHARS);
        assert_eq!(TextMode::Short.normalize(&raw).chars().count(), MAX_TEXT_CHARS + 50);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: TextMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"Short\"").unwrap();
        assert_eq!(parsed.mode, TextMode::Short);
        let written = toml::to_string(&Wrapper {
            mode: TextMode::Long,
        })
        .unwrap();
        assert!(written.contains("mode = \"long\""));
    }
}
