//! Built-in language profiles
//!
//! The catalog covers seven Western European languages: German, English,
//! Spanish, French, Italian, Dutch and Portuguese. Each profile is trained on
//! a few kilobytes of general-domain prose, which is enough to tell these
//! languages apart in a sentence or more. Other languages, or profiles
//! trained on a larger corpus, are loaded as external profiles.
//!
//! Profiles are embedded in the binary and parsed on demand. There is no
//! global cache: a classifier keeps the profiles it was built from, and
//! rebuilding reads them again.

use crate::error::{Error, Result};
use lingid_ngram::NgramProfile;
use std::fmt;

macro_rules! embed_profile {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const STANDARD_PROFILES: &[(&str, &str)] = &[
    embed_profile!("de", "../profiles/languages/de.json"),
    embed_profile!("en", "../profiles/languages/en.json"),
    embed_profile!("es", "../profiles/languages/es.json"),
    embed_profile!("fr", "../profiles/languages/fr.json"),
    embed_profile!("it", "../profiles/languages/it.json"),
    embed_profile!("nl", "../profiles/languages/nl.json"),
    embed_profile!("pt", "../profiles/languages/pt.json"),
];

const SHORT_TEXT_PROFILES: &[(&str, &str)] = &[
    embed_profile!("de", "../profiles/languages.shorttext/de.json"),
    embed_profile!("en", "../profiles/languages.shorttext/en.json"),
    embed_profile!("es", "../profiles/languages.shorttext/es.json"),
    embed_profile!("fr", "../profiles/languages.shorttext/fr.json"),
];

/// Flavour of a built-in profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileVariant {
    /// Trained on running text, the default
    Standard,
    /// Trained on short snippets
    ShortText,
}

impl ProfileVariant {
    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ProfileVariant::Standard => STANDARD_PROFILES,
            ProfileVariant::ShortText => SHORT_TEXT_PROFILES,
        }
    }

    /// Directory name the variant is stored under
    pub fn dir_name(&self) -> &'static str {
        match self {
            ProfileVariant::Standard => "languages",
            ProfileVariant::ShortText => "languages.shorttext",
        }
    }
}

impl fmt::Display for ProfileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Codes of all built-in languages, sorted
///
/// Every language has a standard profile; this is the list used when no
/// restriction is configured.
pub fn languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = STANDARD_PROFILES.iter().map(|(code, _)| *code).collect();
    codes.sort_unstable();
    codes
}

/// True if `code` has a built-in profile of the given variant
pub fn has_variant(code: &str, variant: ProfileVariant) -> bool {
    variant.table().iter().any(|(c, _)| *c == code)
}

/// Parse the built-in profile of `code`
pub fn load(code: &str, variant: ProfileVariant) -> Result<NgramProfile> {
    let origin = format!("builtin:{code} ({variant})");
    let (_, json) = variant
        .table()
        .iter()
        .find(|(c, _)| *c == code)
        .ok_or_else(|| Error::profile_load(&origin, "no built-in profile for this language"))?;

    let profile = NgramProfile::from_json_str(json).map_err(|e| Error::profile_load(&origin, e))?;

    if profile.name() != code {
        return Err(Error::profile_load(
            origin,
            format!("profile code mismatch: expected {code}, got {}", profile.name()),
        ));
    }

    Ok(profile)
}
