//! Profile sources
//!
//! A [`ProfileSource`] names one profile: either a built-in language or an
//! external JSON file. External files are given as plain paths or `file://`
//! URLs, either directly or through an index file that lists one location per
//! line.

use crate::{
    builtin::{self, ProfileVariant},
    error::{Error, Result},
};
use lingid_ngram::NgramProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Where one profile comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Embedded profile of a language
    Builtin {
        /// Language code
        code: String,
        /// Variant picked for the text mode
        variant: ProfileVariant,
    },
    /// Profile file at a resolved location
    External(String),
}

impl ProfileSource {
    /// Read and parse the profile
    pub fn load(&self) -> Result<NgramProfile> {
        match self {
            ProfileSource::Builtin { code, variant } => builtin::load(code, *variant),
            ProfileSource::External(location) => {
                let path = location_path(location)?;
                let bytes = fs::read(&path).map_err(|e| Error::profile_load(location, e))?;
                NgramProfile::from_json_slice(&bytes).map_err(|e| Error::profile_load(location, e))
            }
        }
    }
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSource::Builtin { code, variant } => write!(f, "builtin:{code} ({variant})"),
            ProfileSource::External(location) => write!(f, "{location}"),
        }
    }
}

/// User-supplied profiles on top of the built-in ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraProfiles {
    /// Profile locations, loaded in order
    Locations(Vec<String>),
    /// A text file listing one location per line
    ///
    /// `#` starts a comment, blank lines are skipped, and relative entries
    /// are resolved against the directory of the index file.
    IndexFile(String),
}

impl ExtraProfiles {
    /// Resolve to external sources, reading the index file if there is one
    pub fn sources(&self) -> Result<Vec<ProfileSource>> {
        match self {
            ExtraProfiles::Locations(locations) => locations
                .iter()
                .map(|location| resolve_location(location, None).map(ProfileSource::External))
                .collect(),
            ExtraProfiles::IndexFile(index) => {
                let index_path = location_path(index)?;
                let content = fs::read_to_string(&index_path)
                    .map_err(|e| Error::profile_load(index, format!("cannot read index file: {e}")))?;
                let base = index_path.parent().map(Path::to_path_buf);
                parse_index(&content)
                    .into_iter()
                    .map(|entry| {
                        resolve_location(&entry, base.as_deref()).map(ProfileSource::External)
                    })
                    .collect()
            }
        }
    }
}

/// Entries of an index file, in order
pub fn parse_index(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `location` as a URL if it carries a scheme
///
/// Single-letter schemes are Windows drive letters, not URLs.
fn as_url(location: &str) -> Option<Url> {
    Url::parse(location)
        .ok()
        .filter(|url| url.scheme().len() > 1)
}

fn resolve_location(location: &str, base: Option<&Path>) -> Result<String> {
    if let Some(url) = as_url(location) {
        if url.scheme() != "file" {
            return Err(Error::profile_load(
                location,
                format!("unsupported URL scheme '{}'", url.scheme()),
            ));
        }
        return Ok(location.to_string());
    }

    let path = Path::new(location);
    match base {
        Some(base) if path.is_relative() => Ok(base.join(path).to_string_lossy().into_owned()),
        _ => Ok(location.to_string()),
    }
}

fn location_path(location: &str) -> Result<PathBuf> {
    match as_url(location) {
        Some(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|_| Error::profile_load(location, "not a local file URL")),
        Some(url) => Err(Error::profile_load(
            location,
            format!("unsupported URL scheme '{}'", url.scheme()),
        )),
        None => Ok(PathBuf::from(location)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_skips_comments_and_blanks() {
        let content = "# profiles\n\nfr.json\n  de.json  # German\n#nl.json\n   \n";
        assert_eq!(parse_index(content), vec!["fr.json", "de.json"]);
    }

    #[test]
    fn test_resolve_relative_against_base() {
        let resolved = resolve_location("sub/xx.json", Some(Path::new("/data/profiles"))).unwrap();
        assert_eq!(PathBuf::from(resolved), PathBuf::from("/data/profiles/sub/xx.json"));
    }

    #[test]
    fn test_resolve_keeps_absolute_and_urls() {
        let base = Some(Path::new("/data"));
        assert_eq!(resolve_location("/abs/xx.json", base).unwrap(), "/abs/xx.json");
        assert_eq!(
            resolve_location("file:///abs/xx.json", base).unwrap(),
            "file:///abs/xx.json"
        );
    }

    #[test]
    fn test_unsupported_scheme() {
        match resolve_location("https://example.com/xx.json", None) {
            Err(Error::ProfileLoad { origin, reason }) => {
                assert_eq!(origin, "https://example.com/xx.json");
                assert!(reason.contains("https"));
            }
            other => panic!("Expected ProfileLoad error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_url_to_path() {
        assert_eq!(
            location_path("file:///tmp/xx.json").unwrap(),
            PathBuf::from("/tmp/xx.json")
        );
    }

    #[test]
    fn test_display() {
        let builtin = ProfileSource::Builtin {
            code: "en".into(),
            variant: ProfileVariant::ShortText,
        };
        assert_eq!(builtin.to_string(), "builtin:en (languages.shorttext)");
        assert_eq!(ProfileSource::External("a.json".into()).to_string(), "a.json");
    }

    #[test]
    fn test_extra_profiles_toml_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            extra: ExtraProfiles,
        }
        let list: Wrapper = toml::from_str("extra = { locations = [\"a.json\", \"b.json\"] }").unwrap();
        assert_eq!(
            list.extra,
            ExtraProfiles::Locations(vec!["a.json".into(), "b.json".into()])
        );
        let index: Wrapper = toml::from_str("extra = { index_file = \"profiles.txt\" }").unwrap();
        assert_eq!(index.extra, ExtraProfiles::IndexFile("profiles.txt".into()));
    }
}
