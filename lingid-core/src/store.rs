//! Profile store
//!
//! Assembles the ordered list of profiles a classifier is built from:
//! built-in languages first, in request order, then external profiles in
//! listed order. Nothing is de-duplicated and nothing is cached; every
//! [`ProfileStore::load`] reads its sources again.

use crate::{
    builtin,
    error::Result,
    mode::TextMode,
    source::{ExtraProfiles, ProfileSource},
};
use lingid_ngram::NgramProfile;

/// Declarative description of the profiles to load
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStore {
    mode: TextMode,
    include_builtins: bool,
    builtin_languages: Option<Vec<String>>,
    extra: Option<ExtraProfiles>,
}

impl ProfileStore {
    /// All built-in languages for `mode`, no extra profiles
    pub fn new(mode: TextMode) -> Self {
        Self {
            mode,
            include_builtins: true,
            builtin_languages: None,
            extra: None,
        }
    }

    /// Whether built-in profiles are loaded at all
    pub fn include_builtins(mut self, include: bool) -> Self {
        self.include_builtins = include;
        self
    }

    /// Restrict the built-in languages; an empty list means all of them
    pub fn builtin_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builtin_languages = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Add external profiles
    pub fn extra_profiles(mut self, extra: ExtraProfiles) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Text mode the built-in variants are picked for
    pub fn mode(&self) -> TextMode {
        self.mode
    }

    /// Sources a [`load`](Self::load) would read, in order
    ///
    /// Reads the index file when extra profiles come from one; otherwise
    /// performs no I/O.
    pub fn sources(&self) -> Result<Vec<ProfileSource>> {
        let mut sources = Vec::new();

        if self.include_builtins {
            let codes: Vec<String> = match &self.builtin_languages {
                Some(codes) if !codes.is_empty() => codes.clone(),
                _ => builtin::languages().into_iter().map(str::to_string).collect(),
            };
            for code in codes {
                let variant = self.mode.builtin_variant(&code);
                sources.push(ProfileSource::Builtin { code, variant });
            }
        }

        if let Some(extra) = &self.extra {
            sources.extend(extra.sources()?);
        }

        Ok(sources)
    }

    /// Read every profile, stopping at the first failure
    pub fn load(&self) -> Result<Vec<NgramProfile>> {
        self.sources()?
            .iter()
            .map(|source| {
                log::debug!("loading language profile from {source}");
                source.load()
            })
            .collect()
    }
}
