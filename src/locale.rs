//! Locale identifiers used to key translation tables.
//!
//! A [`LocaleTag`] is either a base language (`en`) or a region-qualified
//! language (`fr-CH`). Parsing goes through `unic-langid` so casing and
//! separators are canonical before a tag ever reaches a lookup table.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, langid};

/// Terminal fallback target for every lookup.
pub const DEFAULT_LOCALE: LocaleTag = LocaleTag(langid!("en"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("empty locale identifier")]
    Empty,
    #[error("malformed locale identifier `{0}`")]
    Malformed(String),
    #[error("unsupported locale identifier `{0}`: expected `language` or `language-REGION`")]
    Unsupported(String),
}

/// Normalized locale identifier.
///
/// Has exactly one parent: a region tag's parent is its base language, and a
/// base language's parent is the invariant root (`None`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag(LanguageIdentifier);

impl LocaleTag {
    /// Parse and canonicalize a raw locale string.
    ///
    /// POSIX decorations are stripped (`fr_CH.UTF-8@euro` -> `fr-CH`) and
    /// `_` is accepted as separator.
    ///
    /// ```
    /// use country_names::LocaleTag;
    ///
    /// assert_eq!(LocaleTag::parse("fr_ch.UTF-8").unwrap().to_string(), "fr-CH");
    /// assert!(LocaleTag::parse("C").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, LocaleError> {
        let trimmed = raw.trim();
        let stripped = trimmed.split(['.', '@']).next().unwrap_or_default().trim();
        if stripped.is_empty() {
            return Err(LocaleError::Empty);
        }

        let candidate = stripped.replace('_', "-");
        let id = LanguageIdentifier::from_str(&candidate)
            .map_err(|_| LocaleError::Malformed(trimmed.to_owned()))?;

        let language = id.language.as_str();
        if language == "und" || !(2..=3).contains(&language.len()) {
            return Err(LocaleError::Malformed(trimmed.to_owned()));
        }
        if id.script.is_some() || id.variants().next().is_some() {
            return Err(LocaleError::Unsupported(trimmed.to_owned()));
        }

        Ok(Self(id))
    }

    #[inline]
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|region| region.as_str())
    }

    #[inline]
    pub fn is_base(&self) -> bool {
        self.0.region.is_none()
    }

    /// The base language of a region tag, or `None` when the parent is the
    /// invariant root.
    pub fn parent(&self) -> Option<LocaleTag> {
        if self.is_base() {
            return None;
        }
        let mut id = self.0.clone();
        id.region = None;
        Some(Self(id))
    }

    /// Ordered lookup chain: the tag itself, its parent, then `default`.
    /// Duplicates are removed, keeping the first occurrence.
    pub fn fallback_chain(&self, default: &LocaleTag) -> SmallVec<[LocaleTag; 3]> {
        let mut chain: SmallVec<[LocaleTag; 3]> = SmallVec::new();
        let candidates = [Some(self.clone()), self.parent(), Some(default.clone())];
        for tag in candidates.into_iter().flatten() {
            if !chain.contains(&tag) {
                chain.push(tag);
            }
        }
        chain
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for LocaleTag {
    type Error = LocaleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
