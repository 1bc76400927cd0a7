//! Override providers consulted ahead of the embedded translation tables.

use crate::locale::LocaleTag;
use thiserror::Error;

/// Outcome of asking a provider for a name.
///
/// `Present("")` is an intentionally blank name and is returned as-is;
/// `Deferred` hands the lookup over to the default tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Present(String),
    Deferred,
}

impl Lookup {
    #[inline]
    pub fn present(name: impl Into<String>) -> Self {
        Self::Present(name.into())
    }

    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred)
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Present(name) => Some(name),
            Self::Deferred => None,
        }
    }
}

impl From<Option<String>> for Lookup {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Deferred, Self::Present)
    }
}

/// Failure raised by a provider. Propagated to the caller, never treated as
/// a deferral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("translation provider failed for `{code}` in `{locale}`: {reason}")]
pub struct ProviderError {
    pub code: String,
    pub locale: LocaleTag,
    pub reason: String,
}

impl ProviderError {
    pub fn new(code: &str, locale: &LocaleTag, reason: impl Into<String>) -> Self {
        Self {
            code: code.to_owned(),
            locale: locale.clone(),
            reason: reason.into(),
        }
    }
}

/// Source of country names keyed by alpha-3 code and locale.
pub trait TranslationProvider: Send + Sync {
    fn lookup(&self, code: &str, locale: &LocaleTag) -> Result<Lookup, ProviderError>;
}

impl<F> TranslationProvider for F
where
    F: Fn(&str, &LocaleTag) -> Result<Lookup, ProviderError> + Send + Sync,
{
    #[inline]
    fn lookup(&self, code: &str, locale: &LocaleTag) -> Result<Lookup, ProviderError> {
        self(code, locale)
    }
}
