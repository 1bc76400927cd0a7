// src/context.rs
// Explicit lookup context: the locale to resolve in and the optional override
// consulted first. Threaded through every resolver call instead of globals.

use crate::{locale::LocaleTag, provider::TranslationProvider};
use std::{fmt, sync::Arc};

/// Runtime context passed to every resolution.
///
/// Contains:
/// - `locale`: locale used when the caller does not pass one explicitly
/// - `provider`: override consulted before the translation store
#[derive(Clone, Default)]
pub struct Context {
    locale: LocaleTag,
    provider: Option<Arc<dyn TranslationProvider>>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("locale", &self.locale)
            .field("provider", &self.provider.as_ref().map(|_| "dyn TranslationProvider"))
            .finish()
    }
}

impl Context {
    /// Context for `locale` with no override installed.
    #[inline]
    pub fn new(locale: LocaleTag) -> Self {
        Self {
            locale,
            provider: None,
        }
    }

    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    #[inline]
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    #[inline]
    pub fn provider(&self) -> Option<&dyn TranslationProvider> {
        self.provider.as_deref()
    }

    /// Same override, different locale.
    pub fn with_locale(&self, locale: LocaleTag) -> Self {
        Self {
            locale,
            provider: self.provider.clone(),
        }
    }

    /// Same locale, override replaced (or cleared with `None`).
    pub fn with_provider(&self, provider: Option<Arc<dyn TranslationProvider>>) -> Self {
        Self {
            locale: self.locale.clone(),
            provider,
        }
    }
}

#[derive(Default)]
pub struct ContextBuilder {
    locale: LocaleTag,
    provider: Option<Arc<dyn TranslationProvider>>,
}

impl ContextBuilder {
    pub fn locale(mut self, locale: LocaleTag) -> Self {
        self.locale = locale;
        self
    }

    pub fn provider<P: TranslationProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    pub fn shared_provider(mut self, provider: Arc<dyn TranslationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn build(self) -> Context {
        Context {
            locale: self.locale,
            provider: self.provider,
        }
    }
}
