//! Name resolution: the override provider first, then the translation store.

use crate::{
    context::Context,
    locale::LocaleTag,
    provider::{Lookup, ProviderError},
    translation::{LoadError, TranslationStore},
};
use std::borrow::Cow;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no name for country code `{code}` in locale `{locale}`")]
    NotFound { code: String, locale: LocaleTag },
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("translation data failed to load: {0}")]
    Load(#[from] LoadError),
}

/// Resolves country names against a store.
///
/// Pure with respect to its inputs: the result only depends on the context,
/// the store and the code.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'s> {
    store: &'s TranslationStore,
}

impl Resolver<'static> {
    /// Resolver over the embedded translation data.
    pub fn embedded() -> Result<Self, ResolveError> {
        Ok(Self::new(TranslationStore::embedded()?))
    }
}

impl<'s> Resolver<'s> {
    #[inline]
    pub fn new(store: &'s TranslationStore) -> Self {
        Self { store }
    }

    #[inline]
    pub fn store(&self) -> &'s TranslationStore {
        self.store
    }

    /// Name of `code` in the context's locale.
    #[inline]
    pub fn resolve(&self, code: &str, ctx: &Context) -> Result<Cow<'s, str>, ResolveError> {
        self.resolve_in(code, ctx.locale(), ctx)
    }

    /// Name of `code` in `locale`, using the context's override.
    ///
    /// A `Present` answer from the override is final, even when empty. A
    /// `Deferred` answer, or no override, falls back to the store. The store
    /// picks one table (exact, parent, default) and a code missing from that
    /// table is [`ResolveError::NotFound`].
    pub fn resolve_in(
        &self,
        code: &str,
        locale: &LocaleTag,
        ctx: &Context,
    ) -> Result<Cow<'s, str>, ResolveError> {
        if let Some(provider) = ctx.provider() {
            match provider.lookup(code, locale)? {
                Lookup::Present(name) => {
                    trace!(code, %locale, "name supplied by override");
                    return Ok(Cow::Owned(name));
                }
                Lookup::Deferred => trace!(code, %locale, "override deferred"),
            }
        }

        let (selected, table) = self.store.select(locale);
        table
            .get(code)
            .map(|name| Cow::Borrowed(name.as_str()))
            .ok_or_else(|| ResolveError::NotFound {
                code: code.to_owned(),
                locale: selected,
            })
    }
}
