//! Process-wide current locale and override slot.
//!
//! Convenience layer for callers that do not want to thread a [`Context`]
//! through their code. Locale and override share one `RwLock`; every lookup
//! takes a snapshot of both under a single read and then resolves exactly
//! like [`Resolver`] does with an explicit context.

use crate::{
    config::{SystemEnv, resolve_startup_locale},
    context::Context,
    locale::LocaleTag,
    provider::TranslationProvider,
    resolver::{ResolveError, Resolver},
};
use std::{
    borrow::Cow,
    sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tracing::debug;

struct AmbientState {
    locale: LocaleTag,
    provider: Option<Arc<dyn TranslationProvider>>,
}

static STATE: OnceLock<RwLock<AmbientState>> = OnceLock::new();

fn slot() -> &'static RwLock<AmbientState> {
    STATE.get_or_init(|| {
        RwLock::new(AmbientState {
            locale: resolve_startup_locale(&SystemEnv),
            provider: None,
        })
    })
}

fn read() -> RwLockReadGuard<'static, AmbientState> {
    slot().read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, AmbientState> {
    slot().write().unwrap_or_else(PoisonError::into_inner)
}

/// Locale used by lookups that do not name one.
pub fn current_locale() -> LocaleTag {
    read().locale.clone()
}

pub fn set_current_locale(locale: LocaleTag) {
    let mut state = write();
    if state.locale != locale {
        debug!(from = %state.locale, to = %locale, "current locale changed");
        state.locale = locale;
    }
}

/// Install (`Some`) or clear (`None`) the process-wide override.
pub fn set_override(provider: Option<Arc<dyn TranslationProvider>>) {
    debug!(installed = provider.is_some(), "override provider replaced");
    write().provider = provider;
}

#[inline]
pub fn clear_override() {
    set_override(None);
}

pub fn override_provider() -> Option<Arc<dyn TranslationProvider>> {
    read().provider.clone()
}

/// Replace locale and override together; readers see either the old pair or
/// the new one.
pub fn configure(locale: LocaleTag, provider: Option<Arc<dyn TranslationProvider>>) {
    let mut state = write();
    debug!(
        from = %state.locale,
        to = %locale,
        installed = provider.is_some(),
        "ambient state replaced"
    );
    state.locale = locale;
    state.provider = provider;
}

/// Snapshot of the ambient state as an explicit context.
pub fn context() -> Context {
    let state = read();
    let builder = Context::builder().locale(state.locale.clone());
    let builder = match &state.provider {
        Some(provider) => builder.shared_provider(Arc::clone(provider)),
        None => builder,
    };
    builder.build()
}

/// Name of `code` in the current locale.
pub fn lookup(code: &str) -> Result<Cow<'static, str>, ResolveError> {
    Resolver::embedded()?.resolve(code, &context())
}

/// Name of `code` in `locale`, still honouring the ambient override.
pub fn lookup_in(code: &str, locale: &LocaleTag) -> Result<Cow<'static, str>, ResolveError> {
    Resolver::embedded()?.resolve_in(code, locale, &context())
}
