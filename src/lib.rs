pub mod ambient;
pub mod config;
pub mod context;
pub mod country;
pub mod locale;
pub mod provider;
pub mod resolver;
pub mod translation;

pub use context::{Context, ContextBuilder};
pub use country::Country;
pub use locale::{DEFAULT_LOCALE, LocaleError, LocaleTag};
pub use provider::{Lookup, ProviderError, TranslationProvider};
pub use resolver::{ResolveError, Resolver};
pub use translation::{LoadError, TranslationStore, TranslationStoreBuilder};
