//! Startup configuration for the ambient locale.
//!
//! Precedence is `COUNTRY_NAMES_LOCALE`, then the POSIX locale variables
//! (`LC_ALL`, `LC_MESSAGES`, `LANG`). The first value that parses as a
//! [`LocaleTag`] wins; `C`, `POSIX` and other unparsable values are skipped.
//! When nothing usable is set the default locale (`en`) is used.

use crate::locale::{DEFAULT_LOCALE, LocaleTag};
use tracing::debug;

/// Environment variable name used to select the initial locale.
pub const COUNTRY_NAMES_LOCALE_ENV: &str = "COUNTRY_NAMES_LOCALE";

/// Variables consulted, highest precedence first.
pub const LOCALE_ENV_PRECEDENCE: [&str; 4] =
    [COUNTRY_NAMES_LOCALE_ENV, "LC_ALL", "LC_MESSAGES", "LANG"];

/// Read-only environment access used for locale resolution.
pub trait EnvProvider {
    /// Fetch the environment variable value for `key`.
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Resolve the locale the ambient layer starts with.
///
/// # Examples
///
/// ```rust
/// use country_names::config::{EnvProvider, resolve_startup_locale};
///
/// struct StubEnv;
/// impl EnvProvider for StubEnv {
///     fn var(&self, key: &str) -> Option<String> {
///         (key == "LANG").then(|| "fr_CH.UTF-8".to_owned())
///     }
/// }
///
/// assert_eq!(resolve_startup_locale(&StubEnv).to_string(), "fr-CH");
/// ```
#[must_use]
pub fn resolve_startup_locale(env: &impl EnvProvider) -> LocaleTag {
    for key in LOCALE_ENV_PRECEDENCE {
        let Some(raw) = env.var(key) else {
            continue;
        };
        match LocaleTag::parse(&raw) {
            Ok(locale) => {
                debug!(source = key, %locale, "startup locale resolved");
                return locale;
            }
            Err(err) => debug!(source = key, value = %raw, error = %err, "ignoring locale value"),
        }
    }
    DEFAULT_LOCALE
}
