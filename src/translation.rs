//! Per-locale `code -> name` tables and the line format they are loaded from.
//!
//! Resources hold one `CODE:Name` record per line. The split happens on the
//! first colon only, so names may contain colons themselves.

pub mod data;
mod store;

pub use store::{TranslationStore, TranslationStoreBuilder};

use crate::locale::{LocaleError, LocaleTag};
use memchr::memchr;
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

/// Alpha-3 code to localized name.
pub type Table = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("resource `{locale}` line {line}: missing `:` separator in `{content}`")]
    MissingSeparator {
        locale: LocaleTag,
        line: usize,
        content: String,
    },
    #[error("resource `{locale}` line {line}: empty country code")]
    EmptyCode { locale: LocaleTag, line: usize },
    #[error("resource tag `{tag}` is not a valid locale: {source}")]
    InvalidLocale {
        tag: String,
        #[source]
        source: LocaleError,
    },
    #[error("default locale `{0}` has no translation table")]
    MissingDefault(LocaleTag),
}

/// Parse one resource into a table.
///
/// Any malformed line aborts the whole parse. Duplicate codes keep the
/// value of the last line.
pub fn parse_resource(locale: &LocaleTag, text: &str) -> Result<Table, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut table = Table::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let Some(split) = memchr(b':', line.as_bytes()) else {
            return Err(LoadError::MissingSeparator {
                locale: locale.clone(),
                line: line_no,
                content: line.to_owned(),
            });
        };

        let (code, name) = (&line[..split], &line[split + 1..]);
        if code.is_empty() {
            return Err(LoadError::EmptyCode {
                locale: locale.clone(),
                line: line_no,
            });
        }

        if let Some(previous) = table.insert(code.to_owned(), name.to_owned()) {
            trace!(%locale, code, %previous, line = line_no, "duplicate code, keeping later entry");
        }
    }

    Ok(table)
}
