use super::{LoadError, Table, data, parse_resource};
use crate::{
    locale::{DEFAULT_LOCALE, LocaleTag},
    provider::{Lookup, ProviderError, TranslationProvider},
};
use std::{collections::HashMap, sync::OnceLock};
use tracing::{debug, trace};

static EMBEDDED: OnceLock<Result<TranslationStore, LoadError>> = OnceLock::new();

/// Immutable set of per-locale tables with a guaranteed default table.
///
/// The default table is held apart from the others so every fallback has a
/// target without any runtime check.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    default: LocaleTag,
    default_table: Table,
    tables: HashMap<LocaleTag, Table>,
}

impl TranslationStore {
    pub fn builder() -> TranslationStoreBuilder {
        TranslationStoreBuilder::default()
    }

    /// The store built from the resources compiled into the crate.
    ///
    /// Loaded on first use. A load failure is cached and returned to every
    /// caller; nothing is served from a partially loaded store.
    pub fn embedded() -> Result<&'static TranslationStore, LoadError> {
        EMBEDDED
            .get_or_init(|| Self::from_manifest(data::MANIFEST.iter().copied()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Build a store from `(locale tag, resource text)` pairs with `en` as
    /// the default locale.
    pub fn from_manifest<'a>(
        manifest: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, LoadError> {
        let mut builder = Self::builder();
        for (tag, text) in manifest {
            let locale = LocaleTag::parse(tag).map_err(|source| LoadError::InvalidLocale {
                tag: tag.to_owned(),
                source,
            })?;
            builder = builder.add_resource(locale, text)?;
        }
        builder.build()
    }

    #[inline]
    pub fn default_locale(&self) -> &LocaleTag {
        &self.default
    }

    /// Table registered for exactly `locale`, without fallback.
    pub fn table(&self, locale: &LocaleTag) -> Option<&Table> {
        if *locale == self.default {
            Some(&self.default_table)
        } else {
            self.tables.get(locale)
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &LocaleTag> {
        std::iter::once(&self.default).chain(self.tables.keys())
    }

    /// Pick the table serving `locale`: the exact tag, then its parent
    /// language, then the default locale.
    pub fn select(&self, locale: &LocaleTag) -> (LocaleTag, &Table) {
        for tier in locale.fallback_chain(&self.default) {
            if let Some(table) = self.table(&tier) {
                trace!(requested = %locale, selected = %tier, "translation table selected");
                return (tier, table);
            }
        }
        (self.default.clone(), &self.default_table)
    }

    /// Name of `code` in the table selected for `locale`.
    ///
    /// Once a table is selected a missing code is `None`; other tiers are not
    /// searched.
    pub fn get(&self, code: &str, locale: &LocaleTag) -> Option<&str> {
        self.select(locale).1.get(code).map(String::as_str)
    }
}

/// A store used as an override defers every code its selected table lacks.
impl TranslationProvider for TranslationStore {
    fn lookup(&self, code: &str, locale: &LocaleTag) -> Result<Lookup, ProviderError> {
        Ok(Lookup::from(self.get(code, locale).map(str::to_owned)))
    }
}

#[derive(Debug, Default)]
pub struct TranslationStoreBuilder {
    default: Option<LocaleTag>,
    tables: HashMap<LocaleTag, Table>,
}

impl TranslationStoreBuilder {
    /// Terminal fallback locale. `en` when not set.
    pub fn default_locale(mut self, locale: LocaleTag) -> Self {
        self.default = Some(locale);
        self
    }

    /// Merge entries into `locale`'s table; later entries overwrite earlier
    /// ones with the same code.
    pub fn add_entries<I, K, V>(mut self, locale: LocaleTag, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tables
            .entry(locale)
            .or_default()
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Parse `text` and merge it into `locale`'s table.
    pub fn add_resource(self, locale: LocaleTag, text: &str) -> Result<Self, LoadError> {
        let table = parse_resource(&locale, text)?;
        Ok(self.add_entries(locale, table))
    }

    pub fn build(mut self) -> Result<TranslationStore, LoadError> {
        let default = self.default.unwrap_or(DEFAULT_LOCALE);
        let Some(default_table) = self.tables.remove(&default) else {
            return Err(LoadError::MissingDefault(default));
        };

        debug!(
            default = %default,
            locales = self.tables.len() + 1,
            codes = default_table.len(),
            "translation store built"
        );

        Ok(TranslationStore {
            default,
            default_table,
            tables: self.tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> LocaleTag {
        LocaleTag::parse(s).unwrap()
    }

    fn sample() -> TranslationStore {
        TranslationStore::builder()
            .add_entries(tag("en"), [("CHE", "Switzerland"), ("FRA", "France")])
            .add_entries(tag("fr"), [("CHE", "Suisse"), ("FRA", "France")])
            .add_entries(tag("de-CH"), [("CHE", "Schwiiz")])
            .build()
            .unwrap()
    }

    #[test]
    fn selects_exact_then_parent_then_default() {
        let store = sample();
        assert_eq!(store.select(&tag("fr")).0, tag("fr"));
        assert_eq!(store.select(&tag("fr-CH")).0, tag("fr"));
        assert_eq!(store.select(&tag("de-CH")).0, tag("de-CH"));
        assert_eq!(store.select(&tag("de")).0, tag("en"));
        assert_eq!(store.select(&tag("nb-NO")).0, tag("en"));
    }

    #[test]
    fn missing_code_in_selected_table_does_not_fall_through() {
        let store = sample();
        assert_eq!(store.get("CHE", &tag("de-CH")), Some("Schwiiz"));
        assert_eq!(store.get("FRA", &tag("de-CH")), None);
    }

    #[test]
    fn missing_default_is_fatal() {
        let err = TranslationStore::builder()
            .add_entries(tag("fr"), [("CHE", "Suisse")])
            .build()
            .unwrap_err();
        assert_eq!(err, LoadError::MissingDefault(tag("en")));
    }

    #[test]
    fn custom_default_locale() {
        let store = TranslationStore::builder()
            .default_locale(tag("fr"))
            .add_entries(tag("fr"), [("CHE", "Suisse")])
            .build()
            .unwrap();
        assert_eq!(store.default_locale(), &tag("fr"));
        assert_eq!(store.get("CHE", &tag("ja")), Some("Suisse"));
    }

    #[test]
    fn entries_merge_with_last_write_winning() {
        let store = TranslationStore::builder()
            .add_entries(tag("en"), [("CHE", "Switzerland"), ("FRA", "France")])
            .add_entries(tag("en"), [("CHE", "Swiss Confederation")])
            .build()
            .unwrap();
        assert_eq!(store.get("CHE", &tag("en")), Some("Swiss Confederation"));
        assert_eq!(store.get("FRA", &tag("en")), Some("France"));
    }

    #[test]
    fn malformed_resource_aborts_manifest() {
        let err = TranslationStore::from_manifest([("en", "CHE:Switzerland"), ("fr", "CHE Suisse")])
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingSeparator { line: 1, .. }));
    }

    #[test]
    fn invalid_manifest_tag_is_fatal() {
        let err = TranslationStore::from_manifest([("en", "CHE:Switzerland"), ("C", "CHE:Suisse")])
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidLocale { ref tag, .. } if tag == "C"));
    }

    #[test]
    fn manifest_without_default_is_fatal() {
        let err = TranslationStore::from_manifest([("fr", "CHE:Suisse")]).unwrap_err();
        assert_eq!(err, LoadError::MissingDefault(tag("en")));
    }

    #[test]
    fn store_as_provider_defers_unknown_codes() {
        let store = sample();
        assert_eq!(
            store.lookup("CHE", &tag("fr-CH")).unwrap(),
            Lookup::present("Suisse")
        );
        assert!(store.lookup("DEU", &tag("fr")).unwrap().is_deferred());
    }

    #[test]
    fn embedded_store_loads_every_declared_locale() {
        let store = TranslationStore::embedded().unwrap();
        let mut locales: Vec<String> = store.locales().map(ToString::to_string).collect();
        locales.sort();
        assert_eq!(locales, ["de", "en", "fr"]);
        assert_eq!(store.get("CHE", &tag("en")), Some("Switzerland"));
        assert_eq!(store.get("CHE", &tag("fr")), Some("Suisse"));
        assert_eq!(store.get("CHE", &tag("de")), Some("Schweiz"));
    }

    #[test]
    fn embedded_locales_cover_the_same_codes() {
        let store = TranslationStore::embedded().unwrap();
        let default = store.table(store.default_locale()).unwrap();
        for locale in store.locales() {
            let table = store.table(locale).unwrap();
            assert_eq!(table.len(), default.len(), "locale `{locale}`");
            assert!(default.keys().all(|code| table.contains_key(code)), "locale `{locale}`");
        }
    }
}
