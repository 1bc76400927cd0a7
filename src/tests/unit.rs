#[cfg(test)]
mod unit_tests {

    use super::{ambient_guard, set_locale};
    use crate::{
        Country, LocaleTag, Lookup, ProviderError, ResolveError, ambient, country::data::CHE,
    };
    use std::sync::{Arc, Mutex};

    fn fr() -> LocaleTag {
        LocaleTag::parse("fr").unwrap()
    }

    /// Provider whose answer for `CHE` can be swapped while installed.
    fn scripted(answer: &Arc<Mutex<Option<String>>>) -> Arc<dyn crate::TranslationProvider> {
        let answer = Arc::clone(answer);
        Arc::new(move |code: &str, _: &LocaleTag| -> Result<Lookup, ProviderError> {
            let current = answer.lock().unwrap().clone();
            Ok(if code == "CHE" { Lookup::from(current) } else { Lookup::Deferred })
        })
    }

    #[test]
    fn create() {
        let _guard = ambient_guard();
        let country = Country::localized("CH", "CHE", 756);
        assert_eq!(country.name().unwrap(), "Switzerland");
    }

    #[test]
    fn child_locale_uses_parent_table() {
        let _guard = ambient_guard();
        set_locale("fr-CH");
        assert_eq!(CHE.name().unwrap(), "Suisse");
    }

    #[test]
    fn changing_locale_changes_name() {
        let _guard = ambient_guard();
        let country = Country::localized("CH", "CHE", 756);
        assert_eq!(country.name().unwrap(), "Switzerland");

        set_locale("fr");
        assert_eq!(country.name().unwrap(), "Suisse");

        set_locale("de");
        assert_eq!(country.name().unwrap(), "Schweiz");
    }

    #[test]
    fn unsupported_locale_uses_default() {
        let _guard = ambient_guard();
        set_locale("nb-NO");
        assert_eq!(CHE.name().unwrap(), "Switzerland");
    }

    #[test]
    fn localized_name_ignores_current_locale() {
        let _guard = ambient_guard();
        assert_eq!(CHE.name().unwrap(), "Switzerland");
        assert_eq!(CHE.localized_name(&fr()).unwrap(), "Suisse");
    }

    #[test]
    fn every_listed_country_has_a_name() {
        let _guard = ambient_guard();
        let list = Country::all();
        assert!(!list.is_empty());
        for country in list {
            assert!(!country.name().unwrap().is_empty(), "{}", country.alpha3());
        }
    }

    #[test]
    fn override_answers_and_deferrals() {
        let _guard = ambient_guard();
        let answer = Arc::new(Mutex::new(None));
        ambient::set_override(Some(scripted(&answer)));

        *answer.lock().unwrap() = Some("Switzerland!".to_owned());
        assert_eq!(CHE.name().unwrap(), "Switzerland!");

        *answer.lock().unwrap() = None;
        assert_eq!(CHE.name().unwrap(), "Switzerland");

        *answer.lock().unwrap() = Some(String::new());
        assert_eq!(CHE.name().unwrap(), "");

        *answer.lock().unwrap() = Some("Suisse!".to_owned());
        assert_eq!(CHE.localized_name(&fr()).unwrap(), "Suisse!");

        *answer.lock().unwrap() = None;
        assert_eq!(CHE.localized_name(&fr()).unwrap(), "Suisse");

        *answer.lock().unwrap() = Some(String::new());
        assert_eq!(CHE.localized_name(&fr()).unwrap(), "");

        ambient::clear_override();
        assert_eq!(CHE.name().unwrap(), "Switzerland");
        assert_eq!(CHE.localized_name(&fr()).unwrap(), "Suisse");
    }

    #[test]
    fn override_only_touches_its_codes() {
        let _guard = ambient_guard();
        let answer = Arc::new(Mutex::new(Some("Helvetia".to_owned())));
        ambient::set_override(Some(scripted(&answer)));
        assert_eq!(ambient::lookup("CHE").unwrap(), "Helvetia");
        assert_eq!(ambient::lookup("FRA").unwrap(), "France");
        assert_eq!(ambient::lookup_in("DEU", &fr()).unwrap(), "Allemagne");
    }

    #[test]
    fn literal_name_is_fixed() {
        let _guard = ambient_guard();
        let foo = Country::new("FO", "FOO", 999, "Foo");
        assert_eq!(foo.name().unwrap(), "Foo");

        set_locale("fr");
        let answer = Arc::new(Mutex::new(Some("Bar".to_owned())));
        ambient::set_override(Some(scripted(&answer)));
        assert_eq!(foo.name().unwrap(), "Foo");
        assert_eq!(foo.localized_name(&fr()).unwrap(), "Foo");

        // Literal names win even when the alpha-3 code is a real one.
        let custom_che = Country::new("CH", "CHE", 756, "Confédération");
        assert_eq!(custom_che.name().unwrap(), "Confédération");
    }

    #[test]
    fn unknown_code_is_not_found() {
        let _guard = ambient_guard();
        let err = Country::localized("XX", "XXX", 0).name().unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                code: "XXX".to_owned(),
                locale: LocaleTag::default(),
            }
        );
    }

    #[test]
    fn failing_override_is_an_error() {
        let _guard = ambient_guard();
        ambient::set_override(Some(Arc::new(
            |code: &str, locale: &LocaleTag| -> Result<Lookup, ProviderError> {
                Err(ProviderError::new(code, locale, "offline"))
            },
        )));
        assert!(matches!(CHE.name(), Err(ResolveError::Provider(_))));
        ambient::clear_override();
        assert_eq!(CHE.name().unwrap(), "Switzerland");
    }

    #[test]
    fn context_snapshot_reflects_ambient_state() {
        let _guard = ambient_guard();
        set_locale("fr-CH");
        let ctx = ambient::context();
        assert_eq!(ctx.locale().to_string(), "fr-CH");
        assert!(ctx.provider().is_none());
        assert!(ambient::override_provider().is_none());

        // A snapshot is detached from later ambient changes.
        set_locale("de");
        assert_eq!(CHE.name_in(&ctx).unwrap(), "Suisse");
        assert_eq!(ambient::current_locale().to_string(), "de");
    }
}
