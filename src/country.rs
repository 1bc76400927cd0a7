pub mod data;

use crate::{
    ambient,
    context::Context,
    locale::LocaleTag,
    resolver::{ResolveError, Resolver},
};
use std::borrow::Cow;

/// ISO 3166 country with alpha-2, alpha-3 and numeric codes.
///
/// A country built with [`Country::new`] carries a literal name that is
/// returned as-is. A country built with [`Country::localized`] (every entry
/// of [`Country::all`]) resolves its name on each call, so the same value
/// follows later changes of locale or override.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country {
    alpha2: Cow<'static, str>,
    alpha3: Cow<'static, str>,
    numeric: u16,
    name: Option<Cow<'static, str>>,
}

impl Country {
    /// Country with custom codes and a fixed name.
    pub fn new(
        alpha2: impl Into<Cow<'static, str>>,
        alpha3: impl Into<Cow<'static, str>>,
        numeric: u16,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            numeric,
            name: Some(name.into()),
        }
    }

    /// Country whose name comes from the translation tables.
    pub const fn localized(alpha2: &'static str, alpha3: &'static str, numeric: u16) -> Self {
        Self {
            alpha2: Cow::Borrowed(alpha2),
            alpha3: Cow::Borrowed(alpha3),
            numeric,
            name: None,
        }
    }

    #[inline]
    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    #[inline]
    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    #[inline]
    pub fn numeric(&self) -> u16 {
        self.numeric
    }

    /// The literal name, if this country was built with one.
    #[inline]
    pub fn literal_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name in the ambient current locale.
    pub fn name(&self) -> Result<Cow<'_, str>, ResolveError> {
        match self.literal_name() {
            Some(name) => Ok(Cow::Borrowed(name)),
            None => ambient::lookup(&self.alpha3),
        }
    }

    /// Name in `locale`, honouring the ambient override.
    pub fn localized_name(&self, locale: &LocaleTag) -> Result<Cow<'_, str>, ResolveError> {
        match self.literal_name() {
            Some(name) => Ok(Cow::Borrowed(name)),
            None => ambient::lookup_in(&self.alpha3, locale),
        }
    }

    /// Name resolved against the embedded tables with an explicit context.
    pub fn name_in(&self, ctx: &Context) -> Result<Cow<'_, str>, ResolveError> {
        self.resolve_with(&Resolver::embedded()?, ctx)
    }

    /// Name resolved against any resolver with an explicit context.
    pub fn resolve_with<'a>(
        &'a self,
        resolver: &Resolver<'a>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, ResolveError> {
        match self.literal_name() {
            Some(name) => Ok(Cow::Borrowed(name)),
            None => resolver.resolve(&self.alpha3, ctx),
        }
    }

    /// All 249 ISO 3166-1 countries.
    #[inline]
    pub fn all() -> &'static [Country] {
        data::COUNTRIES
    }

    /// Case-insensitive alpha-2 lookup.
    pub fn by_alpha2(code: &str) -> Option<&'static Country> {
        data::BY_ALPHA2.get(code.to_ascii_uppercase().as_str())
    }

    /// Case-insensitive alpha-3 lookup.
    pub fn by_alpha3(code: &str) -> Option<&'static Country> {
        data::BY_ALPHA3.get(code.to_ascii_uppercase().as_str())
    }

    pub fn by_numeric(numeric: u16) -> Option<&'static Country> {
        data::COUNTRIES.iter().find(|c| c.numeric == numeric)
    }
}
