//! Pluggable backends that produce per-locale currency tables.

use crate::error::MonetaResult;
use crate::locale::Locale;
use crate::table::CurrencyTable;

/// A backend that can produce currency tables for some set of locales.
///
/// Implementations only answer for exact locales: `load` returns
/// `Ok(None)` when the backend simply has no resource for the request,
/// reserving errors for resources that exist but cannot be used. Any
/// fallback policy lives in the caller, which walks its own candidate
/// list and asks for each locale in turn.
pub trait BundleSource: Send + Sync {
    /// Lists the locales this source can produce tables for.
    fn locales(&self) -> Vec<Locale>;

    /// Loads and parses the bundle for exactly `locale`.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::MalformedResource` when the resource exists
    /// but does not parse, or an I/O error when reading it fails for any
    /// reason other than absence.
    fn load(&self, locale: &Locale) -> MonetaResult<Option<CurrencyTable>>;
}

/// A source over compiled-in `(locale id, bundle JSON)` pairs.
///
/// Backs the embedded data crate; also handy in tests, where a couple of
/// string literals stand in for a full resource directory.
pub struct StaticBundleSource {
    bundles: &'static [(&'static str, &'static str)],
}

impl StaticBundleSource {
    /// Creates a source over a static bundle listing.
    ///
    /// Entries are matched by exact locale id; payloads are parsed on
    /// demand, not up front.
    #[must_use]
    pub const fn new(bundles: &'static [(&'static str, &'static str)]) -> Self {
        Self { bundles }
    }
}

impl BundleSource for StaticBundleSource {
    fn locales(&self) -> Vec<Locale> {
        self.bundles
            .iter()
            .filter_map(|(id, _)| Locale::parse(id).ok())
            .collect()
    }

    fn load(&self, locale: &Locale) -> MonetaResult<Option<CurrencyTable>> {
        match self
            .bundles
            .iter()
            .find(|(id, _)| *id == locale.as_str())
        {
            Some((_, json)) => CurrencyTable::from_json(locale.clone(), json).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonetaError;

    const BUNDLES: &[(&str, &str)] = &[
        ("en", r#"{"names": {"EUR": ["€", "Euro"]}}"#),
        ("xx", "{ definitely not a bundle"),
    ];

    #[test]
    fn test_load_known_locale() {
        let source = StaticBundleSource::new(BUNDLES);
        let table = source
            .load(&Locale::parse("en").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(table.symbol("EUR").unwrap(), "€");
        assert_eq!(table.locale().as_str(), "en");
    }

    #[test]
    fn test_load_unknown_locale_is_none() {
        let source = StaticBundleSource::new(BUNDLES);
        assert!(source.load(&Locale::parse("de").unwrap()).unwrap().is_none());
    }

    #[test]
    fn test_load_broken_bundle_is_error() {
        let source = StaticBundleSource::new(BUNDLES);
        let err = source.load(&Locale::parse("xx").unwrap()).unwrap_err();
        assert!(matches!(err, MonetaError::MalformedResource { .. }));
    }

    #[test]
    fn test_locales_listing() {
        let source = StaticBundleSource::new(BUNDLES);
        let ids: Vec<String> = source
            .locales()
            .iter()
            .map(|locale| locale.as_str().to_string())
            .collect();
        assert_eq!(ids, ["en", "xx"]);
    }
}
