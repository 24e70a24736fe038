//! The locale-keyed table registry and its cache.

use std::sync::{Arc, OnceLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use moneta_core::error::{MonetaError, MonetaResult};
use moneta_core::locale::Locale;
use moneta_core::source::BundleSource;
use moneta_core::table::CurrencyTable;

use crate::embedded::embedded_source;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// A cache of loaded currency tables over some bundle source.
///
/// The registry parses each locale's bundle on first request and then
/// hands out the same shared table to every later caller, on any thread.
/// Entries are never evicted; the backing resources are fixed for the
/// life of the process, so a parsed table can only go stale with them.
///
/// # Example
///
/// ```rust
/// use moneta_core::Locale;
/// use moneta_data::Registry;
///
/// let registry = Registry::global();
/// let table = registry.table(&Locale::parse("de")?)?;
/// assert_eq!(table.name("USD")?, "US-Dollar");
/// # Ok::<(), moneta_core::MonetaError>(())
/// ```
pub struct Registry {
    source: Box<dyn BundleSource>,
    cache: DashMap<Locale, Arc<CurrencyTable>>,
}

impl Registry {
    /// Creates a registry over an arbitrary bundle source.
    pub fn new(source: impl BundleSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: DashMap::new(),
        }
    }

    /// Returns the process-wide registry over the embedded bundles.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| Registry::new(embedded_source()))
    }

    /// Returns the table for exactly `locale`, loading it if needed.
    ///
    /// Concurrent first requests for one locale are serialized on its
    /// cache slot, so the bundle is parsed at most once; everyone gets a
    /// handle to the same table.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::LocaleDataNotFound` when the source has no
    /// bundle for `locale`, or `MonetaError::MalformedResource` when the
    /// bundle exists but does not parse. Failed loads are not cached, so
    /// a later request retries the source.
    pub fn table(&self, locale: &Locale) -> MonetaResult<Arc<CurrencyTable>> {
        if let Some(table) = self.cache.get(locale) {
            return Ok(table.clone());
        }
        match self.cache.entry(locale.clone()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => match self.source.load(locale)? {
                Some(parsed) => {
                    tracing::debug!(
                        locale = %locale,
                        entries = parsed.len(),
                        "loaded currency bundle"
                    );
                    let table = Arc::new(parsed);
                    entry.insert(table.clone());
                    Ok(table)
                }
                None => Err(MonetaError::locale_data_not_found(locale.as_str())),
            },
        }
    }

    /// Tries candidate locales in order and returns the first table found.
    ///
    /// The candidate list is the caller's business, typically
    /// [`Locale::fallback_chain`] or a chain negotiated elsewhere. Only
    /// candidates without data are skipped; a malformed bundle stops the
    /// walk immediately, since silently sliding past broken data would
    /// mask it.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::LocaleDataNotFound` naming the first
    /// candidate when every candidate comes up empty. An empty candidate
    /// list fails the same way, with `(no candidates)` standing in for
    /// the locale.
    pub fn resolve(
        &self,
        candidates: impl IntoIterator<Item = Locale>,
    ) -> MonetaResult<Arc<CurrencyTable>> {
        let mut requested: Option<Locale> = None;
        for locale in candidates {
            if requested.is_none() {
                requested = Some(locale.clone());
            }
            match self.table(&locale) {
                Ok(table) => return Ok(table),
                Err(MonetaError::LocaleDataNotFound { .. }) => {}
                Err(err) => return Err(err),
            }
        }
        let requested = match requested {
            Some(locale) => locale.as_str().to_string(),
            None => "(no candidates)".to_string(),
        };
        Err(MonetaError::locale_data_not_found(requested))
    }

    /// Lists the locales the backing source can produce, sorted.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales = self.source.locales();
        locales.sort();
        locales
    }

    /// Whether the backing source has a bundle for exactly `locale`.
    ///
    /// This consults the source listing only; it neither loads nor
    /// validates the bundle.
    pub fn is_available(&self, locale: &Locale) -> bool {
        self.source.locales().contains(locale)
    }

    /// Number of tables currently cached.
    pub fn cached_tables(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_core::source::StaticBundleSource;

    const BUNDLES: &[(&str, &str)] = &[
        ("en", r#"{"names": {"EUR": ["€", "Euro"], "USD": ["$", "US Dollar"]}}"#),
        ("pt", r#"{"names": {"EUR": ["€", "Euro"], "USD": ["US$", "Dólar americano"]}}"#),
        ("xx", "{ broken"),
    ];

    fn test_registry() -> Registry {
        Registry::new(StaticBundleSource::new(BUNDLES))
    }

    fn locale(id: &str) -> Locale {
        Locale::parse(id).unwrap()
    }

    #[test]
    fn test_table_loads_and_caches() {
        let registry = test_registry();
        assert_eq!(registry.cached_tables(), 0);

        let first = registry.table(&locale("en")).unwrap();
        assert_eq!(first.symbol("USD").unwrap(), "$");
        assert_eq!(registry.cached_tables(), 1);

        // Same Arc comes back, not a re-parse.
        let second = registry.table(&locale("en")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_table_unknown_locale() {
        let registry = test_registry();
        let err = registry.table(&locale("zz")).unwrap_err();
        assert_eq!(
            err,
            MonetaError::LocaleDataNotFound {
                locale: "zz".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_bundle_not_cached() {
        let registry = test_registry();
        for _ in 0..2 {
            let err = registry.table(&locale("xx")).unwrap_err();
            assert!(matches!(err, MonetaError::MalformedResource { .. }));
        }
        assert_eq!(registry.cached_tables(), 0);
    }

    #[test]
    fn test_resolve_walks_candidates() {
        let registry = test_registry();
        let table = registry.resolve(locale("pt_BR").fallback_chain()).unwrap();
        assert_eq!(table.locale().as_str(), "pt");
        assert_eq!(table.symbol("USD").unwrap(), "US$");
    }

    #[test]
    fn test_resolve_prefers_first_hit() {
        let registry = test_registry();
        let table = registry
            .resolve([locale("en"), locale("pt")])
            .unwrap();
        assert_eq!(table.locale().as_str(), "en");
    }

    #[test]
    fn test_resolve_exhausted_names_first_candidate() {
        let registry = test_registry();
        let err = registry
            .resolve(locale("zz_Latn_ZA").fallback_chain())
            .unwrap_err();
        assert_eq!(
            err,
            MonetaError::LocaleDataNotFound {
                locale: "zz_Latn_ZA".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_empty_candidate_list() {
        let registry = test_registry();
        let err = registry.resolve([]).unwrap_err();
        assert_eq!(
            err,
            MonetaError::LocaleDataNotFound {
                locale: "(no candidates)".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_stops_on_malformed() {
        let registry = test_registry();
        let err = registry
            .resolve([locale("xx"), locale("en")])
            .unwrap_err();
        assert!(matches!(err, MonetaError::MalformedResource { .. }));
    }

    #[test]
    fn test_locales_and_availability() {
        let registry = test_registry();
        let ids: Vec<String> = registry
            .locales()
            .iter()
            .map(|locale| locale.as_str().to_string())
            .collect();
        assert_eq!(ids, ["en", "pt", "xx"]);
        assert!(registry.is_available(&locale("en")));
        assert!(!registry.is_available(&locale("en_US")));
    }

    #[test]
    fn test_concurrent_first_access_shares_one_table() {
        let registry = test_registry();
        let tables: Vec<Arc<CurrencyTable>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.table(&locale("en")).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for table in &tables[1..] {
            assert!(Arc::ptr_eq(&tables[0], table));
        }
        assert_eq!(registry.cached_tables(), 1);
    }
}
