//! # Moneta Data
//!
//! Embedded per-locale currency bundles plus the process-wide registry
//! that loads, caches, and shares them.
//!
//! The crate-level functions cover the common path: ask for a locale's
//! table (or walk a fallback chain) and read symbols and display names
//! off the result. Everything routes through one lazily-initialized
//! [`Registry`] over the compiled-in bundles; bring your own
//! `BundleSource` and a private `Registry` when the data should come
//! from somewhere else.
//!
//! ## Example
//!
//! ```rust
//! use moneta_core::Locale;
//!
//! let en = Locale::parse("en")?;
//! let table = moneta_data::table(&en)?;
//! assert_eq!(table.symbol("EUR")?, "€");
//! assert_eq!(table.name("BSD")?, "Bahamian Dollar");
//!
//! // Unlocalized codes still print something sensible.
//! assert_eq!(table.symbol_or_code("XXX"), "XXX");
//! # Ok::<(), moneta_core::MonetaError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embedded;
pub mod registry;

use std::sync::Arc;

use moneta_core::error::MonetaResult;
use moneta_core::locale::Locale;
use moneta_core::table::{CurrencyCode, CurrencyTable};

pub use embedded::{embedded_source, EMBEDDED_LOCALES};
pub use registry::Registry;

/// Returns the table for exactly `locale` from the embedded bundles.
///
/// # Errors
///
/// Returns `MonetaError::LocaleDataNotFound` when no bundle is embedded
/// for `locale`. No fallback is attempted; see [`resolve`].
pub fn table(locale: &Locale) -> MonetaResult<Arc<CurrencyTable>> {
    Registry::global().table(locale)
}

/// Tries candidate locales in order against the embedded bundles.
///
/// ```rust
/// use moneta_core::Locale;
///
/// // pt_BR has no bundle of its own; the chain lands on pt.
/// let table = moneta_data::resolve(Locale::parse("pt_BR")?.fallback_chain())?;
/// assert_eq!(table.locale().as_str(), "pt");
/// # Ok::<(), moneta_core::MonetaError>(())
/// ```
///
/// # Errors
///
/// Returns `MonetaError::LocaleDataNotFound` naming the first candidate
/// when none of them has a bundle, or `(no candidates)` for an empty
/// list.
pub fn resolve(candidates: impl IntoIterator<Item = Locale>) -> MonetaResult<Arc<CurrencyTable>> {
    Registry::global().resolve(candidates)
}

/// Lists every locale with an embedded bundle, sorted.
#[must_use]
pub fn available_locales() -> Vec<Locale> {
    Registry::global().locales()
}

/// Whether an embedded bundle exists for exactly `locale`.
#[must_use]
pub fn is_available(locale: &Locale) -> bool {
    Registry::global().is_available(locale)
}

/// Returns the full maintained code set, sorted.
///
/// This reads the `en` bundle, which by convention localizes every code
/// the data set knows; other locales may cover fewer.
#[must_use]
pub fn currency_codes() -> Vec<CurrencyCode> {
    let en = Locale::parse("en").expect("en parses");
    let table = Registry::global()
        .table(&en)
        .expect("the embedded en bundle parses");
    table.codes().collect()
}
