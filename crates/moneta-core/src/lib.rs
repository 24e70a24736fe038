//! # Moneta Core
//!
//! Core types, errors, and source abstractions for localized ISO 4217
//! currency metadata.
//!
//! This crate provides the building blocks the rest of Moneta is built
//! from:
//!
//! - **Types**: `Locale`, `CurrencyCode`, `CurrencyRecord`, `CurrencyTable`
//! - **Sources**: the `BundleSource` trait behind every bundle backend
//! - **Metadata**: locale-invariant facts (numeric codes, minor units)
//! - **Errors**: one structured error type across all Moneta crates
//!
//! It carries no bundled data of its own; the `moneta-data` crate embeds
//! the per-locale resources and the process-wide registry.
//!
//! ## Example
//!
//! ```rust
//! use moneta_core::prelude::*;
//!
//! let table = CurrencyTable::from_records(
//!     Locale::parse("en")?,
//!     [
//!         CurrencyRecord::new("EUR", "€", "Euro")?,
//!         CurrencyRecord::new("USD", "$", "US Dollar")?,
//!     ],
//! )?;
//! assert_eq!(table.lookup("EUR")?.name(), "Euro");
//! assert_eq!(table.symbol_or_code("ZWL"), "ZWL");
//! # Ok::<(), MonetaError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod locale;
pub mod meta;
pub mod source;
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MonetaError, MonetaResult};
    pub use crate::locale::Locale;
    pub use crate::source::{BundleSource, StaticBundleSource};
    pub use crate::table::{CurrencyCode, CurrencyRecord, CurrencyTable};
}

// Re-export commonly used types at crate root
pub use error::{MonetaError, MonetaResult};
pub use locale::Locale;
pub use source::BundleSource;
pub use table::{CurrencyCode, CurrencyRecord, CurrencyTable};
