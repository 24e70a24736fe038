//! # Moneta Ext File
//!
//! Filesystem-backed bundle source for Moneta currency tables.
//!
//! Bundles are plain `<locale>.json` files in one directory, in the same
//! shape the embedded data uses, so a deployment can patch or extend the
//! compiled-in set without rebuilding: point a `Registry` at a
//! [`DirectorySource`] and the files take over.
//!
//! ## Example
//!
//! ```rust,no_run
//! use moneta_core::Locale;
//! use moneta_data::Registry;
//! use moneta_ext_file::DirectorySource;
//!
//! let registry = Registry::new(DirectorySource::new("/etc/app/currencies"));
//! let table = registry.table(&Locale::parse("de")?)?;
//! # Ok::<(), moneta_core::MonetaError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use moneta_core::error::{MonetaError, MonetaResult};
use moneta_core::locale::Locale;
use moneta_core::source::BundleSource;
use moneta_core::table::CurrencyTable;

/// A bundle source reading `<locale>.json` files from one directory.
///
/// Nothing is scanned or parsed up front; every locale is read on
/// demand, so construction cannot fail and a missing directory simply
/// behaves like an empty one. Files whose stem is not a valid locale id
/// and files without a `.json` extension are ignored when listing.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source over `root`.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory this source reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bundle_path(&self, locale: &Locale) -> PathBuf {
        self.root.join(format!("{}.json", locale.as_str()))
    }
}

impl BundleSource for DirectorySource {
    fn locales(&self) -> Vec<Locale> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut locales = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let stem = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem,
                None => continue,
            };
            if let Ok(locale) = Locale::parse(stem) {
                locales.push(locale);
            }
        }
        locales.sort();
        locales
    }

    fn load(&self, locale: &Locale) -> MonetaResult<Option<CurrencyTable>> {
        let path = self.bundle_path(locale);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(MonetaError::io(path.display().to_string(), err.to_string()));
            }
        };
        tracing::debug!(locale = %locale, path = %path.display(), "read currency bundle file");
        CurrencyTable::from_json(locale.clone(), &json).map(Some)
    }
}
