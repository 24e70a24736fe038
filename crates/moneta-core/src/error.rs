//! Error types for the Moneta library.
//!
//! This module defines the error types used throughout Moneta,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Moneta operations.
pub type MonetaResult<T> = Result<T, MonetaError>;

/// The main error type for Moneta operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonetaError {
    /// No currency resource exists for the requested locale.
    #[error("No currency data for locale: {locale}")]
    LocaleDataNotFound {
        /// Identifier of the locale that was requested.
        locale: String,
    },

    /// The locale's table carries no entry for the requested code.
    ///
    /// This says nothing about the code's validity in general, only that
    /// the consulted locale does not localize it.
    #[error("Currency not found: {code} (locale: {locale})")]
    CurrencyNotFound {
        /// The requested ISO 4217 alphabetic code.
        code: String,
        /// Identifier of the locale whose table was consulted.
        locale: String,
    },

    /// A backing resource exists but could not be parsed into a table.
    #[error("Malformed currency resource for locale {locale}: {reason}")]
    MalformedResource {
        /// Identifier of the locale whose resource is broken.
        locale: String,
        /// Description of what is wrong with the resource.
        reason: String,
    },

    /// A locale identifier failed validation.
    #[error("Invalid locale {value:?}: {reason}")]
    InvalidLocale {
        /// The rejected identifier.
        value: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// A currency code is not three uppercase ASCII letters.
    #[error("Invalid currency code: {value:?}")]
    InvalidCurrencyCode {
        /// The rejected code.
        value: String,
    },

    /// A currency record failed validation.
    #[error("Invalid record for {code}: {reason}")]
    InvalidRecord {
        /// Code of the record being built.
        code: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Reading a resource from the filesystem failed.
    #[error("I/O error reading {path}: {reason}")]
    Io {
        /// Path of the resource that could not be read.
        path: String,
        /// Description of the underlying failure.
        reason: String,
    },
}

impl MonetaError {
    /// Creates a locale-data-not-found error.
    #[must_use]
    pub fn locale_data_not_found(locale: impl Into<String>) -> Self {
        Self::LocaleDataNotFound {
            locale: locale.into(),
        }
    }

    /// Creates a currency-not-found error.
    #[must_use]
    pub fn currency_not_found(code: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::CurrencyNotFound {
            code: code.into(),
            locale: locale.into(),
        }
    }

    /// Creates a malformed-resource error.
    #[must_use]
    pub fn malformed_resource(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResource {
            locale: locale.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-locale error.
    #[must_use]
    pub fn invalid_locale(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocale {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-currency-code error.
    #[must_use]
    pub fn invalid_currency_code(value: impl Into<String>) -> Self {
        Self::InvalidCurrencyCode {
            value: value.into(),
        }
    }

    /// Creates an invalid-record error.
    #[must_use]
    pub fn invalid_record(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            code: code.into(),
            reason: reason.into(),
        }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
