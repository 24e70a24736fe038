//! Per-locale currency tables and the records they hold.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::{self, FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MonetaError, MonetaResult};
use crate::locale::Locale;

/// A three-letter uppercase ISO 4217 alphabetic code.
///
/// Codes are stored inline as three ASCII bytes, so the type is `Copy`
/// and costs nothing to pass around. It borrows as `str`, with ordering
/// and hashing that agree with the string form, so maps keyed by
/// `CurrencyCode` can be queried with plain string slices.
///
/// # Example
///
/// ```rust
/// use moneta_core::CurrencyCode;
///
/// let code = CurrencyCode::parse("EUR")?;
/// assert_eq!(code.as_str(), "EUR");
/// assert!(CurrencyCode::parse("eur").is_err());
/// # Ok::<(), moneta_core::MonetaError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Parses a code, requiring exactly three uppercase ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::InvalidCurrencyCode` for anything else,
    /// including lowercase or mixed-case input.
    pub fn parse(code: &str) -> MonetaResult<Self> {
        match code.as_bytes() {
            [a, b, c] if code.bytes().all(|byte| byte.is_ascii_uppercase()) => {
                Ok(Self([*a, *b, *c]))
            }
            _ => Err(MonetaError::invalid_currency_code(code)),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.0).expect("code bytes are validated ASCII")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

// Lookups through Borrow<str> require the owned and borrowed forms to
// hash alike, so hash the string form, not the byte array.
impl Hash for CurrencyCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for CurrencyCode {
    type Err = MonetaError;

    fn from_str(s: &str) -> MonetaResult<Self> {
        Self::parse(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CurrencyCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One currency's display metadata in a particular locale.
///
/// Every record in circulation satisfies the field invariants: both the
/// constructor and deserialization validate, so a symbol or name is
/// never empty and a code is never malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyRecord {
    code: CurrencyCode,
    symbol: String,
    name: String,
}

impl<'de> Deserialize<'de> for CurrencyRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            code: String,
            symbol: String,
            name: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        CurrencyRecord::new(&raw.code, raw.symbol, raw.name).map_err(serde::de::Error::custom)
    }
}

impl CurrencyRecord {
    /// Builds a record, validating the code and both display fields.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::InvalidCurrencyCode` for a malformed code
    /// and `MonetaError::InvalidRecord` if either display field is empty.
    pub fn new(
        code: &str,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> MonetaResult<Self> {
        let code = CurrencyCode::parse(code)?;
        let symbol = symbol.into();
        let name = name.into();
        if symbol.is_empty() {
            return Err(MonetaError::invalid_record(code.as_str(), "empty symbol"));
        }
        if name.is_empty() {
            return Err(MonetaError::invalid_record(
                code.as_str(),
                "empty display name",
            ));
        }
        Ok(Self { code, symbol, name })
    }

    /// Returns the ISO 4217 alphabetic code.
    #[must_use]
    pub fn code(&self) -> CurrencyCode {
        self.code
    }

    /// Returns the localized symbol.
    ///
    /// Locales without a dedicated sign repeat the code here, so this is
    /// always non-empty and always printable.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the localized display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the locale defines a symbol distinct from the bare code.
    #[must_use]
    pub fn has_localized_symbol(&self) -> bool {
        self.symbol != self.code.as_str()
    }
}

/// On-disk shape of a bundle: `{"names": {"EUR": ["€", "Euro"], ...}}`.
#[derive(Serialize, Deserialize)]
struct RawBundle {
    names: BTreeMap<String, (String, String)>,
}

/// An immutable per-locale mapping from currency code to display metadata.
///
/// A table answers lookups for exactly one locale; it performs no
/// fallback of its own. Keys are unique and iteration is in code order.
///
/// # Example
///
/// ```rust
/// use moneta_core::{CurrencyRecord, CurrencyTable, Locale};
///
/// let table = CurrencyTable::from_records(
///     Locale::parse("en")?,
///     [CurrencyRecord::new("EUR", "€", "Euro")?],
/// )?;
/// assert_eq!(table.symbol("EUR")?, "€");
/// assert!(table.lookup("XXX").is_err());
/// # Ok::<(), moneta_core::MonetaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    locale: Locale,
    entries: BTreeMap<CurrencyCode, CurrencyRecord>,
}

impl CurrencyTable {
    /// Builds a table from validated records.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::MalformedResource` if two records carry the
    /// same code.
    pub fn from_records(
        locale: Locale,
        records: impl IntoIterator<Item = CurrencyRecord>,
    ) -> MonetaResult<Self> {
        let mut entries = BTreeMap::new();
        for record in records {
            let code = record.code();
            if entries.insert(code, record).is_some() {
                return Err(MonetaError::malformed_resource(
                    locale.as_str(),
                    format!("duplicate entry for {code}"),
                ));
            }
        }
        Ok(Self { locale, entries })
    }

    /// Parses a table from bundle JSON.
    ///
    /// The expected shape is a `names` object mapping each code to a
    /// two-element `[symbol, display name]` array. Any deviation is
    /// reported against the locale rather than silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::MalformedResource` describing the first
    /// problem found: unparseable JSON, a bad code, or an empty field.
    pub fn from_json(locale: Locale, json: &str) -> MonetaResult<Self> {
        let raw: RawBundle = serde_json::from_str(json)
            .map_err(|e| MonetaError::malformed_resource(locale.as_str(), e.to_string()))?;
        let mut records = Vec::with_capacity(raw.names.len());
        for (code, (symbol, name)) in raw.names {
            let record = CurrencyRecord::new(&code, symbol, name)
                .map_err(|e| MonetaError::malformed_resource(locale.as_str(), e.to_string()))?;
            records.push(record);
        }
        Self::from_records(locale, records)
    }

    /// Serializes the table back to bundle JSON.
    ///
    /// The output round-trips through [`CurrencyTable::from_json`] to an
    /// equal table.
    #[must_use]
    pub fn to_json(&self) -> String {
        let raw = RawBundle {
            names: self
                .entries
                .values()
                .map(|record| {
                    (
                        record.code().as_str().to_string(),
                        (record.symbol().to_string(), record.name().to_string()),
                    )
                })
                .collect(),
        };
        // String-keyed maps of strings cannot fail to serialize.
        serde_json::to_string_pretty(&raw).unwrap_or_default()
    }

    /// Returns the locale this table localizes for.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Looks up a record by code, exact match only.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::CurrencyNotFound` naming both the code and
    /// this table's locale when the code has no entry here.
    pub fn lookup(&self, code: &str) -> MonetaResult<&CurrencyRecord> {
        self.entries
            .get(code)
            .ok_or_else(|| MonetaError::currency_not_found(code, self.locale.as_str()))
    }

    /// Looks up a record by code, returning `None` when absent.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CurrencyRecord> {
        self.entries.get(code)
    }

    /// Whether the table has an entry for `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Returns the localized display name for `code`.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::CurrencyNotFound` when the code has no entry.
    pub fn name(&self, code: &str) -> MonetaResult<&str> {
        self.lookup(code).map(CurrencyRecord::name)
    }

    /// Returns the localized symbol for `code`.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::CurrencyNotFound` when the code has no entry.
    pub fn symbol(&self, code: &str) -> MonetaResult<&str> {
        self.lookup(code).map(CurrencyRecord::symbol)
    }

    /// Returns the symbol for `code`, or the code itself when absent.
    ///
    /// This is the display-friendly variant of [`CurrencyTable::symbol`]
    /// for callers that never want an error in a formatting path.
    #[must_use]
    pub fn symbol_or_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).map_or(code, CurrencyRecord::symbol)
    }

    /// Iterates the codes in this table in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = CurrencyCode> + '_ {
        self.entries.keys().copied()
    }

    /// Iterates the records in this table in code order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyRecord> {
        self.entries.values()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> CurrencyTable {
        CurrencyTable::from_records(
            Locale::parse("en").unwrap(),
            [
                CurrencyRecord::new("EUR", "€", "Euro").unwrap(),
                CurrencyRecord::new("USD", "$", "US Dollar").unwrap(),
                CurrencyRecord::new("BSD", "BSD", "Bahamian Dollar").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_code_parse_accepts_uppercase_only() {
        assert_eq!(CurrencyCode::parse("EUR").unwrap().as_str(), "EUR");
        for bad in ["", "EU", "EURO", "eur", "Eur", "EU1", "€UR"] {
            assert!(CurrencyCode::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_code_orders_like_str() {
        let mut codes = vec![
            CurrencyCode::parse("USD").unwrap(),
            CurrencyCode::parse("AED").unwrap(),
            CurrencyCode::parse("EUR").unwrap(),
        ];
        codes.sort();
        let ordered: Vec<&str> = codes.iter().map(CurrencyCode::as_str).collect();
        assert_eq!(ordered, ["AED", "EUR", "USD"]);
    }

    #[test]
    fn test_code_hashes_like_str() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(CurrencyCode::parse("USD").unwrap(), 840u16);
        map.insert(CurrencyCode::parse("EUR").unwrap(), 978u16);

        // Keys must be reachable through their borrowed str form.
        assert_eq!(map.get("USD"), Some(&840));
        assert_eq!(map.get("EUR"), Some(&978));
        assert_eq!(map.get("ZZZ"), None);
    }

    #[test]
    fn test_record_validation() {
        assert!(CurrencyRecord::new("usd", "$", "US Dollar").is_err());
        assert!(CurrencyRecord::new("USD", "", "US Dollar").is_err());
        assert!(CurrencyRecord::new("USD", "$", "").is_err());
    }

    #[test]
    fn test_has_localized_symbol() {
        let euro = CurrencyRecord::new("EUR", "€", "Euro").unwrap();
        assert!(euro.has_localized_symbol());
        let bsd = CurrencyRecord::new("BSD", "BSD", "Bahamian Dollar").unwrap();
        assert!(!bsd.has_localized_symbol());
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let table = sample_table();
        let record = table.lookup("EUR").unwrap();
        assert_eq!(record.symbol(), "€");
        assert_eq!(record.name(), "Euro");

        let err = table.lookup("XYZ").unwrap_err();
        assert_eq!(
            err,
            MonetaError::CurrencyNotFound {
                code: "XYZ".to_string(),
                locale: "en".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = sample_table();
        assert!(table.lookup("eur").is_err());
        assert!(!table.contains("Usd"));
    }

    #[test]
    fn test_symbol_or_code_falls_back_to_input() {
        let table = sample_table();
        assert_eq!(table.symbol_or_code("USD"), "$");
        assert_eq!(table.symbol_or_code("ZZZ"), "ZZZ");
    }

    #[test]
    fn test_codes_are_sorted_and_unique() {
        let table = sample_table();
        let codes: Vec<String> = table.codes().map(|code| code.to_string()).collect();
        assert_eq!(codes, ["BSD", "EUR", "USD"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_duplicate_records_rejected() {
        let result = CurrencyTable::from_records(
            Locale::parse("en").unwrap(),
            [
                CurrencyRecord::new("EUR", "€", "Euro").unwrap(),
                CurrencyRecord::new("EUR", "€", "Euro again").unwrap(),
            ],
        );
        assert!(matches!(
            result,
            Err(MonetaError::MalformedResource { .. })
        ));
    }

    #[test]
    fn test_from_json_well_formed() {
        let json = r#"{
            "names": {
                "EUR": ["€", "Euro"],
                "JPY": ["¥", "Japanese Yen"]
            }
        }"#;
        let table = CurrencyTable::from_json(Locale::parse("en").unwrap(), json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.name("JPY").unwrap(), "Japanese Yen");
    }

    #[test]
    fn test_from_json_malformed_inputs() {
        let locale = Locale::parse("xx").unwrap();
        let cases = [
            "not json at all",
            r#"{"entries": {}}"#,
            r#"{"names": {"EUR": ["€"]}}"#,
            r#"{"names": {"EUR": ["€", "Euro", "extra"]}}"#,
            r#"{"names": {"eur": ["€", "Euro"]}}"#,
            r#"{"names": {"EUR": ["", "Euro"]}}"#,
            r#"{"names": ["EUR"]}"#,
        ];
        for json in cases {
            let err = CurrencyTable::from_json(locale.clone(), json).unwrap_err();
            assert!(
                matches!(err, MonetaError::MalformedResource { ref locale, .. } if locale == "xx"),
                "wrong error for {json}: {err}"
            );
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let table = sample_table();
        let json = table.to_json();
        let back = CurrencyTable::from_json(table.locale().clone(), &json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_record_serde_revalidates() {
        let record = CurrencyRecord::new("EUR", "€", "Euro").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: CurrencyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        let invalid = r#"{"code": "EUR", "symbol": "", "name": "Euro"}"#;
        assert!(serde_json::from_str::<CurrencyRecord>(invalid).is_err());
    }

    #[test]
    fn test_empty_table_lookups() {
        let table =
            CurrencyTable::from_records(Locale::parse("xx").unwrap(), []).unwrap();
        assert!(table.is_empty());
        assert!(table.lookup("USD").is_err());
        assert_eq!(table.symbol_or_code("USD"), "USD");
    }
}
