//! Locale identifiers for resource lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MonetaError, MonetaResult};

/// A validated locale identifier naming one per-locale resource.
///
/// Identifiers follow the usual Unicode shape: a lowercase language
/// subtag, optionally followed by a titlecase four-letter script subtag
/// and an uppercase region subtag (`en`, `bs_Cyrl`, `pt_BR`, `es_419`).
/// Both `_` and `-` are accepted as separators on input; the canonical
/// form uses `_`, matching the resource file names.
///
/// # Example
///
/// ```rust
/// use moneta_core::Locale;
///
/// let locale = Locale::parse("sr-Latn")?;
/// assert_eq!(locale.as_str(), "sr_Latn");
/// assert_eq!(locale.language(), "sr");
/// assert_eq!(locale.script(), Some("Latn"));
/// # Ok::<(), moneta_core::MonetaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(String);

impl Locale {
    /// Parses and canonicalizes a locale identifier.
    ///
    /// # Errors
    ///
    /// Returns `MonetaError::InvalidLocale` if the identifier does not
    /// consist of a language subtag plus at most a script and a region.
    pub fn parse(s: &str) -> MonetaResult<Self> {
        let subtags: Vec<&str> = s.split(['_', '-']).collect();
        if subtags.len() > 3 {
            return Err(MonetaError::invalid_locale(s, "too many subtags"));
        }

        let language = subtags[0];
        if !is_language(language) {
            return Err(MonetaError::invalid_locale(
                s,
                "language subtag must be 2-3 lowercase ASCII letters",
            ));
        }

        let mut seen_script = false;
        let mut seen_region = false;
        for subtag in &subtags[1..] {
            if is_script(subtag) {
                if seen_script || seen_region {
                    return Err(MonetaError::invalid_locale(s, "script subtag out of place"));
                }
                seen_script = true;
            } else if is_region(subtag) {
                if seen_region {
                    return Err(MonetaError::invalid_locale(s, "duplicate region subtag"));
                }
                seen_region = true;
            } else {
                return Err(MonetaError::invalid_locale(
                    s,
                    format!("unrecognized subtag {subtag:?}"),
                ));
            }
        }

        Ok(Locale(subtags.join("_")))
    }

    /// Returns the canonical identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        match self.0.split_once('_') {
            Some((language, _)) => language,
            None => &self.0,
        }
    }

    /// Returns the script subtag, if present.
    #[must_use]
    pub fn script(&self) -> Option<&str> {
        self.0.split('_').find(|subtag| is_script(subtag))
    }

    /// Returns the region subtag, if present.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.0.split('_').skip(1).find(|subtag| is_region(subtag))
    }

    /// Returns the next-more-general locale, dropping the last subtag.
    ///
    /// A bare language subtag has no parent.
    ///
    /// ```rust
    /// use moneta_core::Locale;
    ///
    /// let locale = Locale::parse("zh_Hans_CN")?;
    /// assert_eq!(locale.parent(), Some(Locale::parse("zh_Hans")?));
    /// assert_eq!(Locale::parse("zh")?.parent(), None);
    /// # Ok::<(), moneta_core::MonetaError>(())
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Locale> {
        self.0
            .rsplit_once('_')
            .map(|(head, _)| Locale(head.to_string()))
    }

    /// Returns the truncation chain from this locale to its bare language.
    ///
    /// The chain starts with the locale itself and drops one subtag per
    /// step (`zh_Hans_CN`, `zh_Hans`, `zh`). This is plain syntactic
    /// truncation; callers wanting CLDR-style aliasing or language
    /// matching must build their own candidate list and feed it to a
    /// resolver.
    pub fn fallback_chain(&self) -> FallbackChain {
        FallbackChain {
            next: Some(self.clone()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = MonetaError;

    fn from_str(s: &str) -> MonetaResult<Self> {
        Self::parse(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Locale::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Iterator over a locale's truncation chain, most specific first.
///
/// Produced by [`Locale::fallback_chain`].
#[derive(Debug, Clone)]
pub struct FallbackChain {
    next: Option<Locale>,
}

impl Iterator for FallbackChain {
    type Item = Locale;

    fn next(&mut self) -> Option<Locale> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

fn is_language(subtag: &str) -> bool {
    (2..=3).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_script(subtag: &str) -> bool {
    let bytes = subtag.as_bytes();
    bytes.len() == 4
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().all(|b| b.is_ascii_lowercase())
}

fn is_region(subtag: &str) -> bool {
    let bytes = subtag.as_bytes();
    match bytes.len() {
        2 => bytes.iter().all(|b| b.is_ascii_uppercase()),
        3 => bytes.iter().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}
