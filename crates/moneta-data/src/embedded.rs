//! Bundles compiled into this crate.
//!
//! One JSON file per locale, embedded at build time so lookups never
//! touch the filesystem. Coverage is uneven on purpose: `en` carries
//! the full maintained code set, while smaller locales localize only
//! the currencies their speakers commonly meet.

use moneta_core::source::StaticBundleSource;

/// Identifiers of every embedded locale, sorted.
pub const EMBEDDED_LOCALES: &[&str] = &[
    "az", "br", "bs", "bs_Cyrl", "ca", "cs", "cy", "da",
    "de", "ee", "el", "en", "es", "et", "eu", "fi",
    "fr", "fy", "ga", "gd", "gl", "hr", "hu", "in",
    "is", "it", "lb", "lt", "lv", "mo", "nl", "no",
    "om", "pl", "pt", "rm", "sc", "sk", "sl", "sr_Latn",
    "sv", "tr", "vi",
];

/// Bundle JSON keyed by locale id, sorted by id.
static EMBEDDED_BUNDLES: &[(&str, &str)] = &[
    ("az", include_str!("../data/az.json")),
    ("br", include_str!("../data/br.json")),
    ("bs", include_str!("../data/bs.json")),
    ("bs_Cyrl", include_str!("../data/bs_Cyrl.json")),
    ("ca", include_str!("../data/ca.json")),
    ("cs", include_str!("../data/cs.json")),
    ("cy", include_str!("../data/cy.json")),
    ("da", include_str!("../data/da.json")),
    ("de", include_str!("../data/de.json")),
    ("ee", include_str!("../data/ee.json")),
    ("el", include_str!("../data/el.json")),
    ("en", include_str!("../data/en.json")),
    ("es", include_str!("../data/es.json")),
    ("et", include_str!("../data/et.json")),
    ("eu", include_str!("../data/eu.json")),
    ("fi", include_str!("../data/fi.json")),
    ("fr", include_str!("../data/fr.json")),
    ("fy", include_str!("../data/fy.json")),
    ("ga", include_str!("../data/ga.json")),
    ("gd", include_str!("../data/gd.json")),
    ("gl", include_str!("../data/gl.json")),
    ("hr", include_str!("../data/hr.json")),
    ("hu", include_str!("../data/hu.json")),
    ("in", include_str!("../data/in.json")),
    ("is", include_str!("../data/is.json")),
    ("it", include_str!("../data/it.json")),
    ("lb", include_str!("../data/lb.json")),
    ("lt", include_str!("../data/lt.json")),
    ("lv", include_str!("../data/lv.json")),
    ("mo", include_str!("../data/mo.json")),
    ("nl", include_str!("../data/nl.json")),
    ("no", include_str!("../data/no.json")),
    ("om", include_str!("../data/om.json")),
    ("pl", include_str!("../data/pl.json")),
    ("pt", include_str!("../data/pt.json")),
    ("rm", include_str!("../data/rm.json")),
    ("sc", include_str!("../data/sc.json")),
    ("sk", include_str!("../data/sk.json")),
    ("sl", include_str!("../data/sl.json")),
    ("sr_Latn", include_str!("../data/sr_Latn.json")),
    ("sv", include_str!("../data/sv.json")),
    ("tr", include_str!("../data/tr.json")),
    ("vi", include_str!("../data/vi.json")),
];

/// Returns a source over every bundle compiled into this crate.
#[must_use]
pub fn embedded_source() -> StaticBundleSource {
    StaticBundleSource::new(EMBEDDED_BUNDLES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_core::Locale;

    #[test]
    fn test_listing_matches_bundle_table() {
        let ids: Vec<&str> = EMBEDDED_BUNDLES.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, EMBEDDED_LOCALES);
    }

    #[test]
    fn test_ids_are_sorted_unique_and_valid() {
        assert!(EMBEDDED_LOCALES.windows(2).all(|pair| pair[0] < pair[1]));
        for id in EMBEDDED_LOCALES {
            assert!(Locale::parse(id).is_ok(), "embedded id {id:?} does not parse");
        }
    }
}
