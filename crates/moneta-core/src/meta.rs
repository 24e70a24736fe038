//! Locale-invariant ISO 4217 metadata.
//!
//! Symbols and display names vary by locale and live in the per-locale
//! tables; the facts here do not. Numeric code equivalents come from the
//! ISO 4217 maintenance list (historical codes included, which is why a
//! numeric value can map back to several alphabetic codes), and minor
//! unit counts cover the codes that deviate from the two-digit default.

/// Alphabetic-to-numeric assignments, sorted by alphabetic code.
const NUMERIC_CODES: &[(&str, u16)] = &[
    ("ADP", 20), ("AED", 784), ("AFA", 4), ("AFN", 971),
    ("ALK", 8), ("ALL", 8), ("AMD", 51), ("ANG", 532),
    ("AOA", 973), ("AOK", 24), ("AON", 24), ("AOR", 982),
    ("ARA", 32), ("ARP", 32), ("ARS", 32), ("ATS", 40),
    ("AUD", 36), ("AWG", 533), ("AZM", 31), ("AZN", 944),
    ("BAD", 70), ("BAM", 977), ("BBD", 52), ("BDT", 50),
    ("BEC", 993), ("BEF", 56), ("BEL", 992), ("BGL", 100),
    ("BGN", 975), ("BHD", 48), ("BIF", 108), ("BMD", 60),
    ("BND", 96), ("BOB", 68), ("BOP", 68), ("BOV", 984),
    ("BRB", 76), ("BRC", 76), ("BRE", 76), ("BRL", 986),
    ("BRN", 76), ("BRR", 987), ("BSD", 44), ("BTN", 64),
    ("BUK", 104), ("BWP", 72), ("BYB", 112), ("BYN", 933),
    ("BYR", 974), ("BZD", 84), ("CAD", 124), ("CDF", 976),
    ("CHE", 947), ("CHF", 756), ("CHW", 948), ("CLF", 990),
    ("CLP", 152), ("CNY", 156), ("COP", 170), ("COU", 970),
    ("CRC", 188), ("CSD", 891), ("CSK", 200), ("CUC", 931),
    ("CUP", 192), ("CVE", 132), ("CYP", 196), ("CZK", 203),
    ("DDM", 278), ("DEM", 276), ("DJF", 262), ("DKK", 208),
    ("DOP", 214), ("DZD", 12), ("ECS", 218), ("ECV", 983),
    ("EEK", 233), ("EGP", 818), ("ERN", 232), ("ESA", 996),
    ("ESB", 995), ("ESP", 724), ("ETB", 230), ("EUR", 978),
    ("FIM", 246), ("FJD", 242), ("FKP", 238), ("FRF", 250),
    ("GBP", 826), ("GEK", 268), ("GEL", 981), ("GHC", 288),
    ("GHS", 936), ("GIP", 292), ("GMD", 270), ("GNF", 324),
    ("GNS", 324), ("GQE", 226), ("GRD", 300), ("GTQ", 320),
    ("GWE", 624), ("GWP", 624), ("GYD", 328), ("HKD", 344),
    ("HNL", 340), ("HRD", 191), ("HRK", 191), ("HTG", 332),
    ("HUF", 348), ("IDR", 360), ("IEP", 372), ("ILP", 376),
    ("ILR", 376), ("ILS", 376), ("INR", 356), ("IQD", 368),
    ("IRR", 364), ("ISJ", 352), ("ISK", 352), ("ITL", 380),
    ("JMD", 388), ("JOD", 400), ("JPY", 392), ("KES", 404),
    ("KGS", 417), ("KHR", 116), ("KMF", 174), ("KPW", 408),
    ("KRW", 410), ("KWD", 414), ("KYD", 136), ("KZT", 398),
    ("LAK", 418), ("LBP", 422), ("LKR", 144), ("LRD", 430),
    ("LSL", 426), ("LTL", 440), ("LTT", 440), ("LUC", 989),
    ("LUF", 442), ("LUL", 988), ("LVL", 428), ("LVR", 428),
    ("LYD", 434), ("MAD", 504), ("MDL", 498), ("MGA", 969),
    ("MGF", 450), ("MKD", 807), ("MLF", 466), ("MMK", 104),
    ("MNT", 496), ("MOP", 446), ("MRO", 478), ("MRU", 929),
    ("MTL", 470), ("MTP", 470), ("MUR", 480), ("MVR", 462),
    ("MWK", 454), ("MXN", 484), ("MXP", 484), ("MXV", 979),
    ("MYR", 458), ("MZE", 508), ("MZM", 508), ("MZN", 943),
    ("NAD", 516), ("NGN", 566), ("NIC", 558), ("NIO", 558),
    ("NLG", 528), ("NOK", 578), ("NPR", 524), ("NZD", 554),
    ("OMR", 512), ("PAB", 590), ("PEI", 604), ("PEN", 604),
    ("PES", 604), ("PGK", 598), ("PHP", 608), ("PKR", 586),
    ("PLN", 985), ("PLZ", 616), ("PTE", 620), ("PYG", 600),
    ("QAR", 634), ("RHD", 716), ("ROL", 642), ("RON", 946),
    ("RSD", 941), ("RUB", 643), ("RUR", 810), ("RWF", 646),
    ("SAR", 682), ("SBD", 90), ("SCR", 690), ("SDD", 736),
    ("SDG", 938), ("SDP", 736), ("SEK", 752), ("SGD", 702),
    ("SHP", 654), ("SIT", 705), ("SKK", 703), ("SLL", 694),
    ("SOS", 706), ("SRD", 968), ("SRG", 740), ("SSP", 728),
    ("STD", 678), ("STN", 930), ("SUR", 810), ("SVC", 222),
    ("SYP", 760), ("SZL", 748), ("THB", 764), ("TJR", 762),
    ("TJS", 972), ("TMM", 795), ("TMT", 934), ("TND", 788),
    ("TOP", 776), ("TPE", 626), ("TRL", 792), ("TRY", 949),
    ("TTD", 780), ("TWD", 901), ("TZS", 834), ("UAH", 980),
    ("UAK", 804), ("UGS", 800), ("UGX", 800), ("USD", 840),
    ("USN", 997), ("USS", 998), ("UYI", 940), ("UYP", 858),
    ("UYU", 858), ("UYW", 927), ("UZS", 860), ("VEB", 862),
    ("VEF", 937), ("VES", 928), ("VND", 704), ("VUV", 548),
    ("WST", 882), ("XAF", 950), ("XCD", 951), ("XEU", 954),
    ("XOF", 952), ("XPF", 953), ("YDD", 720), ("YER", 886),
    ("YUD", 890), ("YUM", 891), ("YUN", 890), ("ZAL", 991),
    ("ZAR", 710), ("ZMK", 894), ("ZMW", 967), ("ZRN", 180),
    ("ZRZ", 180), ("ZWD", 716), ("ZWL", 932), ("ZWR", 935),
];

/// Codes whose minor unit count differs from the default of two digits,
/// sorted by code.
const FRACTION_DIGITS: &[(&str, u32)] = &[
    ("ADP", 0),
    ("BHD", 3),
    ("BIF", 0),
    ("BYR", 0),
    ("CLF", 4),
    ("CLP", 0),
    ("DJF", 0),
    ("ESP", 0),
    ("GNF", 0),
    ("IQD", 3),
    ("ISK", 0),
    ("ITL", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KMF", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("LUF", 0),
    ("LYD", 3),
    ("MGF", 0),
    ("OMR", 3),
    ("PYG", 0),
    ("ROL", 0),
    ("RWF", 0),
    ("TND", 3),
    ("TRL", 0),
    ("UGX", 0),
    ("UYI", 0),
    ("UYW", 4),
    ("VND", 0),
    ("VUV", 0),
    ("XAF", 0),
    ("XOF", 0),
    ("XPF", 0),
];

/// Returns the ISO numeric equivalent of an alphabetic code, if one is
/// assigned.
///
/// ```rust
/// assert_eq!(moneta_core::meta::numeric_code("EUR"), Some(978));
/// assert_eq!(moneta_core::meta::numeric_code("XXY"), None);
/// ```
#[must_use]
pub fn numeric_code(code: &str) -> Option<u16> {
    NUMERIC_CODES
        .binary_search_by_key(&code, |(alpha, _)| *alpha)
        .ok()
        .map(|index| NUMERIC_CODES[index].1)
}

/// Returns every alphabetic code assigned to a numeric equivalent.
///
/// Historical codes share their numeric value with their successors, so
/// more than one code can come back (32 covers `ARA`, `ARP`, and `ARS`).
/// The result is sorted; it is empty for unassigned values.
#[must_use]
pub fn for_numeric_code(numeric: u16) -> Vec<&'static str> {
    NUMERIC_CODES
        .iter()
        .filter(|(_, value)| *value == numeric)
        .map(|(alpha, _)| *alpha)
        .collect()
}

/// Returns the standard number of minor unit digits for a code.
///
/// Codes without an exception entry get the ISO default of two.
#[must_use]
pub fn fraction_digits(code: &str) -> u32 {
    FRACTION_DIGITS
        .binary_search_by_key(&code, |(alpha, _)| *alpha)
        .map_or(2, |index| FRACTION_DIGITS[index].1)
}
