// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static locale-code translation tables.
//!
//! Firefox, CLDR, and Transvision disagree on how to spell a handful of
//! locale codes (Firefox ships `es-ES`, CLDR files live under `es`). These
//! tables record the exceptions; every code not listed maps to itself.
//!
//! The tables are compile-time static data, not configuration: they change
//! only when a locale starts or stops shipping under a divergent code, and
//! each change is a one-line edit here.
//!
//! Lookup is O(n) on the entry list, which is fine for the ~20 entries we
//! have — this runs once per locale per aggregation, not in a hot loop.

/// Firefox shipping code → CLDR directory code.
const CLDR_LOCALE_MAP: &[(&str, &str)] = &[
    ("bn-BD", "bn"),
    ("en-US", "en"),
    ("es-ES", "es"),
    ("fy-NL", "fy"),
    ("ga-IE", "ga"),
    ("gu-IN", "gu"),
    ("hi-IN", "hi"),
    ("hy-AM", "hy"),
    ("ja-JP-mac", "ja"),
    ("nb-NO", "nb"),
    ("ne-NP", "ne"),
    ("nn-NO", "nn"),
    ("pa-IN", "pa"),
    ("pt-BR", "pt"),
    ("sv-SE", "sv"),
    ("zh-CN", "zh-Hans"),
    ("zh-TW", "zh-Hant"),
];

/// Firefox shipping code → locale code used in `languageNames.properties`.
///
/// Independently maintained from [`CLDR_LOCALE_MAP`]: Transvision keys the
/// string repository by Gecko locale, so regional variants collapse onto a
/// single base translation (all four `en-*` locales share `en`). Note
/// `ne-NP` → `be`, which carries the historical quirk of the upstream
/// properties file.
const TRANSVISION_LOCALE_MAP: &[(&str, &str)] = &[
    ("bn-BD", "bn"),
    ("bn-IN", "bn"),
    ("en-CA", "en"),
    ("en-GB", "en"),
    ("en-US", "en"),
    ("en-ZA", "en"),
    ("es-AR", "es"),
    ("es-CL", "es"),
    ("es-ES", "es"),
    ("es-MX", "es"),
    ("fy-NL", "fy"),
    ("ga-IE", "ga"),
    ("gu-IN", "gu"),
    ("hi-IN", "hi"),
    ("hy-AM", "hy"),
    ("ja-JP-mac", "ja"),
    ("nb-NO", "nb"),
    ("ne-NP", "be"),
    ("nn-NO", "nn"),
    ("pa-IN", "pa"),
    ("pt-BR", "pt"),
    ("pt-PT", "pt"),
    ("sv-SE", "sv"),
    ("zh-CN", "zh"),
    ("zh-TW", "zh"),
];

/// CLDR directory code for a Firefox shipping locale.
///
/// Identity when the locale has no divergent CLDR spelling.
///
/// # Examples
/// ```
/// assert_eq!(langnames::locales::cldr_code("es-ES"), "es");
/// assert_eq!(langnames::locales::cldr_code("fr"), "fr");
/// ```
pub fn cldr_code(locale: &str) -> &str {
    lookup(CLDR_LOCALE_MAP, locale).unwrap_or(locale)
}

/// `languageNames.properties` code for a Firefox shipping locale.
///
/// Identity when unmapped.
pub fn transvision_code(locale: &str) -> &str {
    lookup(TRANSVISION_LOCALE_MAP, locale).unwrap_or(locale)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in table {
        if k == key {
            return Some(v);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_codes_translate() {
        assert_eq!(cldr_code("es-ES"), "es");
        assert_eq!(cldr_code("zh-CN"), "zh-Hans");
        assert_eq!(cldr_code("zh-TW"), "zh-Hant");
        assert_eq!(cldr_code("ja-JP-mac"), "ja");
    }

    #[test]
    fn unmapped_codes_pass_through() {
        assert_eq!(cldr_code("fr"), "fr");
        assert_eq!(cldr_code("de"), "de");
        assert_eq!(transvision_code("it"), "it");
    }

    #[test]
    fn transvision_diverges_from_cldr_where_expected() {
        // Regional variants collapse for Transvision but not for CLDR
        assert_eq!(transvision_code("en-GB"), "en");
        assert_eq!(cldr_code("en-GB"), "en-GB");
        // The historical properties-file quirk
        assert_eq!(transvision_code("ne-NP"), "be");
        assert_eq!(cldr_code("ne-NP"), "ne");
        // Script-tagged CLDR codes vs plain Transvision codes
        assert_eq!(transvision_code("zh-CN"), "zh");
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for &(k, _) in CLDR_LOCALE_MAP {
            assert!(seen.insert(k), "duplicate CLDR map key '{}'", k);
        }
        seen.clear();
        for &(k, _) in TRANSVISION_LOCALE_MAP {
            assert!(seen.insert(k), "duplicate Transvision map key '{}'", k);
        }
    }
}
