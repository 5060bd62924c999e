// SPDX-License-Identifier: PMPL-1.0-or-later

//! Best-effort merge of shipping locales with CLDR and Transvision data.
//!
//! Each locale is processed independently: a failure in one source logs a
//! line and leaves the affected field at its placeholder, never aborting
//! the run. Only writing the final document can fail hard.

use crate::cldr::{self, CldrCorpus};
use crate::fetch::LanguageNameSource;
use crate::locales;
use crate::types::{LanguageCollection, LocaleRecord};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Builds one [`LocaleRecord`] per shipping locale.
///
/// Iterates the shipping list in the order given (the fetcher sorts it) and
/// inserts into a sorted map, so every locale yields exactly one record and
/// duplicates collapse.
pub fn build_collection(
    shipping_locales: &[String],
    corpus: &CldrCorpus,
    names: &dyn LanguageNameSource,
) -> LanguageCollection {
    let mut languages = LanguageCollection::new();

    for locale in shipping_locales {
        let cldr_code = locales::cldr_code(locale);
        let mut record = LocaleRecord::default();

        match names.lookup(locale) {
            Ok(Some(name)) => record.mozilla_name = name,
            Ok(None) => {}
            Err(err) => {
                println!(
                    "{}",
                    format!("Error retrieving translation for {}: {:#}", locale, err).yellow()
                );
            }
        }

        if !corpus.is_available(cldr_code) {
            record.cldr_available = false;
            languages.insert(locale.clone(), record);
            continue;
        }

        match corpus.context_transform(cldr_code) {
            Ok(Some(transform)) => record.transform_type = transform,
            Ok(None) => {}
            Err(_) => {
                println!("{}", format!("Transform not available for {}", locale).yellow());
            }
        }

        match corpus.display_name(cldr_code) {
            Ok(Some(name)) => record.cldr_name = name,
            Ok(None) => {}
            Err(_) => {
                println!("{}", format!("CLDR name not available for {}", locale).yellow());
            }
        }

        record.transformed_name = cldr::apply_transform(&record.transform_type, &record.cldr_name);
        languages.insert(locale.clone(), record);
    }

    languages
}

/// Persists the collection as pretty-printed JSON, overwriting any previous
/// document. Parent directories are created as needed.
pub fn write_collection(languages: &LanguageCollection, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let payload = serde_json::to_string_pretty(languages)?;
    fs::write(path, payload).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
