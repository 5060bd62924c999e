// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core data model for the aggregated language collection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel for any field whose source data could not be retrieved.
pub const PLACEHOLDER: &str = "---";

/// CLDR context-transform value requiring first-word title casing.
pub const TRANSFORM_TITLECASE: &str = "titlecase-firstword";

/// CLDR context-transform value indicating the name is used as-is.
pub const TRANSFORM_NO_CHANGE: &str = "no-change";

/// Merged metadata for a single shipping locale.
///
/// Field names serialize in kebab-case so the persisted document uses the
/// `cldr-available` / `cldr-name` key convention consumed by the renderer.
/// Every string field degrades to [`PLACEHOLDER`] when its source is
/// unavailable; construction never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocaleRecord {
    pub cldr_available: bool,
    pub cldr_name: String,
    pub mozilla_name: String,
    pub transform_type: String,
    pub transformed_name: String,
}

impl Default for LocaleRecord {
    fn default() -> Self {
        LocaleRecord {
            cldr_available: true,
            cldr_name: PLACEHOLDER.to_string(),
            mozilla_name: PLACEHOLDER.to_string(),
            transform_type: PLACEHOLDER.to_string(),
            transformed_name: PLACEHOLDER.to_string(),
        }
    }
}

/// The full aggregated collection, keyed by shipping locale.
///
/// A `BTreeMap` keeps keys unique and iteration sorted, so the persisted
/// JSON is stable across runs regardless of insertion order.
pub type LanguageCollection = BTreeMap<String, LocaleRecord>;

/// The curated subset: locale code mapped directly to a display name.
/// Maintained externally; this crate only renders it.
pub type CuratedList = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_available_with_placeholders() {
        let record = LocaleRecord::default();
        assert!(record.cldr_available);
        assert_eq!(record.cldr_name, PLACEHOLDER);
        assert_eq!(record.mozilla_name, PLACEHOLDER);
        assert_eq!(record.transform_type, PLACEHOLDER);
        assert_eq!(record.transformed_name, PLACEHOLDER);
    }

    #[test]
    fn record_serializes_with_kebab_case_keys() {
        let record = LocaleRecord::default();
        let json = serde_json::to_value(&record).expect("serialization should succeed");
        assert_eq!(json["cldr-available"], serde_json::json!(true));
        assert_eq!(json["cldr-name"], serde_json::json!(PLACEHOLDER));
        assert_eq!(json["mozilla-name"], serde_json::json!(PLACEHOLDER));
        assert_eq!(json["transform-type"], serde_json::json!(PLACEHOLDER));
        assert_eq!(json["transformed-name"], serde_json::json!(PLACEHOLDER));
    }
}
