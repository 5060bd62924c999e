// SPDX-License-Identifier: PMPL-1.0-or-later

//! Remote data sources: shipping-locale lists and the Transvision API.
//!
//! All network access is synchronous (blocking reqwest). Failures here are
//! recoverable by design: a locale list that cannot be fetched contributes
//! no locales, a Transvision lookup that fails leaves the field at its
//! placeholder. Callers log and continue; nothing in this module aborts the
//! aggregation.

use crate::locales;
use anyhow::{Context, Result};
use colored::*;
use serde_json::Value;
use std::collections::BTreeSet;

/// Line-delimited locale lists published in mozilla-central.
pub const DEFAULT_LOCALE_LIST_URLS: &[&str] = &[
    "https://hg.mozilla.org/mozilla-central/raw-file/default/browser/locales/all-locales",
    "https://hg.mozilla.org/mozilla-central/raw-file/default/mobile/android/locales/all-locales",
];

/// Transvision entity endpoint; the locale code is appended verbatim.
pub const DEFAULT_TRANSVISION_ENDPOINT: &str = "https://transvision.mozfr.org/api/v1/entity/\
     gecko_strings/?id=toolkit/chrome/global/languageNames.properties:";

/// Always part of the shipping list, even if every fetch fails.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Shared blocking HTTP client with the crate's user agent.
pub fn http_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("langnames/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")
}

/// Fetches and merges the shipping-locale lists.
///
/// Each URL is fetched independently; a failure is logged and that source
/// simply contributes no locales. The result is deduplicated, guaranteed to
/// contain [`FALLBACK_LOCALE`], and sorted.
pub fn fetch_shipping_locales(client: &reqwest::blocking::Client, urls: &[String]) -> Vec<String> {
    let mut collected = Vec::new();
    for url in urls {
        match fetch_locale_list(client, url) {
            Ok(mut lines) => collected.append(&mut lines),
            Err(err) => {
                println!("{}", format!("Failed to fetch {}: {:#}", url, err).yellow());
            }
        }
    }
    merge_shipping_locales(collected)
}

fn fetch_locale_list(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<String>> {
    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("requesting {}", url))?
        .text()
        .context("reading response body")?;
    Ok(parse_locale_list(&body))
}

/// One locale per line; trailing whitespace stripped, blank lines skipped.
pub fn parse_locale_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Deduplicates, force-includes [`FALLBACK_LOCALE`], and sorts.
pub fn merge_shipping_locales(locales: Vec<String>) -> Vec<String> {
    let mut unique: BTreeSet<String> = locales.into_iter().collect();
    unique.insert(FALLBACK_LOCALE.to_string());
    unique.into_iter().collect()
}

/// A service resolving a shipping locale to its translated language name.
///
/// The aggregation loop consumes this trait rather than a concrete client,
/// so the merge logic is testable without network access.
pub trait LanguageNameSource {
    /// `Ok(None)` means the service answered but has no translation for
    /// this locale; `Err` means the lookup itself failed.
    fn lookup(&self, locale: &str) -> Result<Option<String>>;
}

/// Transvision-backed [`LanguageNameSource`].
pub struct TransvisionClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl TransvisionClient {
    pub fn new(client: reqwest::blocking::Client, endpoint: impl Into<String>) -> Self {
        TransvisionClient {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl LanguageNameSource for TransvisionClient {
    fn lookup(&self, locale: &str) -> Result<Option<String>> {
        let url = format!("{}{}", self.endpoint, locales::transvision_code(locale));
        let payload: Value = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .with_context(|| format!("requesting {}", url))?
            .json()
            .context("parsing Transvision response")?;
        Ok(translated_name(&payload, locale))
    }
}

/// Extracts the translated name for the *shipping* locale from a Transvision
/// entity payload.
///
/// The API is queried with the mapped code but responds with an object keyed
/// by every Gecko locale that translates the string; the caller's own locale
/// key is the one we want.
pub fn translated_name(payload: &Value, locale: &str) -> Option<String> {
    payload
        .get(locale)
        .and_then(Value::as_str)
        .map(String::from)
}
