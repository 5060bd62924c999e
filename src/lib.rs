// SPDX-License-Identifier: PMPL-1.0-or-later

//! langnames — Firefox language-name aggregation and reporting.
//!
//! This crate builds a per-locale report of how each Firefox shipping
//! locale names its own language, merging three sources:
//!
//! 1. **Shipping list**: line-delimited locale lists published in
//!    mozilla-central (desktop and Android).
//! 2. **CLDR**: the Unicode CLDR JSON corpus, consulted read-only for
//!    display names and context-transform rules.
//! 3. **Transvision**: Mozilla's translation-memory API, queried for the
//!    localized value of `languageNames.properties`.
//!
//! The merged collection is persisted as a sorted JSON document and can be
//! rendered into static HTML tables via `%TABLEBODY%` marker substitution.

pub mod aggregate;
pub mod cldr;
pub mod fetch;
pub mod locales;
pub mod render;
pub mod types;
