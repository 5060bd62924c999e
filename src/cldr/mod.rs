// SPDX-License-Identifier: PMPL-1.0-or-later

//! Read-only access to the CLDR JSON corpus.
//!
//! The corpus is the npm layout of the `cldr-localenames-full` and
//! `cldr-misc-full` packages: one directory per locale under `main/`, with
//! `languages.json` holding display names and `contextTransforms.json`
//! holding casing rules.
//!
//! Every accessor is best effort. A missing file returns `Ok(None)`
//! (locales legitimately lack context transforms); a file that exists but
//! cannot be parsed, or that parses without the expected key, returns an
//! error the caller is expected to contain per field.

use crate::types::{PLACEHOLDER, TRANSFORM_TITLECASE};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on a CLDR corpus root (the directory containing the two
/// `cldr-*-full` packages, typically `node_modules`).
#[derive(Debug, Clone)]
pub struct CldrCorpus {
    root: PathBuf,
}

impl CldrCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CldrCorpus { root: root.into() }
    }

    fn names_dir(&self, cldr_code: &str) -> PathBuf {
        self.root
            .join("cldr-localenames-full")
            .join("main")
            .join(cldr_code)
    }

    fn transforms_file(&self, cldr_code: &str) -> PathBuf {
        self.root
            .join("cldr-misc-full")
            .join("main")
            .join(cldr_code)
            .join("contextTransforms.json")
    }

    /// Whether the corpus carries data for this locale at all.
    pub fn is_available(&self, cldr_code: &str) -> bool {
        self.names_dir(cldr_code).is_dir()
    }

    /// The locale's display name for its own language, from
    /// `languages.json` at `main.{code}.localeDisplayNames.languages.{code}`.
    pub fn display_name(&self, cldr_code: &str) -> Result<Option<String>> {
        let path = self.names_dir(cldr_code).join("languages.json");
        read_json_string(
            &path,
            &[
                "main",
                cldr_code,
                "localeDisplayNames",
                "languages",
                cldr_code,
            ],
        )
    }

    /// The `uiListOrMenu` context transform for languages, from
    /// `contextTransforms.json`. Most locales have none.
    pub fn context_transform(&self, cldr_code: &str) -> Result<Option<String>> {
        let path = self.transforms_file(cldr_code);
        read_json_string(
            &path,
            &[
                "main",
                cldr_code,
                "contextTransforms",
                "languages",
                "uiListOrMenu",
            ],
        )
    }
}

/// Reads `path` as JSON and extracts the string at the nested key path.
/// `Ok(None)` when the file does not exist; `Err` for unreadable or
/// malformed content.
fn read_json_string(path: &Path, keys: &[&str]) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    json_string_at(&document, keys).map(Some)
}

fn json_string_at(document: &Value, keys: &[&str]) -> Result<String> {
    let mut node = document;
    for key in keys {
        node = node
            .get(key)
            .ok_or_else(|| anyhow!("missing key '{}'", key))?;
    }
    node.as_str()
        .map(String::from)
        .ok_or_else(|| anyhow!("value at '{}' is not a string", keys.join(".")))
}

/// Applies a context transform to a display name.
///
/// `titlecase-firstword` uppercases the first character and lowercases all
/// remaining characters ("PORTUGUÊS" becomes "Português"); any other
/// transform, or a placeholder name, leaves the name untouched.
pub fn apply_transform(transform_type: &str, name: &str) -> String {
    if transform_type == TRANSFORM_TITLECASE && name != PLACEHOLDER {
        capitalize_first(name)
    } else {
        name.to_string()
    }
}

/// First character uppercased, remainder lowercased. This intentionally
/// touches the whole string, not just the first character.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
