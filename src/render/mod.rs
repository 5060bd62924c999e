// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static HTML rendering via `%TABLEBODY%` marker substitution.
//!
//! The renderer is the strict half of the pipeline: where aggregation
//! degrades to placeholders, rendering treats a missing template marker,
//! unreadable input, or malformed JSON as fatal and propagates the error.
//! Output is deterministic — rendering the same document and template twice
//! produces byte-identical files.

use crate::types::{CuratedList, LanguageCollection, LocaleRecord};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Placeholder token the templates must contain.
pub const TABLE_BODY_MARKER: &str = "%TABLEBODY%";

/// Renders the curated list (locale code, display name) into a template.
pub fn render_curated(data: &CuratedList, template: &str) -> Result<String> {
    let rows: Vec<String> = data
        .iter()
        .map(|(locale, name)| format_row(&[locale, name]))
        .collect();
    substitute(template, &rows)
}

/// Renders the complete collection into a template, one six-column row per
/// locale: code, CLDR availability as Yes/No, CLDR name, transform type,
/// transformed name, Mozilla name.
pub fn render_complete(data: &LanguageCollection, template: &str) -> Result<String> {
    let rows: Vec<String> = data
        .iter()
        .map(|(locale, record)| format_row(&complete_cells(locale, record)))
        .collect();
    substitute(template, &rows)
}

/// Cell values for one row of the complete table. The header in
/// `templates/complete.html` follows this order.
fn complete_cells<'a>(locale: &'a str, record: &'a LocaleRecord) -> [&'a str; 6] {
    [
        locale,
        if record.cldr_available { "Yes" } else { "No" },
        &record.cldr_name,
        &record.transform_type,
        &record.transformed_name,
        &record.mozilla_name,
    ]
}

fn format_row(cells: &[&str]) -> String {
    let mut row = String::from("\n        <tr>");
    for cell in cells {
        row.push_str("\n            <td>");
        row.push_str(cell);
        row.push_str("</td>");
    }
    row.push_str("\n        </tr>");
    row
}

fn substitute(template: &str, rows: &[String]) -> Result<String> {
    if !template.contains(TABLE_BODY_MARKER) {
        bail!("template is missing the {} marker", TABLE_BODY_MARKER);
    }
    Ok(template.replace(TABLE_BODY_MARKER, &rows.join("\n")))
}

/// Reads the curated JSON document and template, writes the rendered page.
pub fn render_curated_file(json_path: &Path, template_path: &Path, output_path: &Path) -> Result<()> {
    let data: CuratedList = read_json(json_path)?;
    let template = read_template(template_path)?;
    write_output(output_path, &render_curated(&data, &template)?)
}

/// Reads the complete JSON document and template, writes the rendered page.
pub fn render_complete_file(
    json_path: &Path,
    template_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let data: LanguageCollection = read_json(json_path)?;
    let template = read_template(template_path)?;
    write_output(output_path, &render_complete(&data, &template)?)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading template {}", path.display()))
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing {}", path.display()))
}
