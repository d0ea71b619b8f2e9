// SPDX-License-Identifier: PMPL-1.0-or-later

//! Converter: rewrites array-shaped locale documents into keyed catalogs.
//!
//! Each configured locale file goes from
//! `[{"art_id": "capoo", "title": ...}, ...]` to
//! `{"capoo": {"title": ...}, ...}` and is overwritten in place. This is a
//! one-time migration: a converted file is no longer an array, so a second
//! run fails with `UnexpectedShape` before anything is written.

use crate::config::{DuplicatePolicy, PipelineConfig};
use crate::error::{json_type_name, LocaleError, Result};
use crate::loader;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub locales_dir: PathBuf,
    pub locales: Vec<String>,
    pub filename: String,
    pub id_field: String,
    pub duplicate_policy: DuplicatePolicy,
    /// Convert and report without writing anything.
    pub dry_run: bool,
}

impl ConvertConfig {
    pub fn from_pipeline(config: &PipelineConfig) -> Self {
        Self {
            locales_dir: config.locales_dir.clone(),
            locales: config.locales.clone(),
            filename: config.filename.clone(),
            id_field: config.id_field.clone(),
            duplicate_policy: config.duplicate_policy,
            dry_run: false,
        }
    }

    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        self.locales_dir.join(locale).join(&self.filename)
    }
}

/// Outcome of converting one locale file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConversion {
    pub locale: String,
    pub path: PathBuf,
    pub records: usize,
    /// Identifiers whose earlier record was replaced under `LastWins`.
    pub overwritten: Vec<String>,
    pub written: bool,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertSummary {
    pub conversions: Vec<LocaleConversion>,
    pub dry_run: bool,
}

impl ConvertSummary {
    pub fn total_records(&self) -> usize {
        self.conversions.iter().map(|c| c.records).sum()
    }
}

/// Re-key an array of records by `id_field`.
///
/// Returns the catalog and the identifiers that were overwritten (always
/// empty under `DuplicatePolicy::Reject`).
pub fn convert_records(
    document: Value,
    id_field: &str,
    policy: DuplicatePolicy,
) -> Result<(Map<String, Value>, Vec<String>)> {
    let elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(LocaleError::UnexpectedShape {
                context: "document root".to_string(),
                expected: "array of records",
                found: json_type_name(&other),
            })
        }
    };

    let mut catalog = Map::new();
    let mut overwritten = Vec::new();

    for (index, element) in elements.into_iter().enumerate() {
        let mut record = match element {
            Value::Object(record) => record,
            other => {
                return Err(LocaleError::UnexpectedShape {
                    context: format!("element {}", index),
                    expected: "object",
                    found: json_type_name(&other),
                })
            }
        };

        // `shift_remove` keeps the remaining fields in their original order.
        let key = match record.shift_remove(id_field) {
            Some(Value::String(key)) => key,
            Some(other) => {
                return Err(LocaleError::InvalidKey {
                    index,
                    field: id_field.to_string(),
                    found: json_type_name(&other),
                })
            }
            None => {
                return Err(LocaleError::MissingKey {
                    index,
                    field: id_field.to_string(),
                })
            }
        };

        if catalog.contains_key(&key) {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(LocaleError::DuplicateKey {
                        index,
                        field: id_field.to_string(),
                        key,
                    })
                }
                DuplicatePolicy::LastWins => overwritten.push(key.clone()),
            }
        }
        catalog.insert(key, Value::Object(record));
    }

    Ok((catalog, overwritten))
}

/// Serialize a document the way the site's locale files are laid out:
/// 4-space indentation, trailing newline.
pub fn to_catalog_json<T: Serialize + ?Sized>(document: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Convert one locale file in place.
pub fn convert_locale(config: &ConvertConfig, locale: &str) -> Result<LocaleConversion> {
    let path = config.catalog_path(locale);
    let (catalog, overwritten) = convert_file(&path, &config.id_field, config.duplicate_policy)?;

    let written = if config.dry_run {
        false
    } else {
        let json = to_catalog_json(&catalog).map_err(|source| LocaleError::Serialize {
            path: path.clone(),
            source,
        })?;
        write_replacing(&path, json.as_bytes())?;
        true
    };

    Ok(LocaleConversion {
        locale: locale.to_string(),
        path,
        records: catalog.len(),
        overwritten,
        written,
    })
}

/// Replace `path` with `contents` through a sibling temp file, so a failed
/// write leaves the original document intact.
fn write_replacing(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LocaleError::io(dir, e))?;
    tmp.write_all(contents)
        .map_err(|e| LocaleError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| LocaleError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| LocaleError::io(path, e.error))?;
    Ok(())
}

fn convert_file(
    path: &Path,
    id_field: &str,
    policy: DuplicatePolicy,
) -> Result<(Map<String, Value>, Vec<String>)> {
    let document = loader::load_document(path)?;
    convert_records(document, id_field, policy).map_err(|err| match err {
        LocaleError::UnexpectedShape {
            context,
            expected,
            found,
        } => LocaleError::UnexpectedShape {
            context: format!("{} ({})", path.display(), context),
            expected,
            found,
        },
        other => other,
    })
}

/// Convert every configured locale in order, stopping at the first failure.
pub fn run(config: &ConvertConfig) -> Result<ConvertSummary> {
    let mut conversions = Vec::with_capacity(config.locales.len());
    for locale in &config.locales {
        conversions.push(convert_locale(config, locale)?);
    }
    Ok(ConvertSummary {
        conversions,
        dry_run: config.dry_run,
    })
}

/// Print a short per-locale summary
pub fn print_summary(summary: &ConvertSummary) {
    for conversion in &summary.conversions {
        let action = if conversion.written {
            "converted"
        } else {
            "would convert"
        };
        println!(
            "  {:<6} {} {} record(s) -> {}",
            conversion.locale,
            action,
            conversion.records,
            conversion.path.display()
        );
        if !conversion.overwritten.is_empty() {
            eprintln!(
                "  warning: {} duplicate id(s) kept last value: {}",
                conversion.overwritten.len(),
                conversion.overwritten.join(", ")
            );
        }
    }
    println!(
        "Done! {} locale(s), {} record(s){}",
        summary.conversions.len(),
        summary.total_records(),
        if summary.dry_run { " (dry run)" } else { "" }
    );
}
