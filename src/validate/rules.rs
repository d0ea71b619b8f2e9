// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-record and per-catalog checks.
//!
//! Everything here is a pure function over an already-parsed document, so
//! the rules can be exercised without touching the filesystem. Each violated
//! condition yields its own [`Violation`].

use crate::config::ReferenceExpectations;
use crate::error::json_type_name;
use crate::types::{LINKS_FIELD, TEXT_FIELDS};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The catalog file is missing or could not be loaded.
    Unreadable { message: String },
    CatalogNotMapping { found: String },
    RecordNotMapping { art_id: String, found: String },
    MissingField { art_id: String, field: String },
    WrongType {
        art_id: String,
        field: String,
        expected: String,
        found: String,
    },
    EmptyField { art_id: String, field: String },
    MissingRequiredKey { key: String },
    ForbiddenKeyPresent { key: String },
    CountMismatch { expected: usize, found: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unreadable { message } => write!(f, "catalog unreadable: {}", message),
            Violation::CatalogNotMapping { found } => {
                write!(f, "catalog is a {}, expected an object", found)
            }
            Violation::RecordNotMapping { art_id, found } => {
                write!(f, "{}: record is a {}, expected an object", art_id, found)
            }
            Violation::MissingField { art_id, field } => {
                write!(f, "{}: missing `{}`", art_id, field)
            }
            Violation::WrongType {
                art_id,
                field,
                expected,
                found,
            } => write!(
                f,
                "{}: `{}` is a {}, expected {}",
                art_id, field, found, expected
            ),
            Violation::EmptyField { art_id, field } => {
                write!(f, "{}: `{}` is empty", art_id, field)
            }
            Violation::MissingRequiredKey { key } => write!(f, "required entry `{}` is missing", key),
            Violation::ForbiddenKeyPresent { key } => {
                write!(f, "forbidden entry `{}` is present", key)
            }
            Violation::CountMismatch { expected, found } => {
                write!(f, "expected {} entries, found {}", expected, found)
            }
        }
    }
}

/// Loose check applied to every locale: the record is an object, the text
/// fields are strings and `links` is an array. Empty strings are tolerated
/// (untranslated entries).
pub fn check_record_shape(art_id: &str, record: &Value) -> Vec<Violation> {
    let Some(fields) = record.as_object() else {
        return vec![Violation::RecordNotMapping {
            art_id: art_id.to_string(),
            found: json_type_name(record).to_string(),
        }];
    };

    let mut violations = Vec::new();
    for field in TEXT_FIELDS {
        match fields.get(field) {
            None => violations.push(missing_field(art_id, field)),
            Some(value) if !value.is_string() => {
                violations.push(wrong_type(art_id, field, "string", value))
            }
            Some(_) => {}
        }
    }
    match fields.get(LINKS_FIELD) {
        None => violations.push(missing_field(art_id, LINKS_FIELD)),
        Some(value) if !value.is_array() => {
            violations.push(wrong_type(art_id, LINKS_FIELD, "array", value))
        }
        Some(_) => {}
    }
    violations
}

/// Strict check for the reference locale: the loose check plus non-empty
/// text fields.
pub fn check_record_content(art_id: &str, record: &Value) -> Vec<Violation> {
    let mut violations = check_record_shape(art_id, record);
    let Some(fields) = record.as_object() else {
        return violations;
    };

    for field in TEXT_FIELDS {
        if let Some(Value::String(text)) = fields.get(field) {
            if text.is_empty() {
                violations.push(Violation::EmptyField {
                    art_id: art_id.to_string(),
                    field: field.to_string(),
                });
            }
        }
    }
    violations
}

/// Loose catalog check applied to every discovered locale.
pub fn check_catalog(document: &Value) -> Vec<Violation> {
    let Some(catalog) = document.as_object() else {
        return vec![catalog_not_mapping(document)];
    };
    catalog
        .iter()
        .flat_map(|(art_id, record)| check_record_shape(art_id, record))
        .collect()
}

/// Reference catalog check: pinned keys and cardinality plus the strict
/// per-record check.
pub fn check_reference_catalog(
    document: &Value,
    expectations: &ReferenceExpectations,
) -> Vec<Violation> {
    let Some(catalog) = document.as_object() else {
        return vec![catalog_not_mapping(document)];
    };

    let mut violations = Vec::new();
    for key in &expectations.required_keys {
        if !catalog.contains_key(key) {
            violations.push(Violation::MissingRequiredKey { key: key.clone() });
        }
    }
    for key in &expectations.forbidden_keys {
        if catalog.contains_key(key) {
            violations.push(Violation::ForbiddenKeyPresent { key: key.clone() });
        }
    }
    if let Some(expected) = expectations.expected_count {
        if catalog.len() != expected {
            violations.push(Violation::CountMismatch {
                expected,
                found: catalog.len(),
            });
        }
    }
    for (art_id, record) in catalog {
        violations.extend(check_record_content(art_id, record));
    }
    violations
}

fn missing_field(art_id: &str, field: &str) -> Violation {
    Violation::MissingField {
        art_id: art_id.to_string(),
        field: field.to_string(),
    }
}

fn wrong_type(art_id: &str, field: &str, expected: &str, value: &Value) -> Violation {
    Violation::WrongType {
        art_id: art_id.to_string(),
        field: field.to_string(),
        expected: expected.to_string(),
        found: json_type_name(value).to_string(),
    }
}

fn catalog_not_mapping(document: &Value) -> Violation {
    Violation::CatalogNotMapping {
        found: json_type_name(document).to_string(),
    }
}
