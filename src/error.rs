// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy shared by the loader, converter and validator.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("unsupported format for {path}: expected a .json or .hjson file")]
    UnsupportedFormat { path: PathBuf },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as {format}: {message}")]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("unexpected shape in {context}: expected {expected}, found {found}")]
    UnexpectedShape {
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("element {index} has no `{field}` field")]
    MissingKey { index: usize, field: String },

    #[error("element {index} has a non-string `{field}` field ({found})")]
    InvalidKey {
        index: usize,
        field: String,
        found: &'static str,
    },

    #[error("duplicate `{field}` value `{key}` at element {index}")]
    DuplicateKey {
        index: usize,
        field: String,
        key: String,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("validation failed with {violations} violation(s) across {locales} locale(s)")]
    ValidationFailed { violations: usize, locales: usize },
}

impl LocaleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LocaleError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = LocaleError> = std::result::Result<T, E>;

/// JSON type name used in shape errors and violations.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_names_cover_every_variant() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn messages_name_the_offending_key() {
        let err = LocaleError::DuplicateKey {
            index: 3,
            field: "art_id".to_string(),
            key: "capoo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate `art_id` value `capoo` at element 3"
        );
    }
}
