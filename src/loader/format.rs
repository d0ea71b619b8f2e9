// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document formats accepted by the loader

use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Strict JSON.
    Json,
    /// Human-editable JSON superset: comments, quoteless strings, optional commas.
    Hjson,
}

/// Extension -> parse strategy. New formats are added here only.
const EXTENSION_TABLE: &[(&str, DocumentFormat)] = &[
    ("json", DocumentFormat::Json),
    ("hjson", DocumentFormat::Hjson),
];

impl DocumentFormat {
    /// Resolve the format from a path's extension. Case-sensitive, like the
    /// locale file names the site ships.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::from_extension(extension)
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        EXTENSION_TABLE
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, format)| *format)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Hjson => "hjson",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "JSON",
            DocumentFormat::Hjson => "HJSON",
        }
    }

    /// Parse text into a generic tree. Object key order is preserved and a
    /// repeated key keeps the last value.
    pub fn parse(&self, text: &str) -> Result<Value, String> {
        match self {
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Hjson => deser_hjson::from_str(text).map_err(|e| e.to_string()),
        }
    }
}
