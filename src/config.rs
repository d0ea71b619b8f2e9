// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pipeline configuration.
//!
//! Defaults reproduce the site's layout (`public/locales/<locale>/art-pieces.json`)
//! so an empty or missing `art-locales.yaml` is a valid configuration.

use crate::error::{LocaleError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "art-locales.yaml";

/// What the converter does when two records share an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the locale with `DuplicateKey`.
    #[default]
    Reject,
    /// Keep the later record, silently dropping the earlier one.
    LastWins,
}

/// Pinned expectations for the reference (source) locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceExpectations {
    pub locale: String,
    pub expected_count: Option<usize>,
    pub required_keys: Vec<String>,
    pub forbidden_keys: Vec<String>,
}

impl Default for ReferenceExpectations {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            expected_count: Some(15),
            required_keys: vec!["capoo".to_string()],
            forbidden_keys: vec!["asdf".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Directory holding one subdirectory per locale.
    pub locales_dir: PathBuf,
    /// Catalog file name inside each locale directory.
    pub filename: String,
    /// Record field promoted to the catalog key by the converter.
    pub id_field: String,
    /// Locales the converter rewrites, in order.
    pub locales: Vec<String>,
    pub duplicate_policy: DuplicatePolicy,
    pub reference: ReferenceExpectations,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("public/locales"),
            filename: "art-pieces.json".to_string(),
            id_field: "art_id".to_string(),
            locales: ["en", "cz", "et", "lt", "zh"]
                .iter()
                .map(|code| code.to_string())
                .collect(),
            duplicate_policy: DuplicatePolicy::Reject,
            reference: ReferenceExpectations::default(),
        }
    }
}

impl PipelineConfig {
    /// Load `art-locales.yaml` from the working directory, or defaults when absent.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| LocaleError::io(path, e))?;
        Self::from_yaml(&raw).map_err(|message| LocaleError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw).map_err(|e| e.to_string())?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), String> {
        if self.filename.is_empty() {
            return Err("`filename` must not be empty".to_string());
        }
        if self.id_field.is_empty() {
            return Err("`id_field` must not be empty".to_string());
        }
        if self.reference.locale.is_empty() {
            return Err("`reference.locale` must not be empty".to_string());
        }
        if let Some(code) = self
            .locales
            .iter()
            .find(|code| !crate::locale::looks_like_locale_code(code))
        {
            return Err(format!("`{}` is not a locale code", code));
        }
        Ok(())
    }

    /// Path of the catalog file for one locale.
    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        self.locales_dir.join(locale).join(&self.filename)
    }
}
