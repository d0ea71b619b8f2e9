// SPDX-License-Identifier: PMPL-1.0-or-later

//! Validator: structural and content checks over converted locale catalogs.
//!
//! Every locale directory under the root that holds the catalog file gets
//! the loose shape check; the reference locale additionally gets the strict
//! content check and its pinned key/cardinality expectations.

mod discover;
mod rules;

pub use discover::discover_locales;
pub use rules::{
    check_catalog, check_record_content, check_record_shape, check_reference_catalog, Violation,
};

use crate::config::{PipelineConfig, ReferenceExpectations};
use crate::error::{LocaleError, Result};
use crate::loader;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a validation pass
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    pub locales_dir: PathBuf,
    pub filename: String,
    pub reference: ReferenceExpectations,
}

impl ValidateConfig {
    pub fn from_pipeline(config: &PipelineConfig) -> Self {
        Self {
            locales_dir: config.locales_dir.clone(),
            filename: config.filename.clone(),
            reference: config.reference.clone(),
        }
    }
}

/// Results for one locale catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleResult {
    pub locale: String,
    pub path: PathBuf,
    pub is_reference: bool,
    /// Entries in the catalog, when it loaded as an object.
    pub entries: Option<usize>,
    pub violations: Vec<Violation>,
}

impl LocaleResult {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Complete validation report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub created_at: String,
    pub locales_dir: PathBuf,
    pub reference_locale: String,
    pub results: Vec<LocaleResult>,
}

impl ValidationReport {
    pub fn total_violations(&self) -> usize {
        self.results.iter().map(|r| r.violations.len()).sum()
    }

    pub fn failing_locales(&self) -> usize {
        self.results.iter().filter(|r| !r.passed()).count()
    }

    pub fn passed(&self) -> bool {
        self.total_violations() == 0
    }

    pub fn locale(&self, code: &str) -> Option<&LocaleResult> {
        self.results.iter().find(|r| r.locale == code)
    }

    /// The report itself when clean, `ValidationFailed` otherwise.
    pub fn into_result(self) -> Result<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(LocaleError::ValidationFailed {
                violations: self.total_violations(),
                locales: self.failing_locales(),
            })
        }
    }
}

/// Validate one catalog file. Load failures become a single `Unreadable`
/// violation so the remaining locales are still checked.
pub fn validate_catalog(
    locale: &str,
    path: &Path,
    reference: Option<&ReferenceExpectations>,
) -> LocaleResult {
    let (entries, violations) = match loader::load_document(path) {
        Ok(document) => {
            let entries = document.as_object().map(|catalog| catalog.len());
            // The strict reference pass already includes the loose shape checks.
            let violations = match reference {
                Some(expectations) => check_reference_catalog(&document, expectations),
                None => check_catalog(&document),
            };
            (entries, violations)
        }
        Err(err) => (
            None,
            vec![Violation::Unreadable {
                message: err.to_string(),
            }],
        ),
    };

    LocaleResult {
        locale: locale.to_string(),
        path: path.to_path_buf(),
        is_reference: reference.is_some(),
        entries,
        violations,
    }
}

/// Discover and validate every locale under the configured root.
pub fn validate_tree(config: &ValidateConfig) -> Result<ValidationReport> {
    let files = discover_locales(&config.locales_dir, &config.filename)?;
    let reference_locale = config.reference.locale.as_str();

    let mut results: Vec<LocaleResult> = files
        .iter()
        .map(|file| {
            let reference = (file.locale == reference_locale).then_some(&config.reference);
            validate_catalog(&file.locale, &file.path, reference)
        })
        .collect();

    if !files.iter().any(|file| file.locale == reference_locale) {
        let path = config
            .locales_dir
            .join(reference_locale)
            .join(&config.filename);
        results.insert(
            0,
            LocaleResult {
                locale: reference_locale.to_string(),
                violations: vec![Violation::Unreadable {
                    message: format!("reference catalog {} not found", path.display()),
                }],
                path,
                is_reference: true,
                entries: None,
            },
        );
    }

    Ok(ValidationReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        locales_dir: config.locales_dir.clone(),
        reference_locale: reference_locale.to_string(),
        results,
    })
}
