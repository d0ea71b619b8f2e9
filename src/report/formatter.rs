// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console formatting for validation reports and catalog listings

use crate::locale;
use crate::report::ReportOutputFormat;
use crate::types::{LocaleArtCatalog, LocaleFile};
use crate::validate::{LocaleResult, ValidationReport};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

/// Violations printed per locale before the rest are elided.
const MAX_VIOLATIONS_SHOWN: usize = 25;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &ValidationReport) {
        println!("\n{}", "=== ART-PIECE LOCALE VALIDATION ===".bold().cyan());
        println!(
            "  Root: {}  |  Reference: {}  |  Locales: {}",
            report.locales_dir.display(),
            report.reference_locale,
            report.results.len()
        );
        println!();

        for result in &report.results {
            self.print_locale(result);
        }

        println!();
        if report.passed() {
            println!("{}", "All locale catalogs passed".green().bold());
        } else {
            println!(
                "{}",
                format!(
                    "{} violation(s) in {} locale(s)",
                    report.total_violations(),
                    report.failing_locales()
                )
                .red()
                .bold()
            );
        }
    }

    fn print_locale(&self, result: &LocaleResult) {
        let status = if result.passed() {
            "PASSED".green()
        } else {
            "FAILED".red()
        };
        let entries = result
            .entries
            .map(|n| format!("{} entries", n))
            .unwrap_or_else(|| "unreadable".to_string());
        let marker = if result.is_reference { " [reference]" } else { "" };

        println!(
            "  {:<32} {} ({}){}",
            locale::display_label(&result.locale),
            status,
            entries,
            marker.dimmed()
        );

        for violation in result.violations.iter().take(MAX_VIOLATIONS_SHOWN) {
            println!("    - {}", violation.to_string().yellow());
        }
        if result.violations.len() > MAX_VIOLATIONS_SHOWN {
            println!(
                "    ... and {} more",
                result.violations.len() - MAX_VIOLATIONS_SHOWN
            );
        }
    }

    /// Print one catalog as a title table.
    pub fn print_catalog(&self, code: &str, catalog: &LocaleArtCatalog) {
        println!(
            "{}",
            format!("{}: {} art piece(s)", locale::display_label(code), catalog.len()).bold()
        );
        println!("  {:<24} {:>5}  {}", "Art id", "Links", "Title");
        println!("  {}", "-".repeat(60));
        for (art_id, record) in catalog {
            let title = if record.title.is_empty() {
                "(untranslated)".dimmed().to_string()
            } else if record.has_empty_text() {
                format!("{} {}", record.title, "(partial)".dimmed())
            } else {
                record.title.clone()
            };
            println!("  {:<24} {:>5}  {}", art_id, record.links.len(), title);
        }
    }

    pub fn print_locales(&self, files: &[LocaleFile]) {
        if files.is_empty() {
            println!("  No locale catalogs found.");
            return;
        }
        for file in files {
            let unknown = if locale::is_known_locale(&file.locale) {
                ""
            } else {
                " (unrecognised language code)"
            };
            println!(
                "  {:<32} {}{}",
                locale::display_label(&file.locale),
                file.path.display().to_string().dimmed(),
                unknown.yellow()
            );
        }
    }

    pub fn save<P: AsRef<Path>>(
        &self,
        report: &ValidationReport,
        path: P,
        format: Option<ReportOutputFormat>,
    ) -> Result<()> {
        let path = path.as_ref();
        let format = format.unwrap_or_else(|| ReportOutputFormat::for_path(path));
        let content = format.serialize(report)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        println!("Report saved to: {}", path.display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
