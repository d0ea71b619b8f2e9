// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report printing and export

pub mod formatter;
pub mod output;

use crate::validate::ValidationReport;
use anyhow::Result;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Save a validation report. Without an explicit format it follows the
/// file extension.
pub fn save_report<P: AsRef<Path>>(
    report: &ValidationReport,
    path: P,
    format: Option<ReportOutputFormat>,
) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.save(report, path, format)
}

/// Print a validation report to the console
pub fn print_report(report: &ValidationReport) {
    let formatter = ReportFormatter::new();
    formatter.print(report);
}
