// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale directory discovery

use crate::error::{LocaleError, Result};
use crate::locale;
use crate::types::LocaleFile;
use std::path::Path;
use walkdir::WalkDir;

/// Find every immediate subdirectory of `root` that holds `filename`.
///
/// Every such directory is returned, whatever its name. A name that does not
/// look like a locale code gets a warning but is still validated. Results are
/// sorted by locale code.
pub fn discover_locales(root: &Path, filename: &str) -> Result<Vec<LocaleFile>> {
    if !root.is_dir() {
        return Err(LocaleError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "locales root is not a directory"),
        ));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            LocaleError::io(path, std::io::Error::other(e.to_string()))
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let catalog = entry.path().join(filename);
        if !catalog.is_file() {
            continue;
        }

        let code = entry.file_name().to_string_lossy().to_string();
        if !locale::looks_like_locale_code(&code) {
            eprintln!(
                "warning: {} holds {} but {} does not look like a locale code",
                entry.path().display(),
                filename,
                code
            );
        }

        found.push(LocaleFile {
            locale: code,
            path: catalog,
        });
    }

    found.sort();
    Ok(found)
}
