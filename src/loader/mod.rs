// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loader: reads a single JSON or HJSON file into a generic tree.
//!
//! The format is chosen from the file extension before the file is touched,
//! so an unsupported path never causes any I/O.

mod format;

pub use format::DocumentFormat;

use crate::error::{json_type_name, LocaleError, Result};
use crate::types::LocaleArtCatalog;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a `.json` or `.hjson` document.
pub fn load_document(path: &Path) -> Result<Value> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| LocaleError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let raw = fs::read(path).map_err(|e| LocaleError::io(path, e))?;
    let text = decode_text(&raw).ok_or_else(|| LocaleError::Parse {
        path: path.to_path_buf(),
        format: format.name(),
        message: "file is not valid UTF-8 or UTF-16 text".to_string(),
    })?;

    format.parse(&text).map_err(|message| LocaleError::Parse {
        path: path.to_path_buf(),
        format: format.name(),
        message,
    })
}

/// Load a converted catalog into typed records.
pub fn load_catalog(path: &Path) -> Result<LocaleArtCatalog> {
    let document = load_document(path)?;
    if !document.is_object() {
        return Err(LocaleError::UnexpectedShape {
            context: path.display().to_string(),
            expected: "object",
            found: json_type_name(&document),
        });
    }
    serde_json::from_value(document).map_err(|e| LocaleError::Parse {
        path: path.to_path_buf(),
        format: "art-piece catalog",
        message: e.to_string(),
    })
}

/// Decode file bytes, honouring (and stripping) a UTF-8 or UTF-16 byte-order
/// mark. Without a BOM the text must be UTF-8.
fn decode_text(raw: &[u8]) -> Option<String> {
    let (encoding, bom_len) =
        encoding_rs::Encoding::for_bom(raw).unwrap_or((encoding_rs::UTF_8, 0));
    encoding
        .decode_without_bom_handling_and_without_replacement(&raw[bom_len..])
        .map(|text| text.into_owned())
}
