// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core types for art-piece locale catalogs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Field names every art-piece record carries once converted.
pub const TITLE_FIELD: &str = "title";
pub const BLURB_FIELD: &str = "blurb";
pub const DESC_FIELD: &str = "desc";
pub const LINKS_FIELD: &str = "links";

/// The three text fields, in display order.
pub const TEXT_FIELDS: [&str; 3] = [TITLE_FIELD, BLURB_FIELD, DESC_FIELD];

/// One art piece as stored in a converted locale catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtPieceRecord {
    pub title: String,
    pub blurb: String,
    pub desc: String,
    /// Link entries are passed through untouched; the site decides how to render them.
    pub links: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArtPieceRecord {
    /// True when any of the text fields is still untranslated (empty).
    pub fn has_empty_text(&self) -> bool {
        self.title.is_empty() || self.blurb.is_empty() || self.desc.is_empty()
    }
}

/// `art_id -> record`, in file order.
pub type LocaleArtCatalog = IndexMap<String, ArtPieceRecord>;

/// A catalog file found under the locales root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocaleFile {
    pub locale: String,
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_keeps_unknown_fields() {
        let record: ArtPieceRecord = serde_json::from_value(json!({
            "title": "Capoo",
            "blurb": "A blue cat bug",
            "desc": "Drawn in the canvas corner",
            "links": ["https://example.org/capoo"],
            "credit": "r/place"
        }))
        .unwrap();

        assert_eq!(record.links.len(), 1);
        assert_eq!(record.extra.get("credit"), Some(&json!("r/place")));
        assert!(!record.has_empty_text());
    }

    #[test]
    fn empty_text_is_detected() {
        let record: ArtPieceRecord = serde_json::from_value(json!({
            "title": "Capoo",
            "blurb": "",
            "desc": "desc",
            "links": []
        }))
        .unwrap();
        assert!(record.has_empty_text());
        assert!(record.extra.is_empty());
    }
}
