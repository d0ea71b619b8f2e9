// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale directory codes.
//!
//! The site names its locale directories mostly by ISO 639-1 code, with two
//! country-code holdovers: `cz` (Czech, ISO `cs`) and `ua` (Ukrainian, ISO
//! `uk`). Lookups go through [`iso_code`] so both spellings resolve.

mod iso639;

pub use iso639::{language_name, native_name};

use regex::Regex;
use std::sync::OnceLock;

/// Map a site locale code to its ISO 639-1 language code.
pub fn iso_code(code: &str) -> &str {
    let language = code.split(['-', '_']).next().unwrap_or(code);
    match language {
        "cz" => "cs",
        "ua" => "uk",
        other => other,
    }
}

/// Human-readable label like `cz (Czech / Čeština)`.
pub fn display_label(code: &str) -> String {
    let iso = iso_code(code);
    match (language_name(iso), native_name(iso)) {
        (Some(name), Some(native)) if name != native => format!("{} ({} / {})", code, name, native),
        (Some(name), _) => format!("{} ({})", code, name),
        _ => code.to_string(),
    }
}

/// True when `code` is shaped like a locale tag: a 2-3 letter language code
/// followed by optional script or region subtags (`zh-TW`, `pt_BR`,
/// `es-419`, `zh-Hant-TW`).
pub fn looks_like_locale_code(code: &str) -> bool {
    static LOCALE_RE: OnceLock<Regex> = OnceLock::new();
    LOCALE_RE
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").expect("locale code pattern")
        })
        .is_match(code)
}

/// True when `code` names a language we have names for, under either
/// spelling.
pub fn is_known_locale(code: &str) -> bool {
    looks_like_locale_code(code) && language_name(iso_code(code)).is_some()
}
