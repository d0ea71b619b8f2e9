// SPDX-License-Identifier: PMPL-1.0-or-later

//! Names for the ISO 639-1 languages the site is, or may soon be,
//! translated into.

/// English name of an ISO 639-1 code.
///
/// ```
/// assert_eq!(art_locales::locale::language_name("cs"), Some("Czech"));
/// assert_eq!(art_locales::locale::language_name("cz"), None);
/// ```
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "zh" => Some("Chinese"),
        "lt" => Some("Lithuanian"),
        "lv" => Some("Latvian"),
        "et" => Some("Estonian"),
        "fr" => Some("French"),
        "cs" => Some("Czech"),
        "es" => Some("Spanish"),
        "uk" => Some("Ukrainian"),
        "de" => Some("German"),
        "pl" => Some("Polish"),
        "fi" => Some("Finnish"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "ru" => Some("Russian"),
        "pt" => Some("Portuguese"),
        "it" => Some("Italian"),
        "nl" => Some("Dutch"),
        _ => None,
    }
}

/// Native name, shown next to the code in listings.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "zh" => Some("中文"),
        "lt" => Some("Lietuvių"),
        "lv" => Some("Latviešu"),
        "et" => Some("Eesti"),
        "fr" => Some("Français"),
        "cs" => Some("Čeština"),
        "es" => Some("Español"),
        "uk" => Some("Українська"),
        "de" => Some("Deutsch"),
        "pl" => Some("Polski"),
        "fi" => Some("Suomi"),
        _ => None,
    }
}
