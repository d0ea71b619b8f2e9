// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the array-to-catalog conversion run

use art_locales::config::{DuplicatePolicy, PipelineConfig};
use art_locales::convert::{self, ConvertConfig};
use art_locales::{loader, LocaleError};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_locale(root: &Path, locale: &str, body: &Value) {
    let dir = root.join(locale);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("art-pieces.json"),
        serde_json::to_string(body).unwrap(),
    )
    .unwrap();
}

fn config_for(root: &Path, locales: &[&str]) -> ConvertConfig {
    ConvertConfig {
        locales_dir: root.to_path_buf(),
        locales: locales.iter().map(|l| l.to_string()).collect(),
        filename: "art-pieces.json".to_string(),
        id_field: "art_id".to_string(),
        duplicate_policy: DuplicatePolicy::Reject,
        dry_run: false,
    }
}

fn sample_records() -> Value {
    json!([
        {
            "art_id": "capoo",
            "title": "Capoo",
            "blurb": "The bug-cat that started it all.",
            "desc": "Our first build.",
            "links": ["https://www.bugcat-capoo.com/"]
        },
        {
            "art_id": "krtek",
            "title": "Krtek",
            "blurb": "The little mole.",
            "desc": "Peeking out of a molehill.",
            "links": []
        },
        {
            "art_id": "vytis",
            "title": "Vytis",
            "blurb": "Lithuania's charging knight.",
            "desc": "From the coat of arms.",
            "links": [{"label": "Wikipedia", "url": "https://en.wikipedia.org/wiki/Vytis"}],
            "credit": "lt builders"
        }
    ])
}

#[test]
fn test_single_record_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_locale(
        dir.path(),
        "en",
        &json!([{"art_id": "capoo", "title": "T", "blurb": "B", "desc": "D", "links": []}]),
    );

    let summary = convert::run(&config_for(dir.path(), &["en"])).expect("conversion should succeed");
    assert_eq!(summary.total_records(), 1);

    let converted = loader::load_document(&dir.path().join("en/art-pieces.json")).unwrap();
    assert_eq!(
        converted,
        json!({"capoo": {"title": "T", "blurb": "B", "desc": "D", "links": []}})
    );
}

#[test]
fn test_key_set_matches_input_ids() {
    let dir = TempDir::new().unwrap();
    let input = sample_records();
    write_locale(dir.path(), "en", &input);

    convert::run(&config_for(dir.path(), &["en"])).unwrap();
    let converted = loader::load_document(&dir.path().join("en/art-pieces.json")).unwrap();

    let expected: BTreeSet<&str> = input
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["art_id"].as_str().unwrap())
        .collect();
    let actual: BTreeSet<&str> = converted
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(converted.as_object().unwrap().len(), 3);
}

#[test]
fn test_non_id_fields_are_preserved() {
    let dir = TempDir::new().unwrap();
    let input = sample_records();
    write_locale(dir.path(), "en", &input);

    convert::run(&config_for(dir.path(), &["en"])).unwrap();
    let converted = loader::load_document(&dir.path().join("en/art-pieces.json")).unwrap();

    for record in input.as_array().unwrap() {
        let mut expected = record.as_object().unwrap().clone();
        let art_id = expected.shift_remove("art_id").unwrap();
        let converted_record = &converted[art_id.as_str().unwrap()];
        assert_eq!(converted_record, &Value::Object(expected));
        assert!(converted_record.get("art_id").is_none());
    }
}

#[test]
fn test_output_is_four_space_indented() {
    let dir = TempDir::new().unwrap();
    write_locale(
        dir.path(),
        "zh",
        &json!([{"art_id": "giant-panda", "title": "大熊猫", "blurb": "", "desc": "", "links": []}]),
    );

    convert::run(&config_for(dir.path(), &["zh"])).unwrap();
    let text = fs::read_to_string(dir.path().join("zh/art-pieces.json")).unwrap();
    assert!(text.starts_with("{\n    \"giant-panda\": {\n        \"title\": \"大熊猫\","));
    assert!(text.ends_with("}\n"));
}

#[test]
fn test_every_configured_locale_is_converted() {
    let dir = TempDir::new().unwrap();
    for locale in ["en", "cz", "et", "lt", "zh"] {
        write_locale(dir.path(), locale, &sample_records());
    }

    let config = ConvertConfig::from_pipeline(&PipelineConfig {
        locales_dir: dir.path().to_path_buf(),
        ..PipelineConfig::default()
    });
    let summary = convert::run(&config).unwrap();

    let locales: Vec<&str> = summary
        .conversions
        .iter()
        .map(|c| c.locale.as_str())
        .collect();
    assert_eq!(locales, vec!["en", "cz", "et", "lt", "zh"]);
    assert!(summary.conversions.iter().all(|c| c.written && c.records == 3));
}

#[test]
fn test_second_run_fails_cleanly_without_touching_file() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "en", &sample_records());
    let config = config_for(dir.path(), &["en"]);

    convert::run(&config).unwrap();
    let path = dir.path().join("en/art-pieces.json");
    let after_first = fs::read(&path).unwrap();

    let err = convert::run(&config).unwrap_err();
    assert!(
        matches!(
            err,
            LocaleError::UnexpectedShape {
                found: "object",
                ..
            }
        ),
        "expected UnexpectedShape, got {:?}",
        err
    );
    assert_eq!(fs::read(&path).unwrap(), after_first);
}

#[test]
fn test_duplicate_ids_abort_before_write() {
    let dir = TempDir::new().unwrap();
    let input = json!([
        {"art_id": "capoo", "title": "first", "blurb": "", "desc": "", "links": []},
        {"art_id": "capoo", "title": "second", "blurb": "", "desc": "", "links": []}
    ]);
    write_locale(dir.path(), "en", &input);
    let path = dir.path().join("en/art-pieces.json");
    let before = fs::read(&path).unwrap();

    let err = convert::run(&config_for(dir.path(), &["en"])).unwrap_err();
    assert!(matches!(err, LocaleError::DuplicateKey { index: 1, .. }));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_duplicate_ids_last_wins_when_allowed() {
    let dir = TempDir::new().unwrap();
    write_locale(
        dir.path(),
        "en",
        &json!([
            {"art_id": "capoo", "title": "first", "blurb": "", "desc": "", "links": []},
            {"art_id": "capoo", "title": "second", "blurb": "", "desc": "", "links": []}
        ]),
    );

    let mut config = config_for(dir.path(), &["en"]);
    config.duplicate_policy = DuplicatePolicy::LastWins;
    let summary = convert::run(&config).unwrap();
    assert_eq!(summary.conversions[0].overwritten, vec!["capoo"]);

    let converted = loader::load_document(&dir.path().join("en/art-pieces.json")).unwrap();
    assert_eq!(converted["capoo"]["title"], json!("second"));
}

#[test]
fn test_missing_id_aborts_before_write() {
    let dir = TempDir::new().unwrap();
    write_locale(
        dir.path(),
        "en",
        &json!([{"title": "no id", "blurb": "", "desc": "", "links": []}]),
    );
    let path = dir.path().join("en/art-pieces.json");
    let before = fs::read(&path).unwrap();

    let err = convert::run(&config_for(dir.path(), &["en"])).unwrap_err();
    assert!(matches!(err, LocaleError::MissingKey { index: 0, .. }));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_run_stops_at_first_failing_locale() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "en", &sample_records());
    fs::create_dir_all(dir.path().join("cz")).unwrap();
    fs::write(dir.path().join("cz/art-pieces.json"), "[{\"art_id\": ").unwrap();
    write_locale(dir.path(), "et", &sample_records());

    let err = convert::run(&config_for(dir.path(), &["en", "cz", "et"])).unwrap_err();
    assert!(matches!(err, LocaleError::Parse { .. }));

    // en ran before the failure, et never ran.
    let en = loader::load_document(&dir.path().join("en/art-pieces.json")).unwrap();
    assert!(en.is_object());
    let et = loader::load_document(&dir.path().join("et/art-pieces.json")).unwrap();
    assert!(et.is_array());
}

#[test]
fn test_dry_run_leaves_files_untouched() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "en", &sample_records());
    let path = dir.path().join("en/art-pieces.json");
    let before = fs::read(&path).unwrap();

    let mut config = config_for(dir.path(), &["en"]);
    config.dry_run = true;
    let summary = convert::run(&config).unwrap();

    assert!(summary.dry_run);
    assert!(!summary.conversions[0].written);
    assert_eq!(summary.conversions[0].records, 3);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_missing_locale_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = convert::run(&config_for(dir.path(), &["lv"])).unwrap_err();
    assert!(matches!(err, LocaleError::Io { .. }));
}

#[test]
fn test_conversion_leaves_no_scratch_files() {
    let dir = TempDir::new().unwrap();
    write_locale(dir.path(), "lt", &sample_records());

    convert::run(&config_for(dir.path(), &["lt"])).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path().join("lt"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["art-pieces.json".to_string()]);
}
