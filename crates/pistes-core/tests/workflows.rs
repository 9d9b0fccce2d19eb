//! Workflow tests: settings files feeding the hint and merge workflows.

use std::io::Write;

use pistes_core::error::{ErrorCode, PistesError};
use pistes_core::{PlayerWords, hints_workflow, load_settings, merge_workflow};
use pistes_core::settings::DiacriticTable;
use tempfile::NamedTempFile;

const WORDS: &str = "zoòleg, carrac, rere, casa, gos.";

#[test]
fn compact_settings_file_changes_rendering() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(
        file,
        "[hints]\ndiacritics = \"basic\"\ntotals_column = false\n\n[merge]\nlabeling = \"missing_from_self\""
    )
    .unwrap();

    let settings = load_settings(Some(file.path())).unwrap();
    assert_eq!(settings.hints.diacritics, DiacriticTable::Basic);

    let outcome = hints_workflow(WORDS, &settings.hints).unwrap();
    assert_eq!(outcome.report.word_count, 5);
    assert!(!outcome.text.contains('∑'));

    let merged = merge_workflow(
        &PlayerWords::new("A", "casa, gos"),
        &PlayerWords::new("B", "casa"),
        &settings.merge,
    );
    assert_eq!(merged.text, "A: \n\nB: gos");
}

#[test]
fn json_settings_file_is_accepted() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(file, r#"{{"hints": {{"top_percent": 100}}}}"#).unwrap();

    let settings = load_settings(Some(file.path())).unwrap();
    assert_eq!(settings.hints.top_percent, 100);

    let outcome = hints_workflow("casa, cas, gos", &settings.hints).unwrap();
    assert!(
        outcome
            .text
            .contains("Prefixos més freqüents de tres lletres trobats: cas: 2, gos: 1")
    );
}

#[test]
fn missing_settings_file_reports_path() {
    let err = load_settings(Some(std::path::Path::new("/nonexistent/pistes.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/pistes.toml"));
}

#[test]
fn invalid_settings_file_maps_to_invalid_settings_code() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "[hints]\ntop_percent = 250").unwrap();

    let err = load_settings(Some(file.path())).unwrap_err();
    let err: PistesError = err.into();
    assert_eq!(err.code, ErrorCode::InvalidSettings);
}
