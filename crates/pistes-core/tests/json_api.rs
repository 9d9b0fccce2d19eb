//! Integration tests for the JSON API (FFI entrypoint).
//!
//! The FFI layer uses a consistent response envelope:
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "..."}}`

use pistes_core::ffi::{run_json, schema_version, version};
use serde_json::Value;

fn parse(result: &str) -> Value {
    serde_json::from_str(result).expect("should be valid JSON")
}

#[test]
fn run_json_version_mode() {
    let parsed = parse(&run_json("version", "{}"));
    assert_eq!(parsed.get("ok").and_then(|v| v.as_bool()), Some(true));

    let data = parsed.get("data").expect("should have data field");
    assert_eq!(data["version"], version());
    assert_eq!(data["schema_version"], schema_version());
}

#[test]
fn run_json_hints_mode() {
    let result = run_json("hints", r#"{"words": "casa, gos, peix."}"#);
    let parsed = parse(&result);
    assert_eq!(
        parsed.get("ok").and_then(|v| v.as_bool()),
        Some(true),
        "should return ok: true, got: {}",
        result
    );

    let data = &parsed["data"];
    assert_eq!(data["report"]["word_count"], 3);
    assert_eq!(data["report"]["schema_version"], schema_version());
    assert!(
        data["text"]
            .as_str()
            .unwrap()
            .starts_with("Has trobat 3 paraules")
    );
    assert_eq!(data["report"]["prefixes2"][0]["key"], "ca");
    assert_eq!(data["report"]["prefixes2"][0]["count"], 1);
}

#[test]
fn run_json_hints_mode_with_settings() {
    let result = run_json(
        "hints",
        r#"{"words": "casa, gos", "settings": {"totals_column": false}}"#,
    );
    let parsed = parse(&result);
    let text = parsed["data"]["text"].as_str().unwrap();
    assert!(!text.contains('∑'), "{text}");
}

#[test]
fn run_json_hints_mode_abort_policy_reports_malformed_expression() {
    let result = run_json(
        "hints",
        r#"{"words": "casa, i o", "settings": {"malformed": "abort"}}"#,
    );
    let parsed = parse(&result);
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "malformed_expression");
    assert_eq!(parsed["error"]["details"], "i o");
}

#[test]
fn run_json_hints_mode_out_of_range_top_percent() {
    let result = run_json("hints", r#"{"words": "casa", "settings": {"top_percent": 120}}"#);
    let parsed = parse(&result);
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "invalid_settings");
}

#[test]
fn run_json_merge_mode() {
    let result = run_json(
        "merge",
        r#"{
            "player1": {"name": "Anna", "words": "casa, gos, peix."},
            "player2": {"name": "Pau", "words": "casa, gat"}
        }"#,
    );
    let parsed = parse(&result);
    assert_eq!(parsed["ok"], true, "{result}");
    assert_eq!(parsed["data"]["text"], "Anna: gos, peix\n\nPau: gat");
    assert_eq!(parsed["data"]["report"]["missing_from_1"][0], "gat");
}

#[test]
fn run_json_merge_mode_self_labeling() {
    let result = run_json(
        "merge",
        r#"{
            "player1": {"name": "Anna", "words": "casa, gos"},
            "player2": {"name": "Pau", "words": "casa, gat"},
            "settings": {"labeling": "missing_from_self"}
        }"#,
    );
    let parsed = parse(&result);
    assert_eq!(parsed["data"]["text"], "Anna: gat\n\nPau: gos");
}

#[test]
fn run_json_normalize_mode() {
    let parsed = parse(&run_json("normalize", r#"{"word": "a la babalà"}"#));
    assert_eq!(parsed["ok"], true);
    assert_eq!(parsed["data"]["main_word"], "babala");
    assert_eq!(parsed["data"]["word"], "a la babalà");
}

#[test]
fn run_json_unknown_mode_returns_error() {
    let parsed = parse(&run_json("definitions", "{}"));
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "unknown_mode");
    assert!(
        parsed["error"]["message"]
            .as_str()
            .unwrap()
            .contains("definitions")
    );
}

#[test]
fn run_json_invalid_json_returns_error() {
    let parsed = parse(&run_json("hints", "{not json"));
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "invalid_json");
}

#[test]
fn run_json_wrong_field_type_returns_invalid_settings() {
    let parsed = parse(&run_json("hints", r#"{"words": ["casa"]}"#));
    assert_eq!(parsed["ok"], false);
    assert_eq!(parsed["error"]["code"], "invalid_settings");
}
