//! FFI-friendly JSON entrypoint for language bindings.
//!
//! This module provides a single `run_json` function that accepts
//! a mode string and JSON arguments, returning a JSON result.
//! It is what the browser wrapper calls for anything beyond the plain
//! text actions.
//!
//! ## Response Envelope
//!
//! All responses use a consistent envelope format:
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Strict Parsing
//!
//! - Missing keys use sensible defaults
//! - Invalid values return errors (no silent fallback to defaults)

use pistes_normalize::normalize_word;
use pistes_settings::{DiacriticTable, HintSettings, MergeSettings};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::{ErrorCode, PistesError, ResponseEnvelope};
use crate::{PlayerWords, hints_workflow, merge_workflow};

/// Crate version reported by the `version` mode.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Schema version of the JSON hint and merge receipts.
pub fn schema_version() -> u32 {
    pistes_types::SCHEMA_VERSION
}

/// Run a pistes operation with JSON arguments, returning JSON output.
///
/// # Modes
///
/// * `hints` - `{"words": "...", "settings": {...}}`
/// * `merge` - `{"player1": {"name", "words"}, "player2": {...}, "settings": {...}}`
/// * `normalize` - `{"word": "...", "diacritics": "extended"}`
/// * `version` - `{}`
///
/// # Example
///
/// ```
/// use pistes_core::ffi::run_json;
///
/// let result = run_json("normalize", r#"{"word": "arruar-se"}"#);
/// assert!(result.starts_with(r#"{"ok":true"#));
/// assert!(result.contains(r#""main_word":"arruar""#));
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => ResponseEnvelope::error(&err).to_json(),
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, PistesError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !args.is_object() {
        return Err(PistesError::invalid_json("arguments must be a JSON object"));
    }

    match mode {
        "hints" => {
            let words = parse_string(&args, "words", "")?;
            let settings: HintSettings = parse_section(&args, "settings")?;
            let outcome = hints_workflow(&words, &settings)?;
            Ok(serde_json::to_value(&outcome)?)
        }
        "merge" => {
            let player1: PlayerWords = parse_section(&args, "player1")?;
            let player2: PlayerWords = parse_section(&args, "player2")?;
            let settings: MergeSettings = parse_section(&args, "settings")?;
            let outcome = merge_workflow(&player1, &player2, &settings);
            Ok(serde_json::to_value(&outcome)?)
        }
        "normalize" => {
            let word = parse_string(&args, "word", "")?;
            let table: DiacriticTable = parse_section(&args, "diacritics")?;
            let main = normalize_word(&word, table).map_err(|err| {
                PistesError::with_details(
                    ErrorCode::MalformedExpression,
                    err.to_string(),
                    word.clone(),
                )
            })?;
            Ok(json!({ "word": word, "main_word": main }))
        }
        "version" => Ok(json!({
            "version": version(),
            "schema_version": schema_version(),
        })),
        _ => Err(PistesError::unknown_mode(mode)),
    }
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

/// Parse a string field strictly: missing/null -> default, non-string -> error.
fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, PistesError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| PistesError::invalid_field(field, "a string")),
    }
}

/// Deserialize a nested section: missing/null -> `Default`, bad shape -> error.
fn parse_section<T: DeserializeOwned + Default>(
    args: &Value,
    field: &str,
) -> Result<T, PistesError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(v) => serde_json::from_value(v.clone()).map_err(|err| {
            PistesError::invalid_settings(format!("'{}': {}", field, err))
        }),
    }
}
