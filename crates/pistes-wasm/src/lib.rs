//! Browser bindings for pistes.
//!
//! `wasm-bindgen` exports used by the helper page. The page keeps the DOM,
//! clipboard and tab handling; these functions take the text box contents
//! and return the text to show.

#![forbid(unsafe_code)]

use pistes_core::error::PistesError;
use pistes_core::settings::{HintSettings, MergeSettings};
use pistes_core::{PlayerWords, hints_workflow, merge_workflow};
use wasm_bindgen::prelude::*;

fn parse_settings<T: Default + serde::de::DeserializeOwned>(
    json: Option<&str>,
) -> Result<T, PistesError> {
    match json.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => serde_json::from_str(text).map_err(PistesError::invalid_settings),
    }
}

fn find_hints_text(words: &str, settings_json: Option<&str>) -> Result<String, PistesError> {
    let settings: HintSettings = parse_settings(settings_json)?;
    let outcome = hints_workflow(words, &settings)?;
    Ok(outcome.text)
}

fn merge_results_text(
    player1: PlayerWords,
    player2: PlayerWords,
    settings_json: Option<&str>,
) -> Result<String, PistesError> {
    let settings: MergeSettings = parse_settings(settings_json)?;
    Ok(merge_workflow(&player1, &player2, &settings).text)
}

fn to_js_error(err: PistesError) -> js_sys::Error {
    js_sys::Error::new(&err.to_string())
}

/// Get the pistes version string.
///
/// @example
/// ```javascript
/// import { version } from 'pistes';
/// console.log(version()); // "0.3.0"
/// ```
#[wasm_bindgen]
pub fn version() -> String {
    pistes_core::ffi::version().to_string()
}

/// Get the JSON schema version.
#[wasm_bindgen(js_name = schemaVersion)]
pub fn schema_version() -> u32 {
    pistes_core::ffi::schema_version()
}

/// Derive the hints text from a pasted word list.
///
/// @param words - Comma-separated found words, as copied from the game
/// @param settingsJson - Optional hint settings as JSON (e.g. `{"totals_column": false}`)
/// @throws Error when the settings are invalid or a word is malformed under the abort policy
#[wasm_bindgen(js_name = findHints)]
pub fn find_hints(words: &str, settings_json: Option<String>) -> Result<String, js_sys::Error> {
    find_hints_text(words, settings_json.as_deref()).map_err(to_js_error)
}

/// Merge two players' results into the two-line comparison text.
///
/// @throws Error when the settings are invalid
#[wasm_bindgen(js_name = mergeResults)]
pub fn merge_results(
    name1: &str,
    words1: &str,
    name2: &str,
    words2: &str,
    settings_json: Option<String>,
) -> Result<String, js_sys::Error> {
    merge_results_text(
        PlayerWords::new(name1, words1),
        PlayerWords::new(name2, words2),
        settings_json.as_deref(),
    )
    .map_err(to_js_error)
}

/// `decodeURI` that never throws: malformed escapes are kept as-is.
#[wasm_bindgen(js_name = decodeUri)]
pub fn decode_uri(text: &str) -> String {
    pistes_core::session::decode_uri(text)
}

/// Run a pistes operation with JSON arguments, returning the JSON envelope.
///
/// @param mode - "hints", "merge", "normalize" or "version"
/// @param argsJson - JSON string containing the arguments
///
/// @example
/// ```javascript
/// import { runJson } from 'pistes';
/// const data = JSON.parse(runJson("hints", JSON.stringify({ words: "casa, gos" })));
/// ```
#[wasm_bindgen(js_name = runJson)]
pub fn run_json(mode: &str, args_json: &str) -> String {
    pistes_core::ffi::run_json(mode, args_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pistes_core::error::ErrorCode;

    #[test]
    fn find_hints_text_uses_defaults_without_settings() {
        let text = find_hints_text("casa, gos, peix.", None).unwrap();
        assert!(text.starts_with("Has trobat 3 paraules"));
        assert!(text.contains('∑'));
    }

    #[test]
    fn find_hints_text_treats_blank_settings_as_defaults() {
        assert_eq!(
            find_hints_text("casa", Some("  ")).unwrap(),
            find_hints_text("casa", None).unwrap()
        );
    }

    #[test]
    fn find_hints_text_applies_settings() {
        let text = find_hints_text("casa, gos", Some(r#"{"totals_column": false}"#)).unwrap();
        assert!(!text.contains('∑'));
    }

    #[test]
    fn find_hints_text_rejects_bad_settings() {
        let err = find_hints_text("casa", Some("{oops")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSettings);
    }

    #[test]
    fn merge_results_text_default_labeling() {
        let text = merge_results_text(
            PlayerWords::new("Anna", "casa, gos, peix."),
            PlayerWords::new("Pau", "casa, gat"),
            None,
        )
        .unwrap();
        assert_eq!(text, "Anna: gos, peix\n\nPau: gat");
    }

    #[test]
    fn plain_exports_delegate_to_core() {
        assert_eq!(decode_uri("ca%C3%A7a"), "caça");
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(run_json("version", "{}").starts_with(r#"{"ok":true"#));
    }
}
