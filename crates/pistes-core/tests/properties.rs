//! Property-based tests for URI decoding and the JSON entry point.

use pistes_core::ffi::run_json;
use pistes_core::session::decode_uri;
use proptest::prelude::*;
use serde_json::Value;

fn percent_encode(text: &str) -> String {
    let mut out = String::new();
    for byte in text.bytes() {
        out.push_str(&format!("%{:02X}", byte));
    }
    out
}

proptest! {
    #[test]
    fn text_without_escapes_is_unchanged(text in "[^%]{0,40}") {
        prop_assert_eq!(decode_uri(&text), text);
    }

    #[test]
    fn encoded_words_decode_back(word in "[a-zàèéíïòóúüç·-]{0,16}") {
        prop_assert_eq!(decode_uri(&percent_encode(&word)), word);
    }

    #[test]
    fn reserved_escapes_survive(c in prop::sample::select(vec![';', '/', '?', ':', '@', '&', '=', '+', '$', ',', '#'])) {
        let escaped = percent_encode(&c.to_string());
        prop_assert_eq!(decode_uri(&escaped), escaped);
    }

    #[test]
    fn run_json_always_returns_an_envelope(mode in "[a-z]{0,10}", args in ".{0,40}") {
        let parsed: Value = serde_json::from_str(&run_json(&mode, &args)).expect("envelope is JSON");
        let ok = parsed["ok"].as_bool().expect("ok flag");
        prop_assert_eq!(ok, parsed.get("data").is_some());
        prop_assert_eq!(!ok, parsed.get("error").is_some());
    }

    #[test]
    fn hints_mode_counts_distinct_plain_words(words in prop::collection::btree_set("[a-z]{3,8}", 0..12)) {
        let list = words.iter().cloned().collect::<Vec<_>>().join(", ");
        let args = serde_json::json!({ "words": list }).to_string();
        let parsed: Value = serde_json::from_str(&run_json("hints", &args)).expect("envelope is JSON");
        prop_assert_eq!(&parsed["ok"], &Value::Bool(true));
        prop_assert_eq!(parsed["data"]["report"]["word_count"].as_u64(), Some(words.len() as u64));
    }
}
