//! Fuzz target for the `run_json` FFI entrypoint.
//!
//! Validates:
//! - No panics for any mode and argument string
//! - The output is always a JSON envelope with a boolean `ok`

#![no_main]

use libfuzzer_sys::fuzz_target;
use pistes_core::ffi::run_json;
use serde_json::Value;

const MAX_INPUT_SIZE: usize = 16 * 1024;
const MODES: [&str; 5] = ["hints", "merge", "normalize", "version", "bogus"];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > MAX_INPUT_SIZE {
        return;
    }
    let mode = MODES[usize::from(data[0]) % MODES.len()];
    let Ok(args) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    let output = run_json(mode, args);
    let envelope: Value = serde_json::from_str(&output).expect("envelope must be JSON");
    let ok = envelope["ok"].as_bool().expect("envelope must carry ok");
    if ok {
        assert!(envelope.get("data").is_some());
    } else {
        assert!(envelope["error"]["code"].is_string());
    }
});
