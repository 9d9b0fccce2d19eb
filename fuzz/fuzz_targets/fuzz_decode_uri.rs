//! Fuzz target for `decodeURI`-compatible decoding.
//!
//! Validates:
//! - No panics on arbitrary input, malformed escapes included
//! - Input without `%` is returned unchanged
//! - Decoding never grows the text

#![no_main]

use libfuzzer_sys::fuzz_target;
use pistes_core::session::decode_uri;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let decoded = decode_uri(input);
    if !input.contains('%') {
        assert_eq!(decoded, input);
    }
    assert!(decoded.len() <= input.len());
});
