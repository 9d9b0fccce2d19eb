//! Fuzz target for main-word extraction.
//!
//! Validates:
//! - No panics on arbitrary UTF-8 input (multi-byte characters included)
//! - A main word is at least three `[a-zç]` characters
//! - Diacritic and dash removal is idempotent

#![no_main]

use libfuzzer_sys::fuzz_target;
use pistes_normalize::{is_word_char, normalize_word, remove_diacritics_and_dashes};
use pistes_types::DiacriticTable;

const MAX_INPUT_SIZE: usize = 4 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    for table in [DiacriticTable::Extended, DiacriticTable::Basic] {
        let once = remove_diacritics_and_dashes(input, table);
        let twice = remove_diacritics_and_dashes(&once, table);
        assert_eq!(once, twice, "removal must be idempotent for {input:?}");
        assert!(!once.contains('-'));

        if let Ok(main) = normalize_word(input, table) {
            assert!(main.chars().count() >= 3, "{input:?} -> {main:?}");
            assert!(main.chars().all(is_word_char), "{input:?} -> {main:?}");
        }
    }
});
