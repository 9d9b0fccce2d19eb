//! Fuzz target for word-list parsing and the hint pipeline.
//!
//! Validates:
//! - Parsing never yields a list for blank input
//! - Analysis with the skip policy never fails
//! - Every parsed word is either counted in the matrix or skipped

#![no_main]

use libfuzzer_sys::fuzz_target;
use pistes_analysis::analyze;
use pistes_normalize::{parse_unique_words, parse_word_list};
use pistes_settings::HintSettings;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let words = parse_word_list(input);
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "." {
        assert!(words.is_empty());
    }
    assert!(parse_unique_words(input).len() <= words.len());

    let report = analyze(input, &HintSettings::default()).expect("skip policy never fails");
    assert_eq!(report.word_count, words.len());
    assert_eq!(report.matrix.total() + report.skipped.len(), words.len());
});
