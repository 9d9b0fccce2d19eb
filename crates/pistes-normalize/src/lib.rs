//! # pistes-normalize
//!
//! **Tier 1 (Text Normalization)**
//!
//! Turns raw found words and expressions into their canonical *main word*:
//! accents folded, reflexive `-se` and dashes dropped, auxiliary one- and
//! two-letter tokens discarded. Also owns the parsing of comma-separated
//! word lists.
//!
//! ## Example
//! ```
//! use pistes_normalize::normalize_word;
//! use pistes_types::DiacriticTable;
//!
//! assert_eq!(normalize_word("a la babalà", DiacriticTable::Extended).unwrap(), "babala");
//! assert_eq!(normalize_word("arruar-se", DiacriticTable::Extended).unwrap(), "arruar");
//! ```

#![forbid(unsafe_code)]

mod word_list;

use pistes_types::{DiacriticTable, MIN_WORD_LENGTH};
use thiserror::Error;

pub use word_list::{parse_unique_words, parse_word_list};

/// Reflexive suffix removed before generic dash stripping.
const REFLEXIVE_SUFFIX: &str = "-se";
const INTERPUNCT: char = '·';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// No run of three or more letters survives normalization.
    #[error("no main word of 3+ letters in {word:?}")]
    NoMainWord { word: String },
}

fn fold_char(c: char, table: DiacriticTable) -> char {
    match c {
        'à' => 'a',
        'é' | 'è' => 'e',
        'í' | 'ï' => 'i',
        'ó' | 'ò' => 'o',
        'ö' if table == DiacriticTable::Extended => 'o',
        'ú' | 'ü' => 'u',
        other => other,
    }
}

/// Fold accented vowels, then drop `-se`, remaining dashes and the interpunct.
///
/// `-se` must go before the other dashes: `arruar-se` becomes `arruar`,
/// never `arruarse`.
#[must_use]
pub fn remove_diacritics_and_dashes(word: &str, table: DiacriticTable) -> String {
    let folded: String = word.chars().map(|c| fold_char(c, table)).collect();
    folded
        .replace(REFLEXIVE_SUFFIX, "")
        .chars()
        .filter(|&c| c != '-' && c != INTERPUNCT)
        .collect()
}

/// Whether `c` can be part of a main word.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ç'
}

/// Return the first maximal run of at least three `[a-zç]` characters.
pub fn extract_main_word(word: &str) -> Result<&str, NormalizeError> {
    let mut run_start: Option<usize> = None;
    let mut run_len = 0usize;

    for (idx, c) in word.char_indices() {
        if is_word_char(c) {
            if run_start.is_none() {
                run_start = Some(idx);
                run_len = 0;
            }
            run_len += 1;
            continue;
        }
        if let Some(start) = run_start.take()
            && run_len >= MIN_WORD_LENGTH
        {
            return Ok(&word[start..idx]);
        }
    }

    match run_start {
        Some(start) if run_len >= MIN_WORD_LENGTH => Ok(&word[start..]),
        _ => Err(NormalizeError::NoMainWord {
            word: word.to_string(),
        }),
    }
}

/// Full pipeline: [`remove_diacritics_and_dashes`] then [`extract_main_word`].
pub fn normalize_word(word: &str, table: DiacriticTable) -> Result<String, NormalizeError> {
    let stripped = remove_diacritics_and_dashes(word, table);
    match extract_main_word(&stripped) {
        Ok(main) => Ok(main.to_string()),
        Err(_) => Err(NormalizeError::NoMainWord {
            word: word.to_string(),
        }),
    }
}
