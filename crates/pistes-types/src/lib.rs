//! # pistes-types
//!
//! **Tier 0 (Report Contracts)**
//!
//! Pure data structures shared by the hint and merge pipelines. No parsing,
//! no rendering.
//!
//! ## What belongs here
//! * Hint and merge report types
//! * Option enums shared by settings, analysis and formatting
//!
//! ## What does NOT belong here
//! * Word normalization (use pistes-normalize)
//! * Text rendering (use pistes-format)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use pistes_counter::{CounterEntry, CounterOrder, DEFAULT_TOP_PERCENT, FrequencyCounter};

/// Schema version for JSON hint and merge receipts.
pub const SCHEMA_VERSION: u32 = 1;

/// Shortest main word tracked by the letter/length matrix.
pub const MIN_WORD_LENGTH: usize = 3;

// -----------------
// Shared options
// -----------------

/// Which accented vowels are folded to their base letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiacriticTable {
    /// à é è í ï ó ò ö ú ü
    #[default]
    Extended,
    /// Same as `Extended` without `ö`.
    Basic,
}

/// What to do with a word that has no main word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Record the word in [`HintReport::skipped`] and continue.
    #[default]
    Skip,
    /// Fail the whole analysis on the first malformed word.
    Abort,
}

/// Which difference is printed next to each player's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeLabeling {
    /// Player 1's line lists the words player 2 is missing, and vice versa.
    #[default]
    MissingFromOther,
    /// Each player's line lists the words that player is missing.
    MissingFromSelf,
}

// -----------------
// Letter/length matrix
// -----------------

/// Counts of main words sharing a first letter, keyed by `length - 3`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRow {
    pub letter: char,
    pub counts: BTreeMap<usize, usize>,
}

impl LetterRow {
    /// Count for words of exactly `length` characters.
    #[must_use]
    pub fn count_for_length(&self, length: usize) -> usize {
        length
            .checked_sub(MIN_WORD_LENGTH)
            .and_then(|offset| self.counts.get(&offset))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Longest word length recorded in this row.
    pub fn max_length(&self) -> Option<usize> {
        self.counts
            .keys()
            .next_back()
            .map(|offset| offset + MIN_WORD_LENGTH)
    }
}

/// First-letter by word-length table. Rows keep first-encountered order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterLengthMatrix {
    pub rows: Vec<LetterRow>,
}

impl LetterLengthMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one word. Returns `false` (and records nothing) below three letters.
    pub fn record(&mut self, letter: char, length: usize) -> bool {
        let Some(offset) = length.checked_sub(MIN_WORD_LENGTH) else {
            return false;
        };
        let row = match self.rows.iter().position(|row| row.letter == letter) {
            Some(idx) => &mut self.rows[idx],
            None => {
                self.rows.push(LetterRow {
                    letter,
                    counts: BTreeMap::new(),
                });
                let last = self.rows.len() - 1;
                &mut self.rows[last]
            }
        };
        *row.counts.entry(offset).or_insert(0) += 1;
        true
    }

    pub fn row(&self, letter: char) -> Option<&LetterRow> {
        self.rows.iter().find(|row| row.letter == letter)
    }

    /// Longest word length across all rows.
    pub fn max_length(&self) -> Option<usize> {
        self.rows.iter().filter_map(LetterRow::max_length).max()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().map(LetterRow::total).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// -----------------
// Reports
// -----------------

/// A word left out of a hint report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedWord {
    /// Position in the parsed word list.
    pub index: usize,
    pub raw: String,
    pub reason: String,
}

/// Statistics derived from one list of found words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintReport {
    pub schema_version: u32,
    /// Number of parsed words, skipped ones included.
    pub word_count: usize,
    pub matrix: LetterLengthMatrix,
    pub prefixes2: FrequencyCounter,
    pub prefixes3: FrequencyCounter,
    pub suffixes3: FrequencyCounter,
    pub palindromes: Vec<String>,
    pub square_words: Vec<String>,
    pub subsets: FrequencyCounter,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedWord>,
}

impl HintReport {
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ..Default::default()
        }
    }
}

/// Set differences between two players' found words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    pub player1_name: String,
    pub player2_name: String,
    /// Words player 1 found that player 2 did not, in player 1's order.
    pub missing_from_2: Vec<String>,
    /// Words player 2 found that player 1 did not, in player 2's order.
    pub missing_from_1: Vec<String>,
}
