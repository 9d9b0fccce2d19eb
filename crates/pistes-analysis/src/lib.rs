//! # pistes-analysis
//!
//! **Tier 2 (Hint Derivation)**
//!
//! One pass over a list of found words. Each word is reduced to its main
//! word, then fed to the letter/length matrix, the prefix and suffix
//! counters, the palindrome and square-word lists and the subset counter.
//!
//! ## What belongs here
//! * The [`WordAnalyzer`] accumulator and the [`analyze`] entry point
//! * Policy for malformed words
//!
//! ## What does NOT belong here
//! * Text rendering (use pistes-format)
//! * Merging two players' lists (use pistes-merge)
//!
//! ## Example
//! ```
//! use pistes_analysis::analyze;
//! use pistes_settings::HintSettings;
//!
//! let report = analyze("casa, gos, peix.", &HintSettings::default()).unwrap();
//! assert_eq!(report.word_count, 3);
//! assert!(report.palindromes.is_empty());
//! ```

#![forbid(unsafe_code)]

mod affix;

use pistes_classify::{is_palindrome, is_square, subset_signature};
use pistes_normalize::{NormalizeError, normalize_word, parse_word_list};
use pistes_settings::{HintSettings, MalformedPolicy};
use pistes_types::{HintReport, SkippedWord};
use thiserror::Error;
use tracing::{debug, debug_span, warn};

pub use affix::{prefix, suffix};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("word #{index} {word:?} has no main word")]
    MalformedExpression {
        index: usize,
        word: String,
        #[source]
        source: NormalizeError,
    },
}

/// Accumulates hint statistics one word at a time.
///
/// A fresh analyzer is created per run; nothing is shared between runs.
#[derive(Debug, Clone)]
pub struct WordAnalyzer<'a> {
    settings: &'a HintSettings,
    report: HintReport,
}

impl<'a> WordAnalyzer<'a> {
    pub fn new(settings: &'a HintSettings) -> Self {
        Self {
            settings,
            report: HintReport::empty(),
        }
    }

    /// Feed the next raw word of the list.
    ///
    /// With [`MalformedPolicy::Skip`] a word without a main word is recorded as
    /// skipped and `Ok(())` is returned.
    pub fn process_word(&mut self, raw: &str) -> Result<(), AnalysisError> {
        let index = self.report.word_count;
        self.report.word_count += 1;

        let main = match normalize_word(raw, self.settings.diacritics) {
            Ok(main) => main,
            Err(source) => return self.reject(index, raw, source),
        };
        self.record(&main);
        Ok(())
    }

    fn reject(
        &mut self,
        index: usize,
        raw: &str,
        source: NormalizeError,
    ) -> Result<(), AnalysisError> {
        match self.settings.malformed {
            MalformedPolicy::Abort => Err(AnalysisError::MalformedExpression {
                index,
                word: raw.to_string(),
                source,
            }),
            MalformedPolicy::Skip => {
                warn!(index, word = raw, "skipping word without a main word");
                self.report.skipped.push(SkippedWord {
                    index,
                    raw: raw.to_string(),
                    reason: source.to_string(),
                });
                Ok(())
            }
        }
    }

    fn record(&mut self, main: &str) {
        let report = &mut self.report;
        let length = main.chars().count();
        if let Some(first) = main.chars().next() {
            report.matrix.record(first, length);
        }

        report.prefixes2.add(prefix(main, 2));
        report.prefixes3.add(prefix(main, 3));
        report.suffixes3.add(suffix(main, 3));

        if is_palindrome(main) {
            report.palindromes.push(main.to_string());
        }
        if is_square(main) {
            report.square_words.push(main.to_string());
        }
        report.subsets.add(subset_signature(main));
    }

    /// Report built so far.
    pub fn report(&self) -> &HintReport {
        &self.report
    }

    pub fn finish(self) -> HintReport {
        self.report
    }
}

/// Analyze an already parsed word list.
pub fn analyze_words<S: AsRef<str>>(
    words: &[S],
    settings: &HintSettings,
) -> Result<HintReport, AnalysisError> {
    let _span = debug_span!("analyze", words = words.len()).entered();

    let mut analyzer = WordAnalyzer::new(settings);
    for word in words {
        analyzer.process_word(word.as_ref())?;
    }
    let report = analyzer.finish();

    debug!(
        letters = report.matrix.rows.len(),
        palindromes = report.palindromes.len(),
        squares = report.square_words.len(),
        subsets = report.subsets.len(),
        skipped = report.skipped.len(),
        "Analysis complete"
    );
    Ok(report)
}

/// Parse `text` as a comma-separated word list and analyze it.
///
/// Empty input is not an error: the report simply has no words.
pub fn analyze(text: &str, settings: &HintSettings) -> Result<HintReport, AnalysisError> {
    let words = parse_word_list(text);
    analyze_words(&words, settings)
}
