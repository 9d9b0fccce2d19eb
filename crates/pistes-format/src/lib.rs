//! # pistes-format
//!
//! **Tier 2 (Formatting)**
//!
//! Renders hint and merge reports as the plain Catalan text shown to the
//! player. Blocks are separated by a blank line; the letter/length matrix is
//! tab-separated so it pastes cleanly into a spreadsheet.
//!
//! ## What belongs here
//! * Text layout of [`HintReport`] and [`MergeReport`]
//! * Catalan wording and pluralization
//!
//! ## What does NOT belong here
//! * Computing statistics (use pistes-analysis)
//! * JSON serialization (use pistes-core)

#![forbid(unsafe_code)]

use pistes_settings::{HintSettings, MergeLabeling};
use pistes_types::{HintReport, LetterLengthMatrix, MIN_WORD_LENGTH, MergeReport};

const BLOCK_SEPARATOR: &str = "\n\n";
const LIST_SEPARATOR: &str = ", ";
const TOTALS_HEADER: &str = "∑";

/// `singular` when `count == 1`, `plural` otherwise (zero included).
#[must_use]
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------
// Letter/length matrix
// ---------------------

/// Tab-separated first-letter by word-length table.
///
/// The header holds a blank cell, the lengths `3..=longest` and, with
/// `totals_column`, a `∑` cell. An empty matrix renders as the header alone.
#[must_use]
pub fn render_matrix(matrix: &LetterLengthMatrix, totals_column: bool) -> String {
    let lengths: Vec<usize> = match matrix.max_length() {
        Some(max) => (MIN_WORD_LENGTH..=max).collect(),
        None => Vec::new(),
    };

    let mut header = vec![String::new()];
    header.extend(lengths.iter().map(usize::to_string));
    if totals_column {
        header.push(TOTALS_HEADER.to_string());
    }

    let mut lines = vec![header.join("\t")];
    for row in &matrix.rows {
        let mut cells = vec![row.letter.to_string()];
        cells.extend(
            lengths
                .iter()
                .map(|&length| row.count_for_length(length).to_string()),
        );
        if totals_column {
            cells.push(row.total().to_string());
        }
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}

// ---------------------
// Hints
// ---------------------

/// Full hints text, one block per statistic.
#[must_use]
pub fn render_hints(report: &HintReport, settings: &HintSettings) -> String {
    let palindromes = report.palindromes.len();
    let squares = report.square_words.len();

    let mut blocks = vec![
        format!("Has trobat {} paraules", report.word_count),
        render_matrix(&report.matrix, settings.totals_column),
        format!(
            "Prefixos de dues lletres trobats: {}",
            report.prefixes2.render(settings.two_letter_prefix_order)
        ),
        format!(
            "Prefixos més freqüents de tres lletres trobats: {}",
            report.prefixes3.top_percent(settings.top_percent)
        ),
        format!(
            "Sufixos més freqüents de tres lletres trobats: {}",
            report.suffixes3.top_percent(settings.top_percent)
        ),
        format!(
            "Tens {} {}: {}",
            palindromes,
            pluralize(palindromes, "palíndrom", "palíndroms"),
            report.palindromes.join(LIST_SEPARATOR)
        ),
        format!(
            "Tens {} {}: {}",
            squares,
            pluralize(squares, "mot quadrat", "mots quadrats"),
            report.square_words.join(LIST_SEPARATOR)
        ),
        format!(
            "Subconjunts trobats: {}",
            report.subsets.render(settings.subset_order)
        ),
    ];

    if !report.skipped.is_empty() {
        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.raw.as_str()).collect();
        blocks.push(format!(
            "Paraules ignorades: {}",
            skipped.join(LIST_SEPARATOR)
        ));
    }

    blocks.join(BLOCK_SEPARATOR)
}

// ---------------------
// Merge
// ---------------------

/// Two lines, one per player, separated by a blank line.
#[must_use]
pub fn render_merge(report: &MergeReport, labeling: MergeLabeling) -> String {
    let (line1, line2) = match labeling {
        MergeLabeling::MissingFromOther => (&report.missing_from_2, &report.missing_from_1),
        MergeLabeling::MissingFromSelf => (&report.missing_from_1, &report.missing_from_2),
    };
    format!(
        "{}: {}{}{}: {}",
        report.player1_name,
        line1.join(LIST_SEPARATOR),
        BLOCK_SEPARATOR,
        report.player2_name,
        line2.join(LIST_SEPARATOR)
    )
}
