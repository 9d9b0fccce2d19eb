//! # pistes-merge
//!
//! **Tier 2 (Results Merging)**
//!
//! Compares the found-word lists of two players. Words are compared exactly
//! as pasted (no normalization), so `metà` and `meta` are different words.
//!
//! ## What belongs here
//! * Set difference of two word lists
//! * Merge text assembly
//!
//! ## What does NOT belong here
//! * Hint statistics (use pistes-analysis)
//! * Clipboard and surface handling (use pistes-core)
//!
//! ## Example
//! ```
//! use pistes_merge::merge;
//!
//! let report = merge("casa, gos, peix.", "casa, gat", "Anna", "Pau");
//! assert_eq!(report.missing_from_2, vec!["gos", "peix"]);
//! assert_eq!(report.missing_from_1, vec!["gat"]);
//! ```

#![forbid(unsafe_code)]

use std::collections::HashSet;

use pistes_format::render_merge;
use pistes_normalize::parse_unique_words;
use pistes_settings::MergeSettings;
use pistes_types::MergeReport;
use tracing::debug;

/// Words of `words` absent from `other`, in `words` order.
fn difference(words: &[String], other: &HashSet<&str>) -> Vec<String> {
    words
        .iter()
        .filter(|word| !other.contains(word.as_str()))
        .cloned()
        .collect()
}

/// Compute both set differences between two raw word lists.
pub fn merge(raw1: &str, raw2: &str, name1: &str, name2: &str) -> MergeReport {
    let words1 = parse_unique_words(raw1);
    let words2 = parse_unique_words(raw2);
    let set1: HashSet<&str> = words1.iter().map(String::as_str).collect();
    let set2: HashSet<&str> = words2.iter().map(String::as_str).collect();

    let report = MergeReport {
        player1_name: name1.to_string(),
        player2_name: name2.to_string(),
        missing_from_2: difference(&words1, &set2),
        missing_from_1: difference(&words2, &set1),
    };

    debug!(
        player1_words = words1.len(),
        player2_words = words2.len(),
        missing_from_2 = report.missing_from_2.len(),
        missing_from_1 = report.missing_from_1.len(),
        "Merge complete"
    );
    report
}

/// [`merge`] followed by rendering with the configured labeling.
pub fn merge_to_string(
    raw1: &str,
    raw2: &str,
    name1: &str,
    name2: &str,
    settings: &MergeSettings,
) -> String {
    let report = merge(raw1, raw2, name1, name2);
    render_merge(&report, settings.labeling)
}
