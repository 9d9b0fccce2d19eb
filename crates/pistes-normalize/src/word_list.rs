//! Comma-separated found-word lists, as copied from the game.

use std::collections::HashSet;

const SEPARATOR: &str = ", ";

/// Split `"casa, gos, peix."` into `["casa", "gos", "peix"]`.
///
/// Surrounding whitespace and one final period are removed first. Empty or
/// whitespace-only input yields no words at all, not a single empty word.
pub fn parse_word_list(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    let body = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if body.is_empty() {
        return Vec::new();
    }
    body.split(SEPARATOR).map(str::to_string).collect()
}

/// [`parse_word_list`] with duplicates removed, first occurrence kept.
pub fn parse_unique_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    parse_word_list(text)
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
