//! Character-based prefixes and suffixes (`ç` counts as one letter).

/// First `n` characters of `word`, or the whole word when shorter.
pub fn prefix(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}

/// Last `n` characters of `word`, or the whole word when shorter.
pub fn suffix(word: &str, n: usize) -> &str {
    if n == 0 {
        return &word[word.len()..];
    }
    match word.char_indices().rev().nth(n - 1) {
        Some((start, _)) => &word[start..],
        None => word,
    }
}
