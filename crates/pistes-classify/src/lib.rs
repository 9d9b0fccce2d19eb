//! Pure word-shape predicates.

#![forbid(unsafe_code)]

/// True iff `word` reads the same backwards, compared character by character.
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// True iff `word` has even length and its first half repeats as the second.
#[must_use]
pub fn is_square(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() % 2 == 1 {
        return false;
    }
    let (first, second) = chars.split_at(chars.len() / 2);
    first == second
}

/// Sorted, de-duplicated letters of `word`, e.g. `"casa"` -> `"acs"`.
///
/// Words sharing a signature use exactly the same set of letters.
#[must_use]
pub fn subset_signature(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.dedup();
    letters.into_iter().collect()
}
