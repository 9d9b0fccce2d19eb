//! # pistes-counter
//!
//! **Tier 0 (Counting)**
//!
//! A small multiset over string keys. Counts are built incrementally with
//! [`FrequencyCounter::add`] and rendered as `"key: count"` lists, either in
//! insertion order, lexicographically sorted, or restricted to the most
//! frequent fraction of keys.
//!
//! ## What belongs here
//! * Counting and ordering of string keys
//! * Deterministic `"key: count"` renderings
//!
//! ## What does NOT belong here
//! * Word normalization (use pistes-normalize)
//! * Report assembly (use pistes-analysis)

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Share of keys reported by [`FrequencyCounter::top_20_percent`].
pub const DEFAULT_TOP_PERCENT: u8 = 20;

/// How a counter is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterOrder {
    /// Lexicographic order of the rendered `"key: count"` strings.
    #[default]
    Sorted,
    /// Order in which keys were first added.
    Insertion,
}

/// One `key -> count` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterEntry {
    pub key: String,
    pub count: usize,
}

impl CounterEntry {
    fn render(&self) -> String {
        format!("{}: {}", self.key, self.count)
    }
}

/// Insertion-ordered frequency counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CounterEntry>", into = "Vec<CounterEntry>")]
pub struct FrequencyCounter {
    entries: Vec<CounterEntry>,
    index: BTreeMap<String, usize>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, starting at 1 for unseen keys.
    pub fn add(&mut self, key: impl Into<String>) {
        self.add_n(key, 1);
    }

    fn add_n(&mut self, key: impl Into<String>, n: usize) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].count += n,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(CounterEntry { key, count: n });
            }
        }
    }

    /// Count for `key`, or 0 when it was never added.
    #[must_use]
    pub fn get(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of `add` calls.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CounterEntry] {
        &self.entries
    }

    /// All pairs rendered as `"key: count"` and sorted lexicographically.
    #[must_use]
    pub fn to_sorted_string(&self) -> String {
        let mut rendered: Vec<String> = self.entries.iter().map(CounterEntry::render).collect();
        rendered.sort();
        rendered.join(", ")
    }

    /// All pairs rendered in insertion order.
    #[must_use]
    pub fn to_insertion_string(&self) -> String {
        join_entries(self.entries.iter())
    }

    #[must_use]
    pub fn render(&self, order: CounterOrder) -> String {
        match order {
            CounterOrder::Sorted => self.to_sorted_string(),
            CounterOrder::Insertion => self.to_insertion_string(),
        }
    }

    /// The most frequent `floor(len * percent / 100)` entries, by descending count.
    ///
    /// Ties keep insertion order. Small counters may yield an empty string:
    /// fewer than five keys never reach a single entry at 20 %.
    #[must_use]
    pub fn top_percent(&self, percent: u8) -> String {
        join_entries(self.top_entries(percent).into_iter())
    }

    #[must_use]
    pub fn top_20_percent(&self) -> String {
        self.top_percent(DEFAULT_TOP_PERCENT)
    }

    /// Entries kept by [`top_percent`](Self::top_percent).
    pub fn top_entries(&self, percent: u8) -> Vec<&CounterEntry> {
        let percent = usize::from(percent.min(100));
        let take = self.entries.len() * percent / 100;
        let mut ranked: Vec<&CounterEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(take);
        ranked
    }
}

fn join_entries<'a>(entries: impl Iterator<Item = &'a CounterEntry>) -> String {
    entries
        .map(CounterEntry::render)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for FrequencyCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_insertion_string())
    }
}

impl<K: Into<String>> FromIterator<K> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

impl From<Vec<CounterEntry>> for FrequencyCounter {
    fn from(entries: Vec<CounterEntry>) -> Self {
        let mut counter = Self::new();
        for entry in entries {
            counter.add_n(entry.key, entry.count);
        }
        counter
    }
}

impl From<FrequencyCounter> for Vec<CounterEntry> {
    fn from(counter: FrequencyCounter) -> Self {
        counter.entries
    }
}
