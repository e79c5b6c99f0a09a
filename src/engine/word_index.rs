//! Ordered index of every word occurrence.

use std::collections::BTreeMap;

/// Sorted word store with duplicate counts.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: BTreeMap<String, usize>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) {
        *self.words.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Returns the stored word when present.
    pub fn search(&self, word: &str) -> Option<&str> {
        self.words.get_key_value(word).map(|(k, _)| k.as_str())
    }

    /// Number of stored occurrences, duplicates included.
    pub fn occurrences(&self) -> usize {
        self.words.values().sum()
    }
}
