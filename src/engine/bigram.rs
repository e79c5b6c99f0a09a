//! Bigram model for next-word prediction.

use std::collections::HashMap;

use indexmap::IndexMap;

/// Counts of `(word, next)` pairs.
#[derive(Debug, Clone, Default)]
pub struct BigramModel {
    /// Followers of each word, in first-seen order.
    followers: HashMap<String, IndexMap<String, usize>>,
}

impl BigramModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every consecutive pair in `words`.
    pub fn add_sentence<S: AsRef<str>>(&mut self, words: &[S]) {
        for pair in words.windows(2) {
            let (current, next) = (pair[0].as_ref(), pair[1].as_ref());
            *self
                .followers
                .entry(current.to_string())
                .or_default()
                .entry(next.to_string())
                .or_insert(0) += 1;
        }
    }

    /// Most frequent follower of `word`. Ties go to the follower seen first.
    pub fn predict_next_word(&self, word: &str) -> Option<&str> {
        let counts = self.followers.get(word)?;
        let mut best: Option<(&String, usize)> = None;
        for (candidate, &count) in counts {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((candidate, count));
            }
        }
        best.map(|(w, _)| w.as_str())
    }
}
