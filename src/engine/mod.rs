//! In-memory word analysis engine.
//!
//! The engine learns from every sentence it is shown and answers four kinds
//! of questions about the vocabulary seen so far.
//!
//! # Components
//!
//! - [`Trie`]: prefix completion
//! - [`BigramModel`]: next-word prediction
//! - [`WordIndex`]: ordered lookup of stored words
//! - [`WordGraph`]: which words follow which
//!
//! # Example
//!
//! ```rust
//! use word_insight_chat::engine::TextEngine;
//!
//! let mut engine = TextEngine::new();
//! let payload = engine.analyze("the cat sat on the mat");
//!
//! assert_eq!(payload.last_word, "mat");
//! assert_eq!(payload.top_words, "the, cat, sat");
//! ```

mod bigram;
mod graph;
mod trie;
mod word_index;

pub use bigram::BigramModel;
pub use graph::WordGraph;
pub use trie::Trie;
pub use word_index::WordIndex;

use indexmap::IndexMap;

use crate::protocol::ResponsePayload;

/// Number of words reported in `top_words`.
pub const TOP_WORDS: usize = 3;

/// Placeholder shown for empty results.
pub const NONE_LABEL: &str = "None";

/// Combined word analysis engine.
#[derive(Debug, Clone, Default)]
pub struct TextEngine {
    trie: Trie,
    index: WordIndex,
    graph: WordGraph,
    bigrams: BigramModel,
    frequency: FrequencyCounter,
}

impl TextEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn from one sentence. Tokens are the whitespace-separated pieces,
    /// case and punctuation preserved.
    pub fn add_sentence(&mut self, sentence: &str) {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        for word in &words {
            self.frequency.add(word);
            self.trie.insert(word);
            self.index.insert(word);
        }
        for pair in words.windows(2) {
            self.graph.add_relationship(pair[0], pair[1]);
        }
        self.bigrams.add_sentence(&words);
    }

    /// The `n` most frequent words, ties in first-seen order.
    pub fn common_words(&self, n: usize) -> Vec<&str> {
        self.frequency.most_common(n)
    }

    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        self.trie.search(prefix)
    }

    pub fn predict_next_word(&self, word: &str) -> Option<&str> {
        self.bigrams.predict_next_word(word)
    }

    pub fn search_word(&self, word: &str) -> Option<&str> {
        self.index.search(word)
    }

    pub fn related_words(&self, word: &str) -> Vec<&str> {
        self.graph.related_words(word)
    }

    /// Total number of words learned, duplicates included.
    pub fn word_count(&self) -> usize {
        self.index.occurrences()
    }

    /// Learn from `message`, then report on its last word.
    pub fn analyze(&mut self, message: &str) -> ResponsePayload {
        self.add_sentence(message);

        let last_word = message.split_whitespace().last().unwrap_or_default();

        ResponsePayload {
            last_word: last_word.to_string(),
            top_words: format_list(&self.common_words(TOP_WORDS)),
            suggestions: format_list(&self.search_prefix(last_word)),
            next_word: self
                .predict_next_word(last_word)
                .unwrap_or(NONE_LABEL)
                .to_string(),
            related_words: format_list(&self.related_words(last_word)),
        }
    }
}

/// Join with `", "`, or [`NONE_LABEL`] when empty.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return NONE_LABEL.to_string();
    }
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Word counts that remember first-seen order.
#[derive(Debug, Clone, Default)]
struct FrequencyCounter {
    counts: IndexMap<String, usize>,
}

impl FrequencyCounter {
    fn add(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    fn most_common(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked.into_iter().take(n).map(|(w, _)| w.as_str()).collect()
    }
}
