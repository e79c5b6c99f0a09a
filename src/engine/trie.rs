//! Prefix trie used for word auto-completion.

/// Arena-backed prefix tree.
///
/// Children keep insertion order so completions come back in the order their
/// branches were first created.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: Vec<(char, usize)>,
    terminal: bool,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    const ROOT: usize = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a word. Inserting the same word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = Self::ROOT;
        for ch in word.chars() {
            node = match self.child(node, ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.push((ch, next));
                    next
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// Every stored word starting with `prefix`, depth-first.
    ///
    /// The empty prefix matches every stored word.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut buf = prefix.to_string();
        self.collect(start, &mut buf, &mut results);
        results
    }

    fn find(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |node, ch| self.child(node, ch))
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, idx)| idx)
    }

    fn collect(&self, node: usize, buf: &mut String, out: &mut Vec<String>) {
        if self.nodes[node].terminal {
            out.push(buf.clone());
        }
        for &(ch, next) in &self.nodes[node].children {
            buf.push(ch);
            self.collect(next, buf, out);
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_word(trie: &Trie, word: &str) -> bool {
        trie.find(word).is_some_and(|node| trie.nodes[node].terminal)
    }

    #[test]
    fn test_prefix_search() {
        let mut trie = Trie::new();
        for word in ["car", "cat", "cart", "dog"] {
            trie.insert(word);
        }

        assert_eq!(trie.search("ca"), vec!["car", "cart", "cat"]);
        assert_eq!(trie.search("dog"), vec!["dog"]);
        assert!(trie.search("x").is_empty());
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let mut trie = Trie::new();
        trie.insert("cart");

        assert!(!is_word(&trie, "car"));
        assert_eq!(trie.search("car"), vec!["cart"]);
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let mut trie = Trie::new();
        trie.insert("b");
        trie.insert("a");
        trie.insert("a");

        assert_eq!(trie.search(""), vec!["b", "a"]);
    }

    #[test]
    fn test_multibyte_words() {
        let mut trie = Trie::new();
        trie.insert("café");
        trie.insert("cafés");

        assert_eq!(trie.search("caf"), vec!["café", "cafés"]);
        assert!(is_word(&trie, "café"));
    }
}
