//! Directed word-relationship graph.
//!
//! An edge `a -> b` means `b` was observed directly after `a`; its weight is
//! the number of times that happened.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    graph: DiGraph<String, u32>,
    nodes: HashMap<String, NodeIndex>,
}

impl WordGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or strengthen the edge `from -> to`.
    pub fn add_relationship(&mut self, from: &str, to: &str) {
        let a = self.node(from);
        let b = self.node(to);
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph[edge] += 1,
            None => {
                self.graph.add_edge(a, b, 1);
            }
        }
    }

    /// Successors of `word` in the order their edges were first added.
    pub fn related_words(&self, word: &str) -> Vec<&str> {
        let Some(&node) = self.nodes.get(word) else {
            return Vec::new();
        };

        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_by_key(|e| e.id().index());
        edges
            .into_iter()
            .map(|e| self.graph[e.target()].as_str())
            .collect()
    }

    fn node(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(word.to_string());
        self.nodes.insert(word.to_string(), idx);
        idx
    }
}
