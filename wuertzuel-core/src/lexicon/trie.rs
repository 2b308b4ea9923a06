//! Compound trie for greedy longest-match decomposition
//!
//! Fused number compounds ("dräihonnert", "nonnzénghonnertnénganzwanzeg")
//! are split against the lexicon by walking this trie longest-prefix-first
//! with backtracking, so new compounds need not be enumerated exhaustively.

use std::collections::HashMap;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether this node marks the end of a lexicon surface form
    is_end: bool,
}

/// Trie over lexicon surface forms
///
/// Nodes are stored in one contiguous array; lookups allocate nothing.
#[derive(Debug, Clone)]
pub struct CompoundTrie {
    nodes: Vec<TrieNode>,
}

impl CompoundTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode {
                children: HashMap::new(),
                is_end: false,
            }],
        }
    }

    /// Insert a lowercase surface form
    pub fn insert(&mut self, word: &str) {
        let mut current_idx = 0u32;

        for ch in word.chars() {
            let node = &self.nodes[current_idx as usize];
            let next_idx = if let Some(&child_idx) = node.children.get(&ch) {
                child_idx
            } else {
                let new_idx = self.nodes.len() as u32;
                self.nodes.push(TrieNode {
                    children: HashMap::new(),
                    is_end: false,
                });
                self.nodes[current_idx as usize].children.insert(ch, new_idx);
                new_idx
            };
            current_idx = next_idx;
        }

        self.nodes[current_idx as usize].is_end = true;
    }

    /// Byte offsets of every prefix of `word` that is a surface form,
    /// shortest first
    fn prefix_ends(&self, word: &str) -> Vec<usize> {
        let mut ends = Vec::new();
        let mut current_idx = 0u32;
        let mut offset = 0;

        for ch in word.chars() {
            match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&next_idx) => current_idx = next_idx,
                None => break,
            }
            offset += ch.len_utf8();
            if self.nodes[current_idx as usize].is_end {
                ends.push(offset);
            }
        }

        ends
    }

    /// Split `word` into a sequence of surface forms, preferring the longest
    /// prefix at every step and backtracking on dead ends.
    ///
    /// Returns `None` when no complete decomposition exists. The recursion
    /// depth is bounded by the character count of `word`.
    pub fn decompose(&self, word: &str) -> Option<Vec<String>> {
        if word.is_empty() {
            return None;
        }
        self.split_from(word)
    }

    fn split_from(&self, rest: &str) -> Option<Vec<String>> {
        if rest.is_empty() {
            return Some(Vec::new());
        }
        let mut ends = self.prefix_ends(rest);
        while let Some(end) = ends.pop() {
            if let Some(mut tail) = self.split_from(&rest[end..]) {
                tail.insert(0, rest[..end].to_string());
                return Some(tail);
            }
        }
        None
    }
}
