//! Prefix trie for autocomplete.
//!
//! Words (including multi-word phrases containing spaces) are indexed one
//! character per level. Children live in a `BTreeMap`, so traversal order is
//! sorted by character and results are reproducible for a fixed trie.

use std::collections::BTreeMap;

use crate::error::{AutoTextError, Result};

/// A single trie node, exclusively owned by its parent.
#[derive(Debug, Default)]
struct TrieNode {
    /// True iff a complete word ends at this node.
    is_leaf: bool,
    /// One child per distinct next character.
    children: BTreeMap<char, TrieNode>,
}

/// Prefix trie over lowercased words.
///
/// Nodes are created on demand during insertion and never removed; there is
/// no deletion operation.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    max_matches: usize,
    word_count: usize,
}

impl Trie {
    /// Default cap on the number of words returned by a prefix query.
    pub const DEFAULT_MAX_MATCHES: usize = 10;

    /// Create a new empty trie.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::default(),
            max_matches: Self::DEFAULT_MAX_MATCHES,
            word_count: 0,
        }
    }

    /// Insert a word into the trie.
    ///
    /// The word is lowercased before insertion; spaces and punctuation are
    /// preserved, so phrases like "write back" are valid entries. Returns an
    /// error for an empty word and leaves the trie unmodified.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(AutoTextError::invalid_argument("word must not be empty"));
        }

        let mut current = &mut self.root;
        for c in word.to_lowercase().chars() {
            current = current.children.entry(c).or_default();
        }
        current.is_leaf = true;
        // Insertion counter, not a distinct-word counter: re-inserting an
        // existing word still counts.
        self.word_count += 1;

        Ok(())
    }

    /// Get all indexed words starting with the given prefix, including the
    /// prefix itself if it terminates a word, up to the configured cap.
    ///
    /// An empty prefix or a prefix absent from the trie yields an empty list.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();

        if prefix.is_empty() {
            return words;
        }

        let prefix = prefix.to_lowercase();
        let mut current = &self.root;
        for c in prefix.chars() {
            match current.children.get(&c) {
                Some(node) => current = node,
                None => return words,
            }
        }

        let mut word = prefix;
        self.collect_words(current, &mut word, &mut words);
        words
    }

    /// Depth-first traversal in sorted child order, emitting a word at every
    /// leaf node until the cap is reached.
    fn collect_words(&self, node: &TrieNode, word: &mut String, words: &mut Vec<String>) {
        if words.len() >= self.max_matches {
            return;
        }

        if node.is_leaf {
            words.push(word.clone());
        }

        for (c, child) in &node.children {
            word.push(*c);
            self.collect_words(child, word, words);
            word.pop();
        }
    }

    /// Set the cap for subsequent [`words_with_prefix`](Self::words_with_prefix)
    /// calls. A cap of zero yields empty results.
    pub fn set_max_matches(&mut self, matches: usize) {
        self.max_matches = matches;
    }

    /// Total number of successful insertions.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
