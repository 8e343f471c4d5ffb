//! BK-tree (metric tree) for autocorrect.
//!
//! Words are indexed by the keyboard-aware edit distance from
//! [`crate::distance`]: each node's children are keyed by their exact distance
//! from that node, which lets a lookup prune whole subtrees whose distance
//! window cannot contain a close match. Tree shape depends on insertion order;
//! the first word becomes the root.

use std::collections::BTreeMap;

use crate::distance::edit_distance;
use crate::error::{AutoTextError, Result};

/// Maximum edit distance a word may have from the query to count as close.
pub const TOLERANCE: i32 = 3;

/// Maximum number of close matches recorded during a single search.
const MAX_MATCHES: usize = 10;

/// A single BK-tree node, exclusively owned by its parent.
#[derive(Debug)]
struct BkNode {
    /// Normalized word stored at this node.
    value: String,
    /// At most one child per distance value.
    children: BTreeMap<i32, BkNode>,
}

impl BkNode {
    fn new(value: String) -> Self {
        BkNode {
            value,
            children: BTreeMap::new(),
        }
    }
}

/// A close match recorded during a search; not persisted.
#[derive(Debug)]
struct CloseMatch<'a> {
    word: &'a str,
    distance: i32,
}

/// BK-tree over normalized words.
///
/// Nodes are created on demand during insertion; there is no deletion or
/// rebalancing.
#[derive(Debug)]
pub struct BkTree {
    root: Option<BkNode>,
    max_suggestions: usize,
    word_count: usize,
}

/// Normalize a word for the BK-tree: lowercase, then strip every character
/// outside `a`-`z`. The stored key may differ from what the caller typed,
/// e.g. `"etc."` becomes `"etc"` and `"make up"` collapses to `"makeup"`.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

impl BkTree {
    /// Default cap on the number of suggestions returned by a search.
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

    /// Create a new empty BK-tree.
    pub fn new() -> Self {
        BkTree {
            root: None,
            max_suggestions: Self::DEFAULT_MAX_SUGGESTIONS,
            word_count: 0,
        }
    }

    /// Insert a word into the tree.
    ///
    /// Returns an error, leaving the tree unmodified, if the word is empty or
    /// if nothing of it survives normalization (the tree must never store an
    /// empty key).
    pub fn insert(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(AutoTextError::invalid_argument("word must not be empty"));
        }

        let normalized = normalize(word);
        if normalized.is_empty() {
            return Err(AutoTextError::invalid_argument(format!(
                "word '{word}' has no letters left after normalization"
            )));
        }

        match &mut self.root {
            None => self.root = Some(BkNode::new(normalized)),
            Some(root) => Self::insert_below(root, normalized),
        }
        self.word_count += 1;

        Ok(())
    }

    /// Descend from `node` while a child already sits at the computed distance,
    /// then attach the word there. A distance of zero never descends; it
    /// replaces any existing zero-keyed child, which keeps duplicates from
    /// forming a chain.
    fn insert_below(node: &mut BkNode, word: String) {
        let distance = edit_distance(&word, &node.value);

        if distance != 0 {
            if let Some(child) = node.children.get_mut(&distance) {
                return Self::insert_below(child, word);
            }
        }

        node.children.insert(distance, BkNode::new(word));
    }

    /// Get the stored words with the shortest edit distance from the query,
    /// up to the configured suggestion cap.
    ///
    /// The query is normalized first; if nothing survives normalization the
    /// result is empty. The search records every word within [`TOLERANCE`] of
    /// the query until [`MAX_MATCHES`] are found, then keeps only those at the
    /// minimum recorded distance.
    pub fn closest_words(&self, word: &str) -> Vec<String> {
        let query = normalize(word);
        if query.is_empty() {
            return Vec::new();
        }

        // An ordered list, deliberately not a set: the same word stored at
        // two different nodes can legitimately appear twice.
        let mut matches: Vec<CloseMatch<'_>> = Vec::new();
        if let Some(root) = &self.root {
            Self::collect_close(root, &query, &mut matches);
        }

        let Some(min_distance) = matches.iter().map(|m| m.distance).min() else {
            return Vec::new();
        };

        matches
            .iter()
            .filter(|m| m.distance == min_distance)
            .take(self.max_suggestions)
            .map(|m| m.word.to_string())
            .collect()
    }

    /// Pruned depth-first search: record the node if it is within tolerance,
    /// then recurse into every child keyed inside the tolerance window around
    /// the node's own distance from the query.
    fn collect_close<'a>(node: &'a BkNode, query: &str, matches: &mut Vec<CloseMatch<'a>>) {
        if matches.len() == MAX_MATCHES {
            return;
        }

        let distance = edit_distance(query, &node.value);
        if distance <= TOLERANCE {
            matches.push(CloseMatch {
                word: &node.value,
                distance,
            });
        }

        for key in (distance - TOLERANCE)..=(distance + TOLERANCE) {
            if let Some(child) = node.children.get(&key) {
                Self::collect_close(child, query, matches);
            }
        }
    }

    /// Set the cap on the number of suggestions returned by
    /// [`closest_words`](Self::closest_words).
    pub fn set_max_suggestions(&mut self, matches: usize) {
        self.max_suggestions = matches;
    }

    /// Total number of successful insertions.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Default for BkTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(words: &[&str]) -> BkTree {
        let mut tree = BkTree::new();
        for word in words {
            tree.insert(word).unwrap();
        }
        tree
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("etc."), "etc");
        assert_eq!(normalize("make up"), "makeup");
        assert_eq!(normalize("Hello!"), "hello");
        assert_eq!(normalize("123"), "");
    }

    #[test]
    fn test_invalid_insertions() {
        let mut tree = BkTree::new();
        assert!(tree.insert("").is_err());
        // Nothing survives normalization either.
        assert!(tree.insert("123").is_err());
        assert_eq!(tree.word_count(), 0);
        assert!(tree.closest_words("word").is_empty());
    }

    #[test]
    fn test_word_count_counts_insertions() {
        let mut tree = BkTree::new();
        tree.insert("cat").unwrap();
        tree.insert("cat").unwrap();
        tree.insert("hat").unwrap();
        assert_eq!(tree.word_count(), 3);
    }

    #[test]
    fn test_closest_words_transposition() {
        let tree = tree_with(&["apple", "banana", "receive"]);
        assert_eq!(tree.closest_words("recieve"), vec!["receive"]);
    }

    #[test]
    fn test_closest_words_missing_character() {
        let tree = tree_with(&["apple", "banana", "where"]);
        assert_eq!(tree.closest_words("whre"), vec!["where"]);
    }

    #[test]
    fn test_closest_words_ties_at_minimum_distance() {
        // "amazin" is distance 2 from both; everything else is out of range.
        let tree = tree_with(&["amazing", "amazon", "apple", "banana"]);
        assert_eq!(tree.closest_words("amazin"), vec!["amazing", "amazon"]);
    }

    #[test]
    fn test_keyboard_proximity_breaks_ties() {
        // 'y' is next to 't' on a QWERTY keyboard but not next to 'w', so
        // "there" (distance 2) beats "where" (distance 3).
        let tree = tree_with(&["apple", "there", "where"]);
        assert_eq!(tree.closest_words("yhere"), vec!["there"]);
    }

    #[test]
    fn test_repeated_letter_typos() {
        let tree = tree_with(&["apple", "google"]);
        assert_eq!(tree.closest_words("gogle"), vec!["google"]);

        let tree = tree_with(&["apple", "utilities"]);
        assert_eq!(tree.closest_words("utillities"), vec!["utilities"]);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let mut tree = tree_with(&["apple"]);
        tree.insert("etc.").unwrap();
        assert!(tree.closest_words("etc.").contains(&"etc".to_string()));

        tree.insert("make up").unwrap();
        assert!(tree.closest_words("make up").contains(&"makeup".to_string()));
    }

    #[test]
    fn test_no_match_within_tolerance() {
        let tree = tree_with(&["extraordinary", "incomprehensible"]);
        assert!(tree.closest_words("cat").is_empty());
    }

    #[test]
    fn test_max_suggestions_caps_results() {
        // All five words sit at distance 3 from "caat".
        let mut tree = tree_with(&["bat", "hat", "mat", "rat", "sat"]);
        assert_eq!(tree.closest_words("caat").len(), 3);

        tree.set_max_suggestions(2);
        assert_eq!(tree.closest_words("caat").len(), 2);

        tree.set_max_suggestions(10);
        assert_eq!(tree.closest_words("caat").len(), 5);
    }

    #[test]
    fn test_exact_word_is_its_own_closest_match() {
        let tree = tree_with(&["apple", "banana", "cherry"]);
        assert_eq!(tree.closest_words("banana"), vec!["banana"]);
    }

    #[test]
    fn test_duplicate_inserts_do_not_multiply_results() {
        let mut tree = BkTree::new();
        tree.insert("cat").unwrap();
        tree.insert("cat").unwrap();
        tree.insert("cat").unwrap();
        assert_eq!(tree.word_count(), 3);
        assert_eq!(tree.closest_words("cat"), vec!["cat", "cat"]);
    }
}
