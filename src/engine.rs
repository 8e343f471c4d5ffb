//! The AutoText facade: one vocabulary feeding both index structures.
//!
//! Composes a [`Lexicon`] with a [`Trie`] (autocomplete) and a [`BkTree`]
//! (autocorrect). The two trees are independent and never interact; the
//! lexicon flows into both at build time and queries flow through one of
//! them at a time.

use std::path::Path;

use crate::bktree::BkTree;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::trie::Trie;

/// Autocomplete and autocorrect over a shared vocabulary.
#[derive(Debug)]
pub struct AutoText {
    lexicon: Lexicon,
    trie: Trie,
    bktree: BkTree,
}

impl AutoText {
    /// Build an engine from a word-per-line lexicon file.
    ///
    /// Construction either fully succeeds or fully fails; a word rejected by
    /// either tree aborts the build with no partial index handed back.
    pub fn from_lexicon_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_lexicon(Lexicon::load(path)?)
    }

    /// Build an engine from an already loaded lexicon.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self> {
        let mut trie = Trie::new();
        let mut bktree = BkTree::new();

        for word in lexicon.words() {
            trie.insert(word)?;
            bktree.insert(word)?;
        }

        Ok(AutoText {
            lexicon,
            trie,
            bktree,
        })
    }

    /// Get words completing the given prefix, shortest first.
    ///
    /// The sort is stable and considers length only, so equal-length words
    /// keep the trie's deterministic emission order.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let mut words = self.trie.words_with_prefix(prefix);
        words.sort_by_key(String::len);
        words
    }

    /// Get correction candidates for a misspelled word.
    ///
    /// Returns `None` when there is nothing to suggest: either the word is
    /// already valid, or no stored word falls within tolerance of it.
    pub fn autocorrect(&self, word: &str) -> Option<Vec<String>> {
        if self.is_valid_word(word) {
            return None;
        }

        let words = self.bktree.closest_words(word);
        if words.is_empty() { None } else { Some(words) }
    }

    /// Check whether the word is in the vocabulary (case-insensitive).
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Set the cap on autocomplete results.
    pub fn set_max_suggestions(&mut self, matches: usize) {
        self.trie.set_max_matches(matches);
    }

    /// Set the cap on autocorrect results.
    pub fn set_max_corrections(&mut self, matches: usize) {
        self.bktree.set_max_suggestions(matches);
    }

    /// Add words from another word file to the autocomplete trie only.
    ///
    /// The added words do not join the validity lexicon.
    pub fn add_completions_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        for word in Lexicon::load(path)?.words() {
            self.trie.insert(word)?;
        }
        Ok(())
    }

    /// Add words from another word file to the autocorrect BK-tree only.
    pub fn add_corrections_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        for word in Lexicon::load(path)?.words() {
            self.bktree.insert(word)?;
        }
        Ok(())
    }

    /// The vocabulary backing this engine.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Number of insertions the autocomplete trie has seen.
    pub fn completion_word_count(&self) -> usize {
        self.trie.word_count()
    }

    /// Number of insertions the autocorrect BK-tree has seen.
    pub fn correction_word_count(&self) -> usize {
        self.bktree.word_count()
    }
}
