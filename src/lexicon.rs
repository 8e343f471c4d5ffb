//! Lexicon management: the vocabulary both index structures are built from.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// A set of lowercase vocabulary words, usually loaded from a word-per-line
/// file.
///
/// Words are kept in sorted order so anything built from the lexicon (in
/// particular the BK-tree, whose shape depends on insertion order) comes out
/// the same on every run.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: BTreeSet<String>,
}

impl Lexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            words: BTreeSet::new(),
        }
    }

    /// Build a lexicon from an iterator of words. Duplicates collapse.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.add_word(word.as_ref());
        }
        lexicon
    }

    /// Load a lexicon from a text file with one word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped. A file that
    /// cannot be opened or read propagates the I/O error to the caller.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut lexicon = Lexicon::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                lexicon.add_word(word);
            }
        }

        Ok(lexicon)
    }

    /// Add a single word. Duplicates collapse.
    pub fn add_word(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Check whether a word is in the lexicon (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over the words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut lexicon = Lexicon::new();
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("word"));

        lexicon.add_word("word");
        lexicon.add_word("word");
        lexicon.add_word("phrase with spaces");

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("word"));
        assert!(lexicon.contains("phrase with spaces"));
    }

    #[test]
    fn test_case_insensitive() {
        let lexicon = Lexicon::from_words(["Hello", "WORLD"]);

        assert!(lexicon.contains("hello"));
        assert!(lexicon.contains("HELLO"));
        assert!(lexicon.contains("world"));
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_words_are_sorted() {
        let lexicon = Lexicon::from_words(["zebra", "apple", "mango"]);
        let words: Vec<&str> = lexicon.words().collect();
        assert_eq!(words, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Receive").unwrap();
        writeln!(temp_file).unwrap();
        writeln!(temp_file, "  where  ").unwrap();
        writeln!(temp_file, "receive").unwrap();
        temp_file.flush().unwrap();

        let lexicon = Lexicon::load(temp_file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("receive"));
        assert!(lexicon.contains("where"));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Lexicon::load("/nonexistent/words.txt").is_err());
    }
}
