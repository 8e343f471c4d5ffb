//! # AutoText
//!
//! Prefix-based word suggestion (autocomplete) and approximate-match word
//! correction (autocorrect) over an in-memory vocabulary.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Prefix trie for autocomplete, with multi-word phrase support
//! - BK-tree for autocorrect, pruned by a tolerance window
//! - Keyboard-aware Damerau-Levenshtein edit distance for ranking typos
//! - Deterministic results for a fixed vocabulary

pub mod bktree;
pub mod cli;
pub mod distance;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod trie;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
