//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{AutoTextArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the complete command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResults {
    pub prefix: String,
    pub completions: Vec<String>,
    pub duration_ms: u64,
}

/// Result structure for the correct command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub word: String,
    pub valid: bool,
    pub corrections: Vec<String>,
    pub duration_ms: u64,
}

/// Result structure for the check command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCheckResult {
    pub word: String,
    pub valid: bool,
}

/// Lexicon statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconStats {
    pub path: String,
    pub distinct_words: usize,
    pub trie_words: usize,
    pub bktree_words: usize,
}

/// Human-readable rendering for a command result.
pub trait HumanDisplay {
    fn print_human(&self);
}

impl HumanDisplay for CompletionResults {
    fn print_human(&self) {
        if self.completions.is_empty() {
            println!("No completions for '{}'", self.prefix);
        } else {
            for word in &self.completions {
                println!("{word}");
            }
        }
    }
}

impl HumanDisplay for CorrectionResults {
    fn print_human(&self) {
        if self.valid {
            println!("'{}' is already a valid word", self.word);
        } else if self.corrections.is_empty() {
            println!("No corrections for '{}'", self.word);
        } else {
            for word in &self.corrections {
                println!("{word}");
            }
        }
    }
}

impl HumanDisplay for WordCheckResult {
    fn print_human(&self) {
        if self.valid {
            println!("'{}' is in the lexicon", self.word);
        } else {
            println!("'{}' is not in the lexicon", self.word);
        }
    }
}

impl HumanDisplay for LexiconStats {
    fn print_human(&self) {
        println!("Lexicon Statistics:");
        println!("═══════════════════");
        println!("Path: {}", self.path);
        println!("Distinct words: {}", self.distinct_words);
        println!("Trie insertions: {}", self.trie_words);
        println!("BK-tree insertions: {}", self.bktree_words);
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanDisplay>(
    message: &str,
    result: &T,
    args: &AutoTextArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
