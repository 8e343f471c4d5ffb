//! Command line argument parsing for the AutoText CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// AutoText - autocomplete and autocorrect over a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "autotext")]
#[command(about = "Autocomplete and autocorrect over a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AutoTextArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AutoTextArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Supported output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest completions for a prefix
    Complete(CompleteArgs),

    /// Suggest corrections for a misspelled word
    Correct(CorrectArgs),

    /// Check whether a word is in the lexicon
    Check(CheckArgs),

    /// Show lexicon statistics
    Stats(StatsArgs),
}

/// Arguments for the complete command
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    /// Path to the lexicon file (one word per line)
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of completions to return
    #[arg(short, long)]
    pub max: Option<usize>,
}

/// Arguments for the correct command
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Path to the lexicon file (one word per line)
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of corrections to return
    #[arg(short, long)]
    pub max: Option<usize>,
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the lexicon file (one word per line)
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the lexicon file (one word per line)
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,
}
