//! Command implementations for the AutoText CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::AutoText;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: AutoTextArgs) -> Result<()> {
    match &args.command {
        Command::Complete(complete_args) => complete(complete_args.clone(), &args),
        Command::Correct(correct_args) => correct(correct_args.clone(), &args),
        Command::Check(check_args) => check(check_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Suggest completions for a prefix.
fn complete(args: CompleteArgs, cli_args: &AutoTextArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading lexicon from: {}", args.lexicon.display());
    }

    let mut engine = AutoText::from_lexicon_file(&args.lexicon)?;
    if let Some(max) = args.max {
        engine.set_max_suggestions(max);
    }

    let start_time = Instant::now();
    let completions = engine.autocomplete(&args.prefix);
    let duration = start_time.elapsed();

    output_result(
        "Completions",
        &CompletionResults {
            prefix: args.prefix,
            completions,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Suggest corrections for a misspelled word.
fn correct(args: CorrectArgs, cli_args: &AutoTextArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading lexicon from: {}", args.lexicon.display());
    }

    let mut engine = AutoText::from_lexicon_file(&args.lexicon)?;
    if let Some(max) = args.max {
        engine.set_max_corrections(max);
    }

    let start_time = Instant::now();
    let valid = engine.is_valid_word(&args.word);
    let corrections = engine.autocorrect(&args.word).unwrap_or_default();
    let duration = start_time.elapsed();

    output_result(
        "Corrections",
        &CorrectionResults {
            word: args.word,
            valid,
            corrections,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// Check whether a word is in the lexicon.
fn check(args: CheckArgs, cli_args: &AutoTextArgs) -> Result<()> {
    let engine = AutoText::from_lexicon_file(&args.lexicon)?;

    output_result(
        "Word check",
        &WordCheckResult {
            valid: engine.is_valid_word(&args.word),
            word: args.word,
        },
        cli_args,
    )
}

/// Show lexicon statistics.
fn show_stats(args: StatsArgs, cli_args: &AutoTextArgs) -> Result<()> {
    let engine = AutoText::from_lexicon_file(&args.lexicon)?;

    output_result(
        "Lexicon statistics",
        &LexiconStats {
            path: args.lexicon.to_string_lossy().to_string(),
            distinct_words: engine.lexicon().len(),
            trie_words: engine.completion_word_count(),
            bktree_words: engine.correction_word_count(),
        },
        cli_args,
    )
}
