//! AutoText CLI binary.

use std::process;

use autotext::cli::args::AutoTextArgs;
use autotext::cli::commands::execute_command;
use clap::Parser;

fn main() {
    // Parse command line arguments using clap
    let args = AutoTextArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
