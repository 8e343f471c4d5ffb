//! Command line interface for AutoText.

pub mod args;
pub mod commands;
pub mod output;
