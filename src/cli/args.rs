//! Command line argument parsing for the Qbank CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Qbank - a conversational assistant for exam question banks
#[derive(Parser, Debug, Clone)]
#[command(name = "qbank")]
#[command(about = "A conversational assistant for exam question banks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QbankArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

impl QbankArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive chat over a question bank
    Chat(ChatArgs),

    /// List the categories in a question bank
    Categories(CategoriesArgs),

    /// Show question bank statistics
    Stats(StatsArgs),
}

/// Arguments for the interactive chat
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Path to the dataset file (JSON or JSONL)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Number of questions per page
    #[arg(long, default_value = "10")]
    pub page_size: usize,
}

/// Arguments for listing categories
#[derive(Parser, Debug, Clone)]
pub struct CategoriesArgs {
    /// Path to the dataset file (JSON or JSONL)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dataset file (JSON or JSONL)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let mut args = QbankArgs::parse_from(["qbank", "stats", "dataset.jsonl"]);
        assert_eq!(args.verbosity(), 1);

        args.verbose = 3;
        assert_eq!(args.verbosity(), 3);

        args.quiet = true;
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_chat_args_defaults() {
        let args = QbankArgs::parse_from(["qbank", "chat", "dataset.jsonl"]);
        match args.command {
            Command::Chat(chat) => {
                assert_eq!(chat.page_size, 10);
                assert_eq!(chat.dataset, PathBuf::from("dataset.jsonl"));
            }
            _ => panic!("Expected chat subcommand"),
        }
    }
}
