//! CLI entry point for the foundry binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::translate::FailurePolicy;

/// Agent Foundry CLI
#[derive(Parser, Debug)]
#[command(name = "foundry", version, about = "Replay upstream captures as AG-UI event streams")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a JSONL upstream capture and print SSE frames
    Replay(ReplayArgs),
}

/// Arguments for the `replay` subcommand.
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// JSONL capture, one upstream record or `{"error": ...}` per line
    pub file: PathBuf,

    /// Thread id to report (generated when absent)
    #[arg(long)]
    pub thread_id: Option<String>,

    /// Run id to report (generated when absent)
    #[arg(long)]
    pub run_id: Option<String>,

    /// Failure policy override (terminate, close_open_streams)
    #[arg(long)]
    pub policy: Option<FailurePolicy>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
