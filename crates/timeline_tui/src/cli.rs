//! Command-line interface for the timeline terminal UI.

use clap::Parser;
use std::path::PathBuf;

/// Timeline - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(about = "Play tic-tac-toe and rewind to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "timeline.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(long)]
    pub descending: bool,

    /// Show cell numbers on empty cells
    #[arg(long)]
    pub hints: bool,
}
