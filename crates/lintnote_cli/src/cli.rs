//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;
use lintnote_core::Format;

/// lintnote - Turn API linter results into CI annotations
#[derive(Parser)]
#[command(name = "lintnote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with lint responses (`-` or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Output format (github, json, text, summary)
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory that response file paths are relative to
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Exit with status 1 when any problem was reported
    #[arg(long)]
    pub set_exit_status: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
