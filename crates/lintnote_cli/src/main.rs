//! lintnote CLI
//!
//! Reads API linter responses as JSON and prints them in the selected
//! output format, GitHub Actions annotations by default.

mod cli;
mod input;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use lintnote_core::{LintnoteConfig, ResponseSummary, render};

use crate::cli::Cli;
use crate::input::{bind_sources, read_responses};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_problems) => {
            if has_problems && cli.set_exit_status {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    let format = cli.format.or(config.format).unwrap_or_default();

    let mut responses = read_responses(cli.input.as_deref()).into_diagnostic()?;

    let source_root = cli
        .source_root
        .clone()
        .or_else(|| config.resolved_source_root())
        .unwrap_or_else(|| PathBuf::from("."));
    bind_sources(&mut responses, &source_root).into_diagnostic()?;
    config.rule_urls.apply(&mut responses);

    let summary = ResponseSummary::from_responses(&responses);
    debug!(
        "Formatting {} problems from {} files as {}",
        summary.problems, summary.files, format
    );

    let output = render(&responses, format).into_diagnostic()?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&output).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;

    Ok(summary.problems > 0)
}

fn load_config(cli: &Cli) -> Result<LintnoteConfig> {
    if let Some(path) = &cli.config {
        return LintnoteConfig::from_file(path).into_diagnostic();
    }
    if let Some(path) = LintnoteConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LintnoteConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(LintnoteConfig::new())
}
