//! gadd: make it PEP8 again
//!
//! A pre-commit style CLI that runs import cleanup, formatting, style,
//! lint and dead-code checks over the Python files staged in git.

mod cli;
mod config;
mod domain;
mod service;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cli::Cli;
use config::FileConfigStore;
use domain::stages::SystemRunner;
use domain::GitStagedLister;
use service::{GaddService, Reporter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging if debug mode
    if cli.debug {
        let log_dir = cli
            .log_dir
            .clone()
            .unwrap_or_else(domain::logger::default_log_dir);
        domain::logger::init(&log_dir)?;
    }

    // Merge command-line patterns into the pattern file
    let store = FileConfigStore::new(&cli.config);
    let patterns = config::merge_and_save(&store, &cli.patterns())?;
    debug!(path = %store.path().display(), ?patterns, "Merged pattern configuration");

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let service = GaddService::new(
        Box::new(GitStagedLister::new(&cwd)),
        Box::new(SystemRunner::new()),
        patterns,
    );

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut reporter = Reporter::new(stdout.lock(), color);
    service.run(&mut reporter)?;

    Ok(())
}
