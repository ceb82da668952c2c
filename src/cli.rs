//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::config::PatternConfig;

const GLOB_HELP: &str = "Patterns may contain glob wildcards (*, ?, [abc], [!abc]).";

/// Make it PEP8 again: check staged Python files before committing
#[derive(Parser)]
#[command(
    name = "gadd",
    version,
    about = "Run import cleanup, formatting, linting and dead-code checks over staged Python files",
    long_about = "Collects the Python files staged in the current git repository and runs \
                  isort, autoflake, black, flake8, pylint and vulture over each of them. \
                  Pattern options are merged into the .gadd file and remembered for later runs."
)]
pub struct Cli {
    /// Comma-separated list of paths to ignore (e.g., "*settings.py,docs/*.py")
    #[arg(
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        long_help = format!(
            "Comma-separated list of paths to ignore (e.g., \"*settings.py,docs/*.py\"). {} \
             A PATTERN without glob wildcards is treated as *PATTERN*.",
            GLOB_HELP
        )
    )]
    pub exclude: Vec<String>,

    /// Comma-separated list of decorators whose functions and classes are ignored
    #[arg(
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        long_help = format!(
            "Comma-separated list of decorators. Functions and classes using these \
             decorators are ignored (e.g., \"@app.route,@require_*\"). {}",
            GLOB_HELP
        )
    )]
    pub ignore_decorators: Vec<String>,

    /// Comma-separated list of names to ignore (e.g., "visit_*,do_*")
    #[arg(
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        long_help = format!(
            "Comma-separated list of names to ignore (e.g., \"visit_*,do_*\"). {}",
            GLOB_HELP
        )
    )]
    pub ignore_names: Vec<String>,

    /// Path to the pattern file
    #[arg(long, short = 'c', value_name = "PATH", default_value = crate::config::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Directory for debug log files
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Patterns supplied on the command line, ready to be merged.
    pub fn patterns(&self) -> PatternConfig {
        PatternConfig::from_lists(
            self.exclude.as_slice(),
            self.ignore_decorators.as_slice(),
            self.ignore_names.as_slice(),
        )
    }
}
