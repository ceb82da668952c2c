//! Pattern configuration management.
//!
//! Handles the `.gadd` INI file: loading, union-merging with command-line
//! patterns, validation and persistence.

mod ini;
mod service;
mod types;
mod validation;

pub use service::{merge_and_save, FileConfigStore};
pub use types::{PatternConfig, PatternKey};

/// Default pattern file, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = ".gadd";

/// The single INI section holding the pattern lists.
pub const SECTION_NAME: &str = "GADD";
