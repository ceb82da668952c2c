//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Staged file discovery
//! - Pipeline stage trait and the five check stages
//! - Stage outcome and report types
//! - Logger with rotation

mod error;
pub mod logger;
pub mod staged;
pub mod stages;
mod types;

pub use error::GaddError;
pub use staged::{python_source_files, GitStagedLister, StagedPathLister};
pub use stages::Pipeline;
pub use types::{CommandOutput, FileReport, StageOutcome};
