//! Check pipeline: the stage trait, the five stages and the driver.

mod deadcode;
mod format;
mod imports;
mod lint;
mod pipeline;
mod runner;
mod stage_trait;
mod style;

pub use deadcode::DeadCodeStage;
pub use format::FormatStage;
pub use imports::ImportsStage;
pub use lint::LintStage;
pub use pipeline::{Pipeline, StageObserver};
pub use runner::{CommandRunner, SystemRunner};
pub use stage_trait::Stage;
pub use style::StyleStage;

#[cfg(test)]
pub(crate) use runner::RecordingRunner;
