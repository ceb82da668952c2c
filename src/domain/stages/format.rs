//! Code formatting with black.

use super::stage_trait::outcome_from_command;
use super::{CommandRunner, Stage};
use crate::config::PatternConfig;
use crate::domain::StageOutcome;

/// Reformats the file in place with black.
pub struct FormatStage;

impl Stage for FormatStage {
    fn name(&self) -> &'static str {
        "format"
    }

    fn banner(&self) -> &'static str {
        "Applying Black."
    }

    fn run(
        &self,
        file: &str,
        _patterns: &PatternConfig,
        runner: &dyn CommandRunner,
    ) -> StageOutcome {
        outcome_from_command(self.name(), runner.run("black", &[file.to_string()]))
    }
}
