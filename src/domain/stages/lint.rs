//! Lint checking with pylint.

use super::stage_trait::outcome_from_command;
use super::{CommandRunner, Stage};
use crate::config::PatternConfig;
use crate::domain::StageOutcome;

/// pylint settings file, relative to the working directory.
pub const PYLINT_RCFILE: &str = ".pylintrc";

/// Reports pylint messages in parseable format without the summary report.
pub struct LintStage;

impl Stage for LintStage {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn banner(&self) -> &'static str {
        "Checking with pylint."
    }

    fn run(
        &self,
        file: &str,
        _patterns: &PatternConfig,
        runner: &dyn CommandRunner,
    ) -> StageOutcome {
        let args = vec![
            format!("--rcfile={}", PYLINT_RCFILE),
            "-f".to_string(),
            "parseable".to_string(),
            "-r".to_string(),
            "n".to_string(),
            file.to_string(),
        ];
        outcome_from_command(self.name(), runner.run("pylint", &args))
    }
}
