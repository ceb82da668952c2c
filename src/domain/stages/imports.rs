//! Import sorting and unused-import removal.

use super::stage_trait::outcome_from_command;
use super::{CommandRunner, Stage};
use crate::config::PatternConfig;
use crate::domain::StageOutcome;

/// Sorts imports one per line with isort, then strips unused ones with autoflake.
pub struct ImportsStage;

impl ImportsStage {
    fn isort_args(file: &str) -> Vec<String> {
        vec![
            "--force-single-line-imports".to_string(),
            "--line-width".to_string(),
            "999".to_string(),
            file.to_string(),
        ]
    }

    fn autoflake_args(file: &str) -> Vec<String> {
        vec![
            "--ignore-init-module-imports".to_string(),
            "--in-place".to_string(),
            "--remove-all-unused-imports".to_string(),
            file.to_string(),
        ]
    }
}

impl Stage for ImportsStage {
    fn name(&self) -> &'static str {
        "imports"
    }

    fn banner(&self) -> &'static str {
        "Removing and sorting imports."
    }

    fn run(
        &self,
        file: &str,
        _patterns: &PatternConfig,
        runner: &dyn CommandRunner,
    ) -> StageOutcome {
        let isort = outcome_from_command(self.name(), runner.run("isort", &Self::isort_args(file)));
        let autoflake = outcome_from_command(
            self.name(),
            runner.run("autoflake", &Self::autoflake_args(file)),
        );

        let output = [isort.output.as_str(), autoflake.output.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        if isort.success && autoflake.success {
            StageOutcome::pass(self.name(), output)
        } else {
            StageOutcome::fail(self.name(), output)
        }
    }
}
