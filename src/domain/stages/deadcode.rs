//! Dead-code scanning with vulture.

use super::stage_trait::outcome_from_command;
use super::{CommandRunner, Stage};
use crate::config::PatternConfig;
use crate::domain::StageOutcome;

/// Whitelist of intentionally unused symbols, always scanned alongside the file.
pub const WHITELIST_FILE: &str = "whitelist.py";

/// Reports apparently unused code, honouring the stored ignore patterns.
pub struct DeadCodeStage;

impl DeadCodeStage {
    fn args(file: &str, patterns: &PatternConfig) -> Vec<String> {
        let mut args = vec![file.to_string(), WHITELIST_FILE.to_string()];

        let options = [
            ("--exclude", patterns.exclude_paths()),
            ("--ignore-decorators", patterns.ignore_decorators()),
            ("--ignore-names", patterns.ignore_names()),
        ];
        for (flag, values) in options {
            if !values.is_empty() {
                args.push(flag.to_string());
                args.push(values.join(","));
            }
        }

        args
    }
}

impl Stage for DeadCodeStage {
    fn name(&self) -> &'static str {
        "deadcode"
    }

    fn banner(&self) -> &'static str {
        "Checking with Vulture."
    }

    fn run(
        &self,
        file: &str,
        patterns: &PatternConfig,
        runner: &dyn CommandRunner,
    ) -> StageOutcome {
        outcome_from_command(self.name(), runner.run("vulture", &Self::args(file, patterns)))
    }
}
