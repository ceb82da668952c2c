//! Stage trait definition.

use super::CommandRunner;
use crate::config::PatternConfig;
use crate::domain::{CommandOutput, StageOutcome};

/// One step of the per-file check pipeline.
pub trait Stage {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Line printed before the stage runs.
    fn banner(&self) -> &'static str;

    /// Run the stage over `file`. Tool failures are returned as a failed
    /// outcome and never abort the pipeline.
    fn run(
        &self,
        file: &str,
        patterns: &PatternConfig,
        runner: &dyn CommandRunner,
    ) -> StageOutcome;
}

/// Map a single tool invocation onto a stage outcome.
pub(crate) fn outcome_from_command(stage: &'static str, out: CommandOutput) -> StageOutcome {
    if out.success {
        return StageOutcome::pass(stage, out.output);
    }

    let mut text = out.output;
    if let Some(code) = out.exit_code {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&format!("{} exited with code {}", out.command, code));
    }
    StageOutcome::fail(stage, text)
}
