//! Style checking with flake8.

use super::{CommandRunner, Stage};
use crate::config::PatternConfig;
use crate::domain::StageOutcome;

/// flake8 settings file, relative to the working directory.
pub const FLAKE8_CONFIG: &str = ".flake8";

/// Reports flake8 violations.
pub struct StyleStage;

impl Stage for StyleStage {
    fn name(&self) -> &'static str {
        "style"
    }

    fn banner(&self) -> &'static str {
        "Checking with flake8."
    }

    fn run(
        &self,
        file: &str,
        _patterns: &PatternConfig,
        runner: &dyn CommandRunner,
    ) -> StageOutcome {
        let args = vec![format!("--config={}", FLAKE8_CONFIG), file.to_string()];
        let out = runner.run("flake8", &args);

        if out.success && out.output.is_empty() {
            StageOutcome::pass(self.name(), "flake8 OK!")
        } else if out.output.is_empty() {
            StageOutcome::fail(
                self.name(),
                format!("flake8 errors: {} exited with {:?}", out.command, out.exit_code),
            )
        } else {
            StageOutcome::fail(self.name(), format!("flake8 errors:\n{}", out.output))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stages::RecordingRunner;

    #[test]
    fn test_clean_file() {
        let runner = RecordingRunner::default();
        let outcome = StyleStage.run("a.py", &PatternConfig::default(), &runner);

        assert!(outcome.success);
        assert_eq!(outcome.output, "flake8 OK!");
        assert_eq!(
            runner.calls.borrow()[0].1,
            vec!["--config=.flake8".to_string(), "a.py".to_string()]
        );
    }

    #[test]
    fn test_violations() {
        let runner = RecordingRunner::failing(&["flake8"]);
        let outcome = StyleStage.run("a.py", &PatternConfig::default(), &runner);

        assert!(!outcome.success);
        assert_eq!(outcome.output, "flake8 errors:\nflake8 failed");
    }
}
