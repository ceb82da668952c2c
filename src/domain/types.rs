//! Core domain types for stage results.

use std::time::Duration;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Command line that was executed, for display
    pub command: String,
    /// Whether the process ran and exited with status 0
    pub success: bool,
    /// Exit code, if the process ran and was not killed by a signal
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr, trimmed
    pub output: String,
}

impl CommandOutput {
    /// Output for a process that could not be started at all.
    pub fn spawn_failure(command: String, error: impl std::fmt::Display) -> Self {
        let output = format!("failed to run {}: {}", command, error);
        Self {
            command,
            success: false,
            exit_code: None,
            output,
        }
    }
}

/// Result of a single pipeline stage for one file.
///
/// A failed stage never aborts the run; the driver reports it and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    /// Stage name: "imports", "format", "style", "lint", "deadcode"
    pub stage: &'static str,
    /// Whether the stage passed
    pub success: bool,
    /// Text to relay to the user
    pub output: String,
}

impl StageOutcome {
    pub fn pass(stage: &'static str, output: impl Into<String>) -> Self {
        Self {
            stage,
            success: true,
            output: output.into(),
        }
    }

    pub fn fail(stage: &'static str, output: impl Into<String>) -> Self {
        Self {
            stage,
            success: false,
            output: output.into(),
        }
    }
}

/// All stage outcomes for one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub outcomes: Vec<StageOutcome>,
    pub elapsed: Duration,
}

impl FileReport {
    /// Number of stages that passed.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// Number of stages that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_report_counts() {
        let report = FileReport {
            file: "a.py".to_string(),
            outcomes: vec![
                StageOutcome::pass("imports", ""),
                StageOutcome::fail("format", "would reformat a.py"),
                StageOutcome::pass("style", "flake8 OK!"),
            ],
            elapsed: Duration::from_millis(10),
        };
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_spawn_failure_message() {
        let out = CommandOutput::spawn_failure("black a.py".to_string(), "No such file");
        assert!(!out.success);
        assert_eq!(out.exit_code, None);
        assert_eq!(out.output, "failed to run black a.py: No such file");
    }
}
