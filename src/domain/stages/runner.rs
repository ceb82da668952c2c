//! External tool execution.

use std::process::Command;
use tracing::{debug, warn};

use crate::domain::CommandOutput;

/// Runs an external tool and captures its output.
pub trait CommandRunner {
    /// Run `program` with `args`. Failure to start the process is reported
    /// through the returned output, never as an error.
    fn run(&self, program: &str, args: &[String]) -> CommandOutput;
}

/// Runs tools as child processes of the current working directory.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        let command_line = display_command(program, args);
        debug!("Executing: {}", command_line);

        let output = match Command::new(program).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to execute {}: {}", program, e);
                return CommandOutput::spawn_failure(command_line, e);
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Combine stdout and stderr, filtering empty streams
        let combined_output = [stdout.trim(), stderr.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n");

        if !output.status.success() {
            debug!("{} exited with {}", program, output.status);
        }

        CommandOutput {
            command: command_line,
            success: output.status.success(),
            exit_code: output.status.code(),
            output: combined_output,
        }
    }
}

/// Render a command line for display.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runner that records invocations and replays canned results.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingRunner {
    pub calls: std::cell::RefCell<Vec<(String, Vec<String>)>>,
    /// Programs that exit with status 1 and print `<program> failed`
    pub failing: Vec<&'static str>,
}

#[cfg(test)]
impl RecordingRunner {
    pub fn failing(programs: &[&'static str]) -> Self {
        Self {
            calls: Default::default(),
            failing: programs.to_vec(),
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(p, _)| p.clone()).collect()
    }
}

#[cfg(test)]
impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        let fails = self.failing.iter().any(|p| *p == program);
        CommandOutput {
            command: display_command(program, args),
            success: !fails,
            exit_code: Some(if fails { 1 } else { 0 }),
            output: if fails {
                format!("{} failed", program)
            } else {
                String::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let args = vec!["--in-place".to_string(), "a.py".to_string()];
        assert_eq!(display_command("autoflake", &args), "autoflake --in-place a.py");
        assert_eq!(display_command("black", &[]), "black");
    }

    #[test]
    fn test_missing_program_is_failed_output() {
        let out = SystemRunner::new().run("gadd-no-such-tool-xyz", &["a.py".to_string()]);
        assert!(!out.success);
        assert_eq!(out.exit_code, None);
        assert!(out.output.starts_with("failed to run gadd-no-such-tool-xyz a.py"));
    }
}
