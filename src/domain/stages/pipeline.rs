//! Pipeline driver.

use std::io;
use std::time::Instant;
use tracing::{debug, warn};

use super::{CommandRunner, DeadCodeStage, FormatStage, ImportsStage, LintStage, Stage, StyleStage};
use crate::config::PatternConfig;
use crate::domain::{FileReport, StageOutcome};

/// Receives stage progress while a file is being processed.
pub trait StageObserver {
    /// Called before `stage` runs.
    fn stage_started(&mut self, stage: &dyn Stage) -> io::Result<()>;

    /// Called with the outcome of the stage that just ran.
    fn stage_finished(&mut self, outcome: &StageOutcome) -> io::Result<()>;
}

/// Ordered list of stages applied to every file.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// The standard pipeline: imports, format, style, lint, deadcode.
    pub fn new() -> Self {
        Self::with_stages(vec![
            Box::new(ImportsStage),
            Box::new(FormatStage),
            Box::new(StyleStage),
            Box::new(LintStage),
            Box::new(DeadCodeStage),
        ])
    }

    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Run every stage over `file`, in order.
    ///
    /// Stages mutate the file in place, so later stages see earlier edits. A
    /// failing stage is recorded and the next one still runs. Only observer
    /// write errors are returned.
    pub fn run_file(
        &self,
        file: &str,
        patterns: &PatternConfig,
        runner: &dyn CommandRunner,
        observer: &mut dyn StageObserver,
    ) -> io::Result<FileReport> {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(self.stages.len());

        // Keep tools from reading a leading '-' as an option
        let target = if file.starts_with('-') {
            format!("./{}", file)
        } else {
            file.to_string()
        };

        for stage in &self.stages {
            observer.stage_started(stage.as_ref())?;

            debug!(file = %file, stage = stage.name(), "Running stage");
            let outcome = stage.run(&target, patterns, runner);
            if !outcome.success {
                warn!(file = %file, stage = stage.name(), "Stage failed");
            }

            observer.stage_finished(&outcome)?;
            outcomes.push(outcome);
        }

        Ok(FileReport {
            file: file.to_string(),
            outcomes,
            elapsed: start.elapsed(),
        })
    }
}
