//! Run orchestration.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::PatternConfig;
use crate::domain::stages::CommandRunner;
use crate::domain::{python_source_files, FileReport, Pipeline, StagedPathLister};
use crate::service::Reporter;

/// Checks every staged Python file, one at a time.
pub struct GaddService {
    lister: Box<dyn StagedPathLister>,
    runner: Box<dyn CommandRunner>,
    pipeline: Pipeline,
    patterns: PatternConfig,
}

impl GaddService {
    /// Create a service running the standard pipeline with the merged patterns.
    pub fn new(
        lister: Box<dyn StagedPathLister>,
        runner: Box<dyn CommandRunner>,
        patterns: PatternConfig,
    ) -> Self {
        Self {
            lister,
            runner,
            pipeline: Pipeline::new(),
            patterns,
        }
    }

    /// List staged Python files and run the pipeline over each one.
    ///
    /// Failing stages are reported, not returned; only git and output errors
    /// end the run early.
    pub fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<Vec<FileReport>> {
        let staged = self
            .lister
            .staged_files()
            .context("Failed to list staged files")?;
        let files = python_source_files(&staged);
        info!(staged = staged.len(), python = files.len(), "Collected staged files");

        reporter.start()?;

        let mut reports = Vec::with_capacity(files.len());
        if files.is_empty() {
            reporter.no_files()?;
        } else {
            reporter.found(files.len())?;
            for file in &files {
                reporter.file_started(file)?;
                let report = self
                    .pipeline
                    .run_file(file, &self.patterns, self.runner.as_ref(), reporter)?;
                reporter.file_finished(&report)?;
                info!(
                    file = %report.file,
                    passed = report.passed(),
                    failed = report.failed(),
                    "Checked file"
                );
                reports.push(report);
            }
            reporter.summary(&reports)?;
        }

        reporter.end()?;
        Ok(reports)
    }
}
