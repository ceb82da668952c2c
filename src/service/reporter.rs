//! Human-readable run report.

use std::io::{self, Write};

use crate::domain::stages::{Stage, StageObserver};
use crate::domain::{FileReport, StageOutcome};

const INDENT: &str = "    ";

/// Writes banners, stage output and timings.
pub struct Reporter<W: Write> {
    out: W,
    /// Emit ANSI bold for file names
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start(&mut self) -> io::Result<()> {
        writeln!(self.out, "#######################")?;
        writeln!(self.out, "# Make it PEP8 again! #")?;
        writeln!(self.out, "#######################")?;
        writeln!(self.out)
    }

    pub fn found(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "Found {} python file(s):", count)?;
        writeln!(self.out)
    }

    pub fn no_files(&mut self) -> io::Result<()> {
        writeln!(self.out, "No python files found!")?;
        writeln!(self.out)
    }

    pub fn file_started(&mut self, file: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "\x1b[1m{}\x1b[0m", file)
        } else {
            writeln!(self.out, "{}", file)
        }
    }

    pub fn file_finished(&mut self, report: &FileReport) -> io::Result<()> {
        writeln!(
            self.out,
            "Done in {:.2}s ({}/{} stages passed)",
            report.elapsed.as_secs_f64(),
            report.passed(),
            report.outcomes.len()
        )?;
        writeln!(self.out)
    }

    pub fn summary(&mut self, reports: &[FileReport]) -> io::Result<()> {
        let failures: usize = reports.iter().map(FileReport::failed).sum();
        writeln!(
            self.out,
            "{} file(s) checked, {} stage failure(s)",
            reports.len(),
            failures
        )?;
        writeln!(self.out)
    }

    pub fn end(&mut self) -> io::Result<()> {
        writeln!(self.out, "########")?;
        writeln!(self.out, "# Exit #")?;
        writeln!(self.out, "########")?;
        self.out.flush()
    }
}

impl<W: Write> StageObserver for Reporter<W> {
    fn stage_started(&mut self, stage: &dyn Stage) -> io::Result<()> {
        writeln!(self.out, "{}", stage.banner())?;
        self.out.flush()
    }

    fn stage_finished(&mut self, outcome: &StageOutcome) -> io::Result<()> {
        for line in outcome.output.lines() {
            writeln!(self.out, "{}{}", INDENT, line)?;
        }
        let mark = if outcome.success { "PASS" } else { "FAIL" };
        writeln!(self.out, "{}[{}] {}", INDENT, mark, outcome.stage)
    }
}
