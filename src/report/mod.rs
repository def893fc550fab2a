//! Check result rendering.
//!
//! Formats a completed check for humans or for tooling (`--json`). All
//! check diagnostics go to standard output; the enclosing harness watches
//! the exit code, and CI log collectors read stdout.

use std::io::Write;
use std::path::Path;

use console::style;
use serde::Serialize;

use crate::check::CheckOutcome;

/// Output verbosity, mirroring the global CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Failures only.
    Quiet,
    /// Failures and skips.
    Normal,
    /// Everything, including a confirmation line on pass.
    Verbose,
}

impl OutputMode {
    /// Resolve the mode from the `--quiet`/`--verbose` flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            OutputMode::Quiet
        } else if verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    fn shows_skips(self) -> bool {
        !matches!(self, OutputMode::Quiet)
    }

    fn shows_passes(self) -> bool {
        matches!(self, OutputMode::Verbose)
    }
}

/// A completed check, ready to render.
#[derive(Debug)]
pub struct CheckReport<'a> {
    pub path: &'a Path,
    pub expected: &'a str,
    pub outcome: &'a CheckOutcome,
}

/// Renders a [`CheckReport`] to a writer.
pub trait ReportFormat {
    fn render<W: Write>(&self, report: &CheckReport, writer: &mut W) -> std::io::Result<()>;
}

/// Human-readable single-line diagnostics.
///
/// Passing checks are silent by default so the tool stays quiet inside a
/// green build; skips and failures always say what happened.
pub struct HumanFormat {
    mode: OutputMode,
}

impl HumanFormat {
    /// Create a human formatter with the given verbosity.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl ReportFormat for HumanFormat {
    fn render<W: Write>(&self, report: &CheckReport, writer: &mut W) -> std::io::Result<()> {
        match report.outcome {
            CheckOutcome::Passed => {
                if self.mode.shows_passes() {
                    writeln!(
                        writer,
                        "{} {} declares minos {}",
                        style("✓").green(),
                        report.path.display(),
                        report.expected
                    )?;
                }
            }
            CheckOutcome::Skipped { reason } => {
                if self.mode.shows_skips() {
                    writeln!(writer, "skipping minimum version check - {}", reason)?;
                }
            }
            CheckOutcome::Failed { reason } => {
                writeln!(writer, "{} {}", style("✗").red(), reason)?;
            }
        }
        Ok(())
    }
}

/// Machine-readable JSON report for tooling integration.
pub struct JsonFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    expected: &'a str,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ReportFormat for JsonFormat {
    fn render<W: Write>(&self, report: &CheckReport, writer: &mut W) -> std::io::Result<()> {
        let reason = match report.outcome {
            CheckOutcome::Passed => None,
            CheckOutcome::Skipped { reason } => Some(reason.clone()),
            CheckOutcome::Failed { reason } => Some(reason.to_string()),
        };

        let output = JsonReport {
            path: report.path.display().to_string(),
            expected: report.expected,
            outcome: report.outcome.label(),
            reason,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}
