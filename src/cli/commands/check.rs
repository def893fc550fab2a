//! Minimum-version check command.
//!
//! Wires the CLI arguments to the [`VersionChecker`] and renders the
//! outcome. The exit code comes from the outcome: pass and skip are 0,
//! any failure is 1.

use anyhow::anyhow;

use crate::check::VersionChecker;
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::inspect::OtoolInspector;
use crate::report::{CheckReport, HumanFormat, JsonFormat, OutputMode, ReportFormat};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    mode: OutputMode,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, mode: OutputMode) -> Self {
        Self { args, mode }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        // clap enforces both positionals whenever the check runs; this
        // guards against a dispatcher bug, not against user input.
        let (path, version) = match (&self.args.path, &self.args.version) {
            (Some(path), Some(version)) => (path.as_path(), version.as_str()),
            _ => return Err(anyhow!("check requires a binary path and a version").into()),
        };

        let inspector = match &self.args.tool {
            Some(tool) => OtoolInspector::with_program(tool.clone()),
            None => OtoolInspector::new(),
        };

        let checker = VersionChecker::new(inspector);
        let outcome = checker.check(path, version);

        let report = CheckReport {
            path,
            expected: version,
            outcome: &outcome,
        };

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if self.args.json {
            JsonFormat.render(&report, &mut handle)?;
        } else {
            HumanFormat::new(self.mode).render(&report, &mut handle)?;
        }

        if outcome.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(outcome.exit_code()))
        }
    }
}
