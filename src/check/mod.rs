//! Minimum-version check core.
//!
//! [`VersionChecker`] wires the platform gate, the external inspector, and
//! the marker scan together. Check results are data ([`CheckOutcome`]), not
//! process state; mapping an outcome to an exit status happens at the CLI
//! layer.

mod marker;

pub use marker::contains_min_version;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::inspect::BinaryInspector;
use crate::platform;

/// Why a check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The tool ran but its output carried no matching marker.
    MarkerNotFound { path: PathBuf, expected: String },

    /// The inspection tool could not run or exited non-zero.
    ToolInvocation { message: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::MarkerNotFound { path, expected } => write!(
                f,
                "Expected {} to be built with -mmacosx-version-min={}",
                path.display(),
                expected
            ),
            FailureReason::ToolInvocation { message } => write!(f, "{}", message),
        }
    }
}

/// Result of a minimum-version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The binary declares the expected minimum version.
    Passed,

    /// The check was not performed; the platform lacks the inspection tool.
    /// Conventionally non-failing.
    Skipped { reason: String },

    /// The marker was absent or the tool invocation errored.
    Failed { reason: FailureReason },
}

impl CheckOutcome {
    /// Process exit status for this outcome. Skips count as success.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::Passed | CheckOutcome::Skipped { .. } => 0,
            CheckOutcome::Failed { .. } => 1,
        }
    }

    /// Whether the outcome maps to a zero exit status.
    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }

    /// Stable lowercase label, used by the JSON report.
    pub fn label(&self) -> &'static str {
        match self {
            CheckOutcome::Passed => "passed",
            CheckOutcome::Skipped { .. } => "skipped",
            CheckOutcome::Failed { .. } => "failed",
        }
    }
}

/// Checks whether a binary was built against an expected minimum OS version.
///
/// Stateless across calls; repeated checks of an unchanged binary yield the
/// same outcome.
pub struct VersionChecker<I> {
    inspector: I,
    supported: bool,
}

impl<I: BinaryInspector> VersionChecker<I> {
    /// Create a checker gated on the current platform's capability.
    pub fn new(inspector: I) -> Self {
        Self {
            inspector,
            supported: platform::inspection_supported(),
        }
    }

    /// Create a checker with an explicit capability flag (for testing).
    pub fn with_support(inspector: I, supported: bool) -> Self {
        Self {
            inspector,
            supported,
        }
    }

    /// Check the binary at `path` for a `minos <version>` marker.
    ///
    /// On unsupported platforms the check short-circuits to
    /// [`CheckOutcome::Skipped`] without touching the filesystem, so even a
    /// nonexistent path skips cleanly there.
    pub fn check(&self, path: &Path, version: &str) -> CheckOutcome {
        if !self.supported {
            tracing::debug!(
                "skipping {} check for {}: unsupported platform",
                self.inspector.tool_name(),
                path.display()
            );
            return CheckOutcome::Skipped {
                reason: "not on darwin".to_string(),
            };
        }

        let output = match self.inspector.inspect(path) {
            Ok(output) => output,
            Err(e) => {
                return CheckOutcome::Failed {
                    reason: FailureReason::ToolInvocation {
                        message: e.to_string(),
                    },
                }
            }
        };

        if contains_min_version(&output, version) {
            tracing::debug!("{} declares minos {}", path.display(), version);
            CheckOutcome::Passed
        } else {
            CheckOutcome::Failed {
                reason: FailureReason::MarkerNotFound {
                    path: path.to_path_buf(),
                    expected: version.to_string(),
                },
            }
        }
    }
}
