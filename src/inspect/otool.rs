//! `otool`-backed inspector.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::BinaryInspector;
use crate::error::{MinverError, Result};

/// Inspects Mach-O binaries by spawning `otool -l`.
///
/// The invocation is blocking and made exactly once per call; transient
/// subprocess errors surface directly rather than being retried.
pub struct OtoolInspector {
    program: PathBuf,
}

impl OtoolInspector {
    /// Create an inspector that resolves `otool` via PATH.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("otool"),
        }
    }

    /// Create an inspector that invokes a specific executable.
    ///
    /// Used for `--tool` overrides, e.g. `llvm-otool` or a test double.
    pub fn with_program(program: PathBuf) -> Self {
        Self { program }
    }

    fn tool_display(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for OtoolInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryInspector for OtoolInspector {
    fn inspect(&self, path: &Path) -> Result<String> {
        tracing::debug!(
            "running {} -l {} for load command dump",
            self.tool_display(),
            path.display()
        );

        let output = Command::new(&self.program)
            .arg("-l")
            .arg(path)
            .output()
            .map_err(|e| MinverError::ToolInvocation {
                tool: self.tool_display(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                format!("exited with status {}", output.status)
            } else {
                format!("exited with status {}: {}", output.status, stderr)
            };
            return Err(MinverError::ToolInvocation {
                tool: self.tool_display(),
                message,
            });
        }

        tracing::debug!(
            "captured {} bytes of load command output",
            output.stdout.len()
        );
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn tool_name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("otool")
    }
}
