//! Binary inspection via an external tool.
//!
//! The subprocess mechanics live behind the [`BinaryInspector`] trait so the
//! checker can be exercised in tests with canned output instead of a real
//! `otool` install.

mod otool;

pub use otool::OtoolInspector;

use std::path::Path;

use crate::error::Result;

/// Produces a textual dump of a binary's load commands.
pub trait BinaryInspector {
    /// Inspect the binary at `path`, returning the tool's standard output.
    ///
    /// A spawn failure or non-zero tool exit maps to
    /// [`MinverError::ToolInvocation`](crate::error::MinverError::ToolInvocation).
    fn inspect(&self, path: &Path) -> Result<String>;

    /// Name of the underlying tool, for diagnostics.
    fn tool_name(&self) -> &str;
}
