//! Integration tests for the library check API.
//!
//! These drive the checker through the public API with a real subprocess
//! (a fake inspection tool) so the inspect/check/report seams are exercised
//! together on any unix platform, independent of the CLI's platform gate.

use std::path::Path;

use minver::check::{CheckOutcome, FailureReason, VersionChecker};
use minver::inspect::{BinaryInspector, OtoolInspector};
use minver::report::{CheckReport, HumanFormat, JsonFormat, OutputMode, ReportFormat};

#[cfg(unix)]
mod with_fake_tool {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write an executable script that prints `dump` and exits `code`.
    fn fake_tool(dir: &Path, dump: &str, code: i32) -> PathBuf {
        let tool = dir.join("fake-otool");
        fs::write(
            &tool,
            format!("#!/bin/sh\ncat <<'EOF'\n{}\nEOF\nexit {}\n", dump, code),
        )
        .unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        tool
    }

    #[test]
    fn checker_passes_against_real_subprocess_output() {
        let temp = TempDir::new().unwrap();
        let tool = fake_tool(temp.path(), "    minos 10.13\n      sdk 13.1", 0);

        let inspector = OtoolInspector::with_program(tool);
        let checker = VersionChecker::with_support(inspector, true);
        let outcome = checker.check(Path::new("/tmp/app"), "10.13");
        assert_eq!(outcome, CheckOutcome::Passed);
    }

    #[test]
    fn checker_fails_against_mismatched_subprocess_output() {
        let temp = TempDir::new().unwrap();
        let tool = fake_tool(temp.path(), "    minos 10.12", 0);

        let inspector = OtoolInspector::with_program(tool);
        let checker = VersionChecker::with_support(inspector, true);
        let outcome = checker.check(Path::new("/tmp/app"), "10.13");
        assert!(matches!(
            outcome,
            CheckOutcome::Failed {
                reason: FailureReason::MarkerNotFound { .. }
            }
        ));
    }

    #[test]
    fn nonzero_tool_exit_becomes_invocation_failure() {
        let temp = TempDir::new().unwrap();
        let tool = fake_tool(temp.path(), "can't map file", 1);

        let inspector = OtoolInspector::with_program(tool);
        let checker = VersionChecker::with_support(inspector, true);
        let outcome = checker.check(Path::new("/tmp/app"), "10.13");
        match outcome {
            CheckOutcome::Failed {
                reason: FailureReason::ToolInvocation { message },
            } => assert!(message.contains("exited with status")),
            other => panic!("expected invocation failure, got {:?}", other),
        }
    }

    #[test]
    fn inspector_output_reaches_marker_scan_unaltered() {
        let temp = TempDir::new().unwrap();
        let dump = "Load command 9\n      cmd LC_BUILD_VERSION\n    minos 11.0\n";
        let tool = fake_tool(temp.path(), dump, 0);

        let inspector = OtoolInspector::with_program(tool);
        let output = inspector.inspect(Path::new("/tmp/app")).unwrap();
        assert!(output.contains("LC_BUILD_VERSION"));
        assert!(output.contains("minos 11.0"));
    }
}

/// Inspector with canned output, standing in for `otool` off-macOS.
struct StaticInspector(&'static str);

impl BinaryInspector for StaticInspector {
    fn inspect(&self, _path: &Path) -> minver::Result<String> {
        Ok(self.0.to_string())
    }

    fn tool_name(&self) -> &str {
        "otool"
    }
}

#[test]
fn unsupported_platform_skips_even_for_nonexistent_path() {
    let checker = VersionChecker::with_support(StaticInspector(""), false);
    let outcome = checker.check(Path::new("/definitely/not/there"), "10.13");
    assert!(outcome.is_success());
    assert!(matches!(outcome, CheckOutcome::Skipped { .. }));
}

#[test]
fn outcome_renders_through_both_formats() {
    let checker = VersionChecker::with_support(StaticInspector("    minos 10.12\n"), true);
    let outcome = checker.check(Path::new("/tmp/app"), "10.13");
    let report = CheckReport {
        path: Path::new("/tmp/app"),
        expected: "10.13",
        outcome: &outcome,
    };

    let mut human = Vec::new();
    HumanFormat::new(OutputMode::Normal)
        .render(&report, &mut human)
        .unwrap();
    let human = String::from_utf8(human).unwrap();
    assert!(human.contains("Expected /tmp/app to be built with -mmacosx-version-min=10.13"));

    let mut json = Vec::new();
    JsonFormat.render(&report, &mut json).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(parsed["outcome"], "failed");
}

#[test]
fn repeated_checks_yield_identical_outcomes() {
    let checker = VersionChecker::with_support(StaticInspector("    minos 10.13\n"), true);
    let path = Path::new("/tmp/app");
    let outcomes: Vec<_> = (0..3).map(|_| checker.check(path, "10.13")).collect();
    assert!(outcomes.iter().all(|o| *o == CheckOutcome::Passed));
}
