//! Minver - Mach-O minimum macOS version verification.
//!
//! Minver is a build-verification helper that checks whether a compiled
//! Mach-O binary was built targeting a specific minimum macOS version. It
//! invokes `otool -l` against the binary, scans the load command dump for a
//! `minos <version>` marker, and exits 0 on a match (or on platforms where
//! inspection is unavailable) and 1 otherwise.
//!
//! # Modules
//!
//! - [`check`] - Version checker core and outcome types
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`inspect`] - External inspection tool invocation
//! - [`platform`] - Platform capability detection
//! - [`report`] - Human and JSON result rendering
//!
//! # Example
//!
//! ```
//! use minver::check::contains_min_version;
//!
//! let dump = "Load command 9\n      cmd LC_BUILD_VERSION\n    minos 10.13\n";
//! assert!(contains_min_version(dump, "10.13"));
//! assert!(!contains_min_version(dump, "10.12"));
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod inspect;
pub mod platform;
pub mod report;

pub use error::{MinverError, Result};
