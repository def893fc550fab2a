//! Minimum-version marker matching.
//!
//! `otool -l` reports the deployment target of a Mach-O binary as a
//! `minos` line inside an `LC_BUILD_VERSION` load command:
//!
//! ```text
//! Load command 9
//!       cmd LC_BUILD_VERSION
//!   cmdsize 32
//!  platform 1
//!     minos 10.13
//!       sdk 13.1
//! ```
//!
//! Matching is exact on the line token: the expected version must be the
//! entire value, so `minos 10.130` does not satisfy an expected `10.13`.

use regex::Regex;

/// Check whether `output` declares `version` as its minimum OS version.
///
/// A line matches when it is optional whitespace, the token `minos`,
/// whitespace, then the literal expected version at end of line.
pub fn contains_min_version(output: &str, version: &str) -> bool {
    let pattern = format!(r"(?m)^\s*minos[ \t]+{}[ \t]*$", regex::escape(version));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(output),
        Err(_) => false,
    }
}
