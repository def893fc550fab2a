//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! The check is the default operation: `minver <PATH> <VERSION>` and
//! `minver check <PATH> <VERSION>` are equivalent. Bare positionals and
//! subcommands coexist via clap's `args_conflicts_with_subcommands` +
//! `subcommand_negates_reqs` pattern.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Minver - Mach-O minimum macOS version verification.
#[derive(Debug, Parser)]
#[command(name = "minver")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a binary's minimum macOS version (default if no command specified)
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Path to the Mach-O binary to inspect
    #[arg(value_name = "PATH", required = true)]
    pub path: Option<PathBuf>,

    /// Expected minimum macOS version, e.g. 10.13
    #[arg(id = "min_version", value_name = "VERSION", required = true)]
    pub version: Option<String>,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Inspection tool to invoke instead of otool
    #[arg(long, value_name = "PATH", env = "MINVER_OTOOL")]
    pub tool: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
