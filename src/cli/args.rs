//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Groundwork - Project dependency bootstrap automation.
#[derive(Debug, Parser)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output (stream installer output)
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
    /// Run the dependency bootstrap check (default if no command specified)
    Run(RunArgs),

    /// Show detected manifests and installer availability
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Propagate a failing installer's exit code instead of continuing
    #[arg(long)]
    pub stop_on_error: bool,

    /// Print the installer command without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Install strategy: add (from requirements.txt) or sync (from uv.lock)
    #[arg(long, default_value = "add")]
    pub strategy: String,

    /// Installer program to invoke
    #[arg(long, default_value = "uv", value_name = "BIN")]
    pub installer: String,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            stop_on_error: false,
            dry_run: false,
            strategy: "add".to_string(),
            installer: "uv".to_string(),
        }
    }
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Installer program to probe
    #[arg(long, default_value = "uv", value_name = "BIN")]
    pub installer: String,
}

impl Default for StatusArgs {
    fn default() -> Self {
        Self {
            json: false,
            installer: "uv".to_string(),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
