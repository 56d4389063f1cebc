//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::installer::DEFAULT_PYTHON;

/// pipstrap - Install the pip modules the Modbus bridge needs.
#[derive(Debug, Parser)]
#[command(name = "pipstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Python interpreter whose pip is used
    #[arg(long, global = true, env = "PIPSTRAP_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Print the pip commands without running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Echo each pip command before running it
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print the final outcome
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
    /// Upgrade pip and install the required modules (default if no command specified)
    Install,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
