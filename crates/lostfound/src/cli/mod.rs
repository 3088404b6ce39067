//! Command-line interface for lostfound.
//!
//! This module provides the CLI structure and the presentation helpers for
//! the `lostfound` binary. A one-shot command works against a fresh
//! in-process registry seeded from configuration; `lostfound shell` keeps one
//! registry alive for a whole session.

mod commands;
mod render;
mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    CatalogCommand, ConfigCommand, KindArg, OutputFormat, RegisterCommand, SearchCommand,
    StatsCommand, TypeArg,
};
pub use render::{
    error_message, registered_message, render_catalog, render_config, render_record,
    render_search, render_statistics, validation_message,
};
pub use session::{LineOutcome, Session};

use crate::config::Config;
use crate::error::Result;
use crate::registry::{seed, Registry};

/// lostfound - Campus lost-and-found registry
///
/// Register lost or found items, search them by keyword, category and kind,
/// and view per-category and per-location statistics.
#[derive(Debug, Parser)]
#[command(name = "lostfound")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a lost or found item
    Register(RegisterCommand),

    /// Search registered items
    Search(SearchCommand),

    /// Show category and location statistics
    Stats(StatsCommand),

    /// List valid categories and locations
    Catalog(CatalogCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Read commands from stdin against one registry until `quit`
    Shell,
}

impl Command {
    /// Whether the command reads or writes registry records.
    #[must_use]
    pub fn needs_registry(&self) -> bool {
        matches!(
            self,
            Self::Register(_) | Self::Search(_) | Self::Stats(_) | Self::Shell
        )
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

/// Build the registry a command runs against.
///
/// # Errors
///
/// Returns an error if the configured seed file cannot be loaded.
pub fn open_registry(config: &Config) -> Result<Registry> {
    let registry = Registry::new();
    if config.registry.seed_sample_data {
        seed::seed_samples(&registry)?;
    }
    if let Some(path) = &config.registry.seed_file {
        seed::load_seed_file(&registry, path)?;
    }
    Ok(registry)
}
