//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Migrate career-simulation job records from schema v5 to v6
#[derive(Parser, Debug)]
#[command(name = "skillmig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit JSON results and errors on stdout
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/skillmig/config.toml, then ./skillmig.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert v5 job records into v6 records plus skill registries
    Migrate(commands::migrate::MigrateArgs),

    /// Check a set of v6 documents for reference integrity
    Verify(commands::verify::VerifyArgs),

    /// Rebuild v5-shaped records from v6 documents
    Downgrade(commands::downgrade::DowngradeArgs),
}
