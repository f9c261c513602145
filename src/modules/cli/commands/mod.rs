//! CLI commands

mod check;
mod run;

pub use check::CheckCommand;
pub use run::RunCommand;

use clap::{Parser, Subcommand};
use tracing::Level;

/// Roster - read-only HTTP query service for agent records
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `roster run -f roster.yaml`.
    #[arg(short = 'f', long = "file", global = true, default_value = "roster.yaml")]
    pub config: String,

    /// Enable verbose logging (overrides the configured log level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Roster server
    Run(RunCommand),

    /// Validate the configuration and check the store is reachable
    Check(CheckCommand),
}

impl Cli {
    /// Log level to start with, given the configured `server.log_level`
    pub fn log_level(&self, configured: u8) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            level_from_config(configured)
        }
    }
}

/// Map `server.log_level` (0=DEBUG, 1=INFO, 2=WARN, 3=ERROR) to a tracing level
pub fn level_from_config(level: u8) -> Level {
    match level {
        0 => Level::DEBUG,
        1 => Level::INFO,
        2 => Level::WARN,
        _ => Level::ERROR,
    }
}
