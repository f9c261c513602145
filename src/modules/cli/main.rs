//! Roster CLI
//!
//! Command-line interface for the Roster agents query service.

use clap::Parser;
use roster_cli::{Cli, Commands};
use roster_core::RosterError;
use roster_parser::parse_file;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), RosterError> {
    let cli = Cli::parse();

    // Configuration comes first: it carries the log level
    let service = parse_file(&cli.config)?;

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level(service.log_level()).into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    info!("Loaded configuration from: {}", cli.config);

    // Execute command
    match cli.command {
        Commands::Run(cmd) => {
            cmd.execute(service).await?;
        }
        Commands::Check(cmd) => {
            cmd.execute(service).await?;
        }
    }

    Ok(())
}
