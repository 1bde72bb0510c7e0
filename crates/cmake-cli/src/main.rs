//! CMake build provider CLI
//!
//! A command-line host wiring of the integration engine: scans project
//! directories and reports their resolved configure presets.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Scan { dirs, json }) => commands::run_scan(&dirs, json).await,
        Some(Commands::Targets { dir }) => commands::run_targets(&dir).await,
        None => {
            println!("{} CMake build provider CLI", "cbp".green().bold());
            println!();
            println!("Run {} for available commands.", "cbp --help".cyan());
            Ok(())
        }
    }
}
