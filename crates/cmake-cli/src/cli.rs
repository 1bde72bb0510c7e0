//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CMake build provider - discover projects and resolve configure presets
#[derive(Parser, Debug)]
#[command(name = "cbp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan project directories and resolve their active presets
    Scan {
        /// Project directories to scan
        #[arg(default_value = ".")]
        dirs: Vec<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the build descriptions offered for a project directory
    Targets {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}
