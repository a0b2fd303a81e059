//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// wrapkit demo CLI
#[derive(Parser, Debug)]
#[command(name = "wrapkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the demo HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Use the JSON:API-style formatter instead of the default envelope
        #[arg(long)]
        json_api: bool,
    },
}
