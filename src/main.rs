//! wrapkit demo CLI
//!
//! Runs the demo HTTP server showcasing envelopes and pagination

use clap::Parser;
use wrapkit::cli::{serve, Cli, Commands, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, json_api } => serve(ServerConfig { port, json_api }).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
