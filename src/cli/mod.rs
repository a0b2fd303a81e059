//! CLI module
//!
//! Command-line interface for the demo server.
//!
//! # Commands
//!
//! - `serve` - Start the demo HTTP server showcasing envelopes and pagination

mod commands;
mod server;

pub use commands::{Cli, Commands};
pub use server::{build_router, serve, ServerConfig};
