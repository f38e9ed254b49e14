//! CLI module
//!
//! Command-line interface for the hiring data bridge.
//!
//! # Commands
//!
//! - `serve` - Start HTTP server mode
//! - `openings` - List active job openings
//! - `stages` - List active stages of an opening
//! - `candidates` - Fetch candidates, as JSON or a CSV file
//! - `job-description` - Print an opening's description as text

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, AppState};

#[cfg(test)]
mod server_tests;
