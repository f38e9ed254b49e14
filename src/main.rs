//! hiring-bridge CLI
//!
//! Serves or prints Base Hiring data

use clap::Parser;
use hiring_bridge::cli::{Cli, Runner};
use hiring_bridge::logging::log_filter;
use hiring_bridge::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, &config.log_level, env.as_deref()))
        .init();

    if let Err(e) = Runner::new(cli, config).run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
