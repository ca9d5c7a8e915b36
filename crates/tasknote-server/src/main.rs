//! Tasknote server binary
//!
//! Starts the HTTP API for action item extraction.

use clap::Parser;
use std::process;
use tasknote_server::{build_state, cli::Cli, start_server, ServerError};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ServerError> {
    let config = Cli::parse().resolve_config()?;

    // Built before the runtime starts and dropped after it stops, so the
    // blocking HTTP client never lives inside an async context
    let state = build_state(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ServerError::Server(format!("failed to start runtime: {}", e)))?;
    runtime.block_on(start_server(&config, state.clone()))?;
    drop(runtime);
    drop(state);

    Ok(())
}
