//! Tasknote Server
//!
//! HTTP API over the action item extractors and the note store.
//!
//! # Endpoints
//!
//! - `POST /action-items/extract` - heuristic extraction
//! - `POST /action-items/extract-llm` - LLM extraction
//! - `GET /action-items?note_id=` - list stored items
//! - `POST /action-items/:id/done` - set the completion flag
//! - `POST /notes`, `GET /notes`, `GET /notes/:id` - notes
//! - `GET /health` - liveness

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod handlers;
pub mod schemas;

use config::ServerConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tasknote_extractor::{ExtractorError, HeuristicExtractor, LlmExtractor};
use tasknote_store::{SqliteStore, StoreError};
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to open the database
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Failed to set up the LLM extractor
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Open the store and build both extractors from configuration
///
/// Must be called outside of an async context: the LLM extractor owns a
/// blocking HTTP client.
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    info!("Opening database at {}", config.database_path.display());
    let store = SqliteStore::new(&config.database_path)?;

    let llm = LlmExtractor::from_config(config.llm.clone())?;

    Ok(AppState::new(
        store,
        Arc::new(HeuristicExtractor::new()),
        Arc::new(llm),
    ))
}

/// Start the HTTP server
///
/// Binds the configured address and serves until the process is stopped.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    info!("Starting Tasknote server");
    info!("LLM model: {}", config.llm.model);

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
