//! HTTP request handlers for the action item API.
//!
//! Implements extraction, listing, mark-done and note endpoints using axum.
//! Failures reach callers as short "failed to ..." messages; the cause is
//! only logged.

use crate::schemas::{
    ActionItemDetail, ActionItemResponse, ErrorResponse, ExtractRequest, ExtractResponse,
    HealthCheckResponse, ListQuery, MarkDoneRequest, MarkDoneResponse, NoteCreate, NoteResponse,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard};
use tasknote_domain::traits::{ActionItemExtractor, NoteStore};
use tasknote_domain::{ActionItemId, NoteId};
use tasknote_extractor::ExtractorError;
use tasknote_store::{SqliteStore, StoreError};
use tracing::{debug, error, info};

/// An extractor that can be shared across request handlers
pub type SharedExtractor = Arc<dyn ActionItemExtractor<Error = ExtractorError> + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Note and action item storage
    pub store: Arc<Mutex<SqliteStore>>,
    /// Extractor behind `/action-items/extract`
    pub heuristic: SharedExtractor,
    /// Extractor behind `/action-items/extract-llm`
    pub llm: SharedExtractor,
}

impl AppState {
    /// Create application state from a store and the two extractors
    pub fn new(store: SqliteStore, heuristic: SharedExtractor, llm: SharedExtractor) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            heuristic,
            llm,
        }
    }

    /// Lock the store; the guard must not be held across an `.await`
    fn store(&self) -> MutexGuard<'_, SqliteStore> {
        // a panic mid-query leaves the connection itself usable
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed request content
    Validation(&'static str),
    /// Referenced row does not exist
    NotFound(&'static str),
    /// Anything else; the cause has already been logged
    Internal(&'static str),
}

impl AppError {
    /// Log the cause and keep only the caller-facing message
    fn internal(message: &'static str, cause: impl Display) -> Self {
        error!("{}: {}", message, cause);
        AppError::Internal(message)
    }
}

// Extractor rejections surface as 400 with a `{"detail"}` body
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        AppError::Validation("invalid request body")
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        debug!("Rejected query string: {}", rejection.body_text());
        AppError::Validation("invalid query string")
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        debug!("Rejected path parameter: {}", rejection.body_text());
        AppError::Validation("invalid path parameter")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            detail: message.to_string(),
        });
        (status, body).into_response()
    }
}

/// POST /action-items/extract - Heuristic extraction
async fn extract(
    State(state): State<AppState>,
    request: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let Json(request) = request?;
    let extractor = state.heuristic.clone();
    run_extraction(&state, extractor, request).await
}

/// POST /action-items/extract-llm - LLM extraction
async fn extract_llm(
    State(state): State<AppState>,
    request: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    let Json(request) = request?;
    let extractor = state.llm.clone();
    run_extraction(&state, extractor, request).await
}

/// Validate, optionally save the note, extract, then save the items
///
/// The note and the items are written separately; a failure in between
/// leaves the note without items.
async fn run_extraction(
    state: &AppState,
    extractor: SharedExtractor,
    request: ExtractRequest,
) -> Result<Json<ExtractResponse>, AppError> {
    let text = request.text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Validation("text is required"));
    }

    let note_id = if request.save_note {
        let id = state
            .store()
            .insert_note(&text)
            .map_err(|e| AppError::internal("failed to save note", e))?;
        Some(id)
    } else {
        None
    };

    // The LLM extractor blocks on network I/O
    let items = tokio::task::spawn_blocking(move || extractor.extract(&text))
        .await
        .map_err(|e| AppError::internal("failed to extract action items", e))?
        .map_err(|e| AppError::internal("failed to extract action items", e))?;

    let ids = state
        .store()
        .insert_action_items(&items, note_id)
        .map_err(|e| AppError::internal("failed to save action items", e))?;

    info!(
        "Extracted {} action items (note: {})",
        items.len(),
        note_id.map_or_else(|| "none".to_string(), |id| id.to_string())
    );

    Ok(Json(ExtractResponse {
        note_id: note_id.map(|id| id.value()),
        items: ids
            .into_iter()
            .zip(items)
            .map(|(id, text)| ActionItemResponse {
                id: id.value(),
                text,
            })
            .collect(),
    }))
}

/// GET /action-items - List action items, optionally for one note
async fn list_action_items(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ActionItemDetail>>, AppError> {
    let Query(query) = query?;
    let items = state
        .store()
        .list_action_items(query.note_id.map(NoteId::from_value))
        .map_err(|e| AppError::internal("failed to list action items", e))?;

    Ok(Json(items.into_iter().map(ActionItemDetail::from).collect()))
}

/// POST /action-items/:id/done - Set the completion flag
async fn mark_done(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    request: Result<Json<MarkDoneRequest>, JsonRejection>,
) -> Result<Json<MarkDoneResponse>, AppError> {
    let Path(id) = id?;
    let Json(request) = request?;
    let result = state
        .store()
        .mark_action_item_done(ActionItemId::from_value(id), request.done);

    match result {
        Ok(()) => Ok(Json(MarkDoneResponse {
            id,
            done: request.done,
        })),
        Err(StoreError::NotFound(_)) => Err(AppError::NotFound("action item not found")),
        Err(e) => Err(AppError::internal("failed to update action item", e)),
    }
}

/// POST /notes - Save a note without extracting
async fn create_note(
    State(state): State<AppState>,
    request: Result<Json<NoteCreate>, JsonRejection>,
) -> Result<Json<NoteResponse>, AppError> {
    let Json(request) = request?;
    let content = request.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("content is required"));
    }

    let mut store = state.store();
    let id = store
        .insert_note(content)
        .map_err(|e| AppError::internal("failed to save note", e))?;
    let note = store
        .get_note(id)
        .map_err(|e| AppError::internal("failed to save note", e))?
        .ok_or_else(|| {
            AppError::internal("failed to save note", format!("note {} missing after insert", id))
        })?;

    Ok(Json(note.into()))
}

/// GET /notes - List notes, newest first
async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let notes = state
        .store()
        .list_notes()
        .map_err(|e| AppError::internal("failed to list notes", e))?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// GET /notes/:id - Fetch a single note
async fn get_note(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<NoteResponse>, AppError> {
    let Path(id) = id?;
    let note = state
        .store()
        .get_note(NoteId::from_value(id))
        .map_err(|e| AppError::internal("failed to load note", e))?
        .ok_or(AppError::NotFound("note not found"))?;

    Ok(Json(note.into()))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/action-items", get(list_action_items))
        .route("/action-items/extract", post(extract))
        .route("/action-items/extract-llm", post(extract_llm))
        .route("/action-items/:id/done", post(mark_done))
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:id", get(get_note))
        .route("/health", get(health_check))
        .with_state(state)
}
