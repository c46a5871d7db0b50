//! The HTTP layer: serves the search page, the pre-rendered HTML documents,
//! and the search endpoint.
//!
//! The index is loaded once at startup and never mutated, so the shared state
//! needs no locking; concurrent searches are plain reads.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::error::{MarkhiveError, Result};
use crate::index::{Query, SearchIndex};
use crate::model::NoteRecord;

const SEARCH_PAGE: &str = include_str!("../../static/index.html");

pub struct AppState {
    index: SearchIndex,
    html_dir: PathBuf,
}

impl AppState {
    pub fn new(index: SearchIndex, html_dir: PathBuf) -> Self {
        Self { index, html_dir }
    }
}

/// A note on the wire: `content` is omitted from search responses for size;
/// clients fetch the rendered document via `file` instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct RetrievedNote {
    pub file: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl From<&NoteRecord> for RetrievedNote {
    fn from(record: &NoteRecord) -> Self {
        Self {
            file: record.file.clone(),
            title: record.title.clone(),
            tags: record.tags.clone(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub responses: Vec<RetrievedNote>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/notes/:file", post(note))
        .route("/search", post(search))
        .with_state(state)
        .layer(cors)
}

/// Bind and serve until ctrl-c.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| MarkhiveError::Server(format!("failed to bind {}: {}", addr, e)))?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, notes = state.index.len(), "serving note archive");

    axum::serve(listener, router(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}

async fn home() -> Html<&'static str> {
    Html(SEARCH_PAGE)
}

/// POST /notes/:file — the pre-rendered HTML document, verbatim.
async fn note(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
) -> std::result::Result<Response, ApiError> {
    // The `file` identifiers handed out by search never contain separators.
    if file.contains('/') || file.contains('\\') || file.contains("..") {
        return Err(ApiError::forbidden("path traversal denied"));
    }

    let path = state.html_dir.join(&file);
    let bytes = tokio::fs::read(&path).await.map_err(|_| {
        tracing::warn!(%file, "requested note has no rendered document");
        ApiError::not_found("note not found")
    })?;

    Ok((
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        bytes,
    )
        .into_response())
}

/// POST /search — raw request body is the query term.
async fn search(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> std::result::Result<Json<SearchResponse>, ApiError> {
    let query = Query::parse(&body)?;
    let matches = state.index.search(&query)?;
    tracing::debug!(matches = matches.len(), "search");

    Ok(Json(SearchResponse {
        responses: matches.into_iter().map(RetrievedNote::from).collect(),
    }))
}

/// Request-level error with a JSON body.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }
}

impl From<MarkhiveError> for ApiError {
    fn from(err: MarkhiveError) -> Self {
        let status = match err {
            MarkhiveError::InvalidQuery => StatusCode::BAD_REQUEST,
            MarkhiveError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}
