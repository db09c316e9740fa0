//! Axum route handlers for the slang server.
//!
//! # Routes
//!
//! - `GET  /`             — Input form
//! - `POST /transform`    — Local table-based transform (form field `text`)
//! - `POST /ai-transform` — Remote delegate transform (JSON or form field `text`)
//! - `GET  /health`       — Returns `{"status": "ok", "version": ..., "service": "slangify"}`

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

use crate::llms::base_llm::SlangDelegate;
use crate::server::extract::{FormText, PayloadText};
use crate::server::templates::{PageView, Pages};
use crate::slang::SlangTransformer;
use crate::utilities::errors::DelegateError;

/// Shown when `/ai-transform` gets no text.
pub const TEXT_REQUIRED_MESSAGE: &str = "text is required boomer";
/// Shown when the delegate request fails.
pub const REQUEST_FAILED_MESSAGE: &str = "request failed, womp womp, holup i am fixing ts maybe";

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Local transformer (stateless, read-only tables).
    pub slang: SlangTransformer,
    /// Remote slang delegate.
    pub delegate: Arc<dyn SlangDelegate>,
    /// Compiled page templates.
    pub pages: Arc<Pages>,
}

impl AppState {
    pub fn new(delegate: Arc<dyn SlangDelegate>) -> Result<Self, tera::Error> {
        Ok(Self {
            slang: SlangTransformer::new(),
            delegate,
            pages: Arc::new(Pages::new()?),
        })
    }

    fn render(&self, view: &PageView) -> Response {
        match self.pages.render_index(view) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                tracing::error!("Failed to render page: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/transform", post(transform_handler))
        .route("/ai-transform", post(ai_transform_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / — empty form.
async fn index_handler(State(state): State<AppState>) -> Response {
    state.render(&PageView::default())
}

/// POST /transform — local transform of form field `text` (urlencoded or
/// multipart).
async fn transform_handler(
    State(state): State<AppState>,
    FormText(text): FormText,
) -> Response {
    tracing::debug!(chars = text.chars().count(), "Local slang transform");

    let output = state.slang.transform(&text);
    state.render(&PageView::output(text, output))
}

/// POST /ai-transform — delegate transform of `text` from a JSON or form body.
async fn ai_transform_handler(
    State(state): State<AppState>,
    PayloadText(text): PayloadText,
) -> Response {
    if text.is_empty() {
        return state.render(&PageView::error(text, TEXT_REQUIRED_MESSAGE));
    }

    tracing::debug!(
        provider = state.delegate.provider(),
        chars = text.chars().count(),
        "Delegating slang transform"
    );

    match state.delegate.rewrite(&text).await {
        Ok(output) => state.render(&PageView::output(text, output)),
        Err(e @ DelegateError::Configuration { .. }) => {
            tracing::warn!("Slang delegate not configured: {}", e);
            state.render(&PageView::error(text, e.to_string()))
        }
        Err(e @ DelegateError::Request { .. }) => {
            tracing::warn!("Slang delegate failed: {}", e);
            state.render(&PageView::error(text, REQUEST_FAILED_MESSAGE))
        }
    }
}

/// GET /health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "service": "slangify",
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
