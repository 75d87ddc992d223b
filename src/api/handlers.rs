//! HTTP request handlers

use super::types::{CallbackRequest, ErrorResponse, MessageRequest, RepliesResponse};
use super::AppState;
use crate::dialogue::{Callback, Event};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Commands
        .route("/api/conversations/:id/start", post(start))
        .route("/api/conversations/:id/help", post(help))
        // User input
        .route("/api/conversations/:id/message", post(send_message))
        .route("/api/conversations/:id/callback", post(press_button))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Dialogue Events
// ============================================================

async fn start(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RepliesResponse>, AppError> {
    dispatch(&state, &id, Event::Start).await
}

async fn help(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RepliesResponse>, AppError> {
    dispatch(&state, &id, Event::Help).await
}

async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<RepliesResponse>, AppError> {
    dispatch(&state, &id, Event::Text { text: req.text }).await
}

async fn press_button(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CallbackRequest>,
) -> Result<Json<RepliesResponse>, AppError> {
    let callback: Callback = req.data.parse().map_err(|e| {
        tracing::warn!(conv_id = %id, error = %e, "Rejected callback");
        AppError::BadRequest(format!("{e}"))
    })?;
    dispatch(&state, &id, Event::Button(callback)).await
}

async fn dispatch(
    state: &AppState,
    conv_id: &str,
    event: Event,
) -> Result<Json<RepliesResponse>, AppError> {
    let replies = state
        .runtime
        .handle(conv_id, event)
        .await
        .map_err(|e| {
            tracing::error!(conv_id = %conv_id, error = %e, "Failed to handle event");
            AppError::Internal(e)
        })?;

    Ok(Json(RepliesResponse { replies }))
}

async fn get_version() -> &'static str {
    concat!("track-namer ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
