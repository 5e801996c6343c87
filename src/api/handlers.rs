use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use crate::{
    error::{AppError, AppResult},
    models::{HistoryEntry, SubmissionForm, SubmissionReport, SubmissionStatus, Theme},
    services::export,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    pub title: String,
    pub message: String,
    pub path: String,
    pub rows: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Runs one form submission on a worker task
///
/// The worker is cancelled if this request is dropped before it finishes.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<SubmissionForm>,
) -> AppResult<Json<SubmissionReport>> {
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let controller = state.submissions.clone();
    let worker = tokio::spawn(async move { controller.submit(&form, cancel).await });

    let report = worker
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(Json(report))
}

/// Current submission phase, used to show the loading indicator
pub async fn submission_status(State(state): State<AppState>) -> Json<SubmissionStatus> {
    Json(state.submissions.status())
}

/// All saved recommendations, newest first
pub async fn get_history(State(state): State<AppState>) -> AppResult<Json<Vec<HistoryEntry>>> {
    let history = state.store.list_history().await?;
    Ok(Json(history))
}

/// Writes the history to the configured CSV file
pub async fn export_history(State(state): State<AppState>) -> AppResult<Json<ExportResponse>> {
    let entries = state.store.list_history().await?;
    let path = state.export_path.clone();

    let rows = {
        let path = path.clone();
        tokio::task::spawn_blocking(move || export::export_history(&entries, &path))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))??
    };

    Ok(Json(ExportResponse {
        title: "Export Successful".to_string(),
        message: format!("History exported to {}", path.display()),
        path: path.display().to_string(),
        rows,
    }))
}

/// Proxies a poster image from the catalog's image server
pub async fn get_poster(
    State(state): State<AppState>,
    Path(poster_path): Path<String>,
) -> AppResult<Response> {
    let poster = state.catalog.fetch_poster(&poster_path).await?;
    Ok(([(header::CONTENT_TYPE, poster.content_type)], poster.bytes).into_response())
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = *state.theme.read().await;
    Json(ThemeResponse { theme })
}

/// Switches between light and dark mode
pub async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let mut current = state.theme.write().await;
    let theme = current.toggled();
    *current = theme;
    tracing::debug!(theme = ?theme, "Theme toggled");
    Json(ThemeResponse { theme })
}
