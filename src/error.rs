use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::ValidationError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Could not export: {0}")]
    Export(String),

    #[error("A submission is already in progress")]
    Busy,

    #[error("Submission was cancelled")]
    Cancelled,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Export(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Export(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Validation(err) = &self {
            let body = Json(json!({
                "title": "Input Error",
                "error": err.to_string(),
                "field": err.field(),
            }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        if let AppError::Export(_) = &self {
            let body = Json(json!({
                "title": "Export Error",
                "error": self.to_string(),
            }));
            return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
        }

        let status = match &self {
            AppError::Busy => StatusCode::CONFLICT,
            AppError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ExternalApi(_) | AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::Database(_)
            | AppError::Export(_)
            | AppError::Internal(_)
            | AppError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
