use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::card::CardError;
use crate::gallery::GalleryError;
use crate::numerology::NumerologyError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Image generation failed: {0}")]
    RenderFailed(#[from] CardError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<NumerologyError> for AppError {
    fn from(e: NumerologyError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<GalleryError> for AppError {
    fn from(e: GalleryError) -> Self {
        match e {
            GalleryError::FolderMissing(dir) => {
                AppError::NotFound(format!("Gallery folder {} not found", dir.display()))
            }
            GalleryError::Io(io) => AppError::Internal(io.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::RenderFailed(e) => {
                tracing::error!("Card rendering failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IMAGE_GENERATION_FAILED",
                    "Image generation failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
