use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use inkshelf_catalog::CatalogError;
use inkshelf_feedback::FeedbackError;

use crate::api::schemas::ErrorResponse;

/// Message returned for any unknown comic id.
const COMIC_NOT_FOUND: &str = "Comic not found";

/// Errors that can occur when running the Inkshelf server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog-level error surfaced through the API.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A feedback-log error surfaced through the API.
    #[error("feedback error: {0}")]
    Feedback(#[from] FeedbackError),

    /// The multipart upload body could not be read.
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// The request could not be understood.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The path did not name a known comic.
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Catalog(e @ CatalogError::MissingFile) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Catalog(CatalogError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, COMIC_NOT_FOUND.to_owned())
            }
            Self::Catalog(CatalogError::Storage(e)) => {
                tracing::error!(error = %e, "upload error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Upload error".to_owned())
            }
            Self::Feedback(e @ FeedbackError::MissingFeedback) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            Self::Multipart(e) => (e.status(), e.body_text()),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, COMIC_NOT_FOUND.to_owned()),
            Self::Config(_) | Self::Io(_) => {
                tracing::error!(error = %self, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        (status, axum::Json(ErrorResponse { message })).into_response()
    }
}
