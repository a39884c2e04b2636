use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use inkshelf_feedback::FeedbackRecord;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status indicator.
    #[schema(example = "ok")]
    pub status: String,
    /// Server version.
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Short confirmation returned by mutating endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    #[schema(example = "Deleted successfully")]
    pub message: String,
}

/// Response after a feedback submission is stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    /// Human-readable confirmation.
    #[schema(example = "Feedback saved")]
    pub message: String,
    /// The stored record.
    pub feedback: FeedbackRecord,
}

/// Multipart form accepted by `POST /api/upload`.
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// Optional display title; defaults to `"Untitled"`.
    #[schema(example = "Issue #1")]
    pub title: Option<String>,
    /// The file to store. Its extension is kept, `.pdf` if it has none.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Generic error response returned on failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    #[schema(example = "Comic not found")]
    pub message: String,
}
