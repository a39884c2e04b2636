use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::schemas::HealthResponse;

/// Plain-text liveness message served at `/`.
pub const LIVENESS_MESSAGE: &str = "Inkshelf backend running";

/// `GET /` -- plain-text liveness probe.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    summary = "Liveness",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    LIVENESS_MESSAGE
}

/// `GET /health` -- returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    };
    (StatusCode::OK, Json(body))
}
