pub mod comics;
pub mod feedback;
pub mod health;
pub mod openapi;
pub mod schemas;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use inkshelf_catalog::{ComicCatalog, UPLOADS_PATH};
use inkshelf_feedback::FeedbackStore;

use self::openapi::ApiDoc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog of uploaded comics.
    pub catalog: Arc<ComicCatalog>,
    /// Append-only feedback log.
    pub feedback: Arc<dyn FeedbackStore>,
    /// Directory served under `/uploads`.
    pub storage_dir: PathBuf,
    /// Configured external origin for `fileUrl` locators, if any.
    pub public_url: Option<String>,
    /// Origin used when neither `public_url` nor a `Host` header is available.
    pub fallback_origin: String,
    /// Largest accepted request body in bytes.
    pub max_upload_bytes: usize,
}

/// Build the Axum router with all API routes, static uploads and Swagger UI.
pub fn router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.storage_dir);
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        // Liveness
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Comics
        .route("/api/comics", get(comics::list_comics))
        .route("/api/uploaded-comics", get(comics::list_uploaded_comics))
        .route("/api/uploaded-comics/{id}", delete(comics::delete_comic))
        .route("/api/upload", post(comics::upload_comic))
        // Feedback
        .route("/api/feedback", post(feedback::submit_feedback))
        // Stored files
        .nest_service(&format!("/{UPLOADS_PATH}"), uploads)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(body_limit)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
