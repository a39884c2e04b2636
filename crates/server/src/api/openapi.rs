#![allow(clippy::needless_for_each)]

use inkshelf_catalog::ComicRecord;
use inkshelf_feedback::{FeedbackRecord, NewFeedback};

use super::schemas::{
    ErrorResponse, FeedbackResponse, HealthResponse, MessageResponse, UploadForm,
};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Inkshelf API",
        version = "0.1.0",
        description = "Upload, list and delete comics, and leave feedback.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Comics", description = "Uploaded comic catalog"),
        (name = "Feedback", description = "Write-only feedback log")
    ),
    paths(
        super::health::root,
        super::health::health,
        super::comics::list_comics,
        super::comics::list_uploaded_comics,
        super::comics::upload_comic,
        super::comics::delete_comic,
        super::feedback::submit_feedback,
    ),
    components(schemas(
        ComicRecord,
        FeedbackRecord,
        NewFeedback,
        HealthResponse,
        MessageResponse,
        FeedbackResponse,
        UploadForm,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;
