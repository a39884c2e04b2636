use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use inkshelf_feedback::NewFeedback;

use super::AppState;
use super::schemas::{ErrorResponse, FeedbackResponse};
use crate::error::ServerError;

/// `POST /api/feedback` -- append a feedback record.
///
/// A body sent without a JSON content type is treated as empty, so it fails
/// the same way as a body that omits `feedback`.
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = "Feedback",
    summary = "Submit feedback",
    request_body = NewFeedback,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackResponse),
        (status = 400, description = "Feedback text missing or body malformed", body = ErrorResponse)
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<NewFeedback>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let entry = match payload {
        Ok(Json(entry)) => entry,
        Err(JsonRejection::MissingJsonContentType(_)) => NewFeedback::default(),
        Err(rejection) => return Err(ServerError::BadRequest(rejection.body_text())),
    };

    let record = state.feedback.submit(entry).await?;
    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            message: "Feedback saved".into(),
            feedback: record,
        }),
    ))
}
