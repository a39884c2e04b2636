//! Comic upload, listing and deletion endpoints.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use tracing::debug;

use inkshelf_catalog::{ComicRecord, NewComic, UploadedFile};

use super::AppState;
use super::schemas::{ErrorResponse, MessageResponse, UploadForm};
use crate::error::ServerError;

/// `GET /api/comics` -- list all uploaded comics, oldest first.
#[utoipa::path(
    get,
    path = "/api/comics",
    tag = "Comics",
    summary = "List comics",
    responses(
        (status = 200, description = "All comics in upload order", body = [ComicRecord])
    )
)]
pub async fn list_comics(State(state): State<AppState>) -> Json<Vec<ComicRecord>> {
    Json(state.catalog.list().await)
}

/// `GET /api/uploaded-comics` -- same listing as `/api/comics`.
#[utoipa::path(
    get,
    path = "/api/uploaded-comics",
    tag = "Comics",
    summary = "List uploaded comics",
    responses(
        (status = 200, description = "All comics in upload order", body = [ComicRecord])
    )
)]
pub async fn list_uploaded_comics(State(state): State<AppState>) -> Json<Vec<ComicRecord>> {
    Json(state.catalog.list().await)
}

/// `POST /api/upload` -- store a file and add it to the catalog.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Comics",
    summary = "Upload a comic",
    description = "Stores the `file` part on disk and returns the new catalog record. No content-type checks are made.",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Comic stored", body = ComicRecord),
        (status = 400, description = "No file received or malformed form", body = ErrorResponse),
        (status = 413, description = "Upload exceeds the configured size limit", body = ErrorResponse),
        (status = 500, description = "File could not be written", body = ErrorResponse)
    )
)]
pub async fn upload_comic(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let upload = match multipart {
        Ok(multipart) => read_upload(multipart).await?,
        Err(rejection) => {
            debug!(%rejection, "upload request without a multipart body");
            NewComic::default()
        }
    };

    let base_url = base_url(&state, &headers);
    let record = state.catalog.create(upload, &base_url).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `DELETE /api/uploaded-comics/{id}` -- remove a comic and its file.
#[utoipa::path(
    delete,
    path = "/api/uploaded-comics/{id}",
    tag = "Comics",
    summary = "Delete a comic",
    params(
        ("id" = u64, Path, description = "Comic id")
    ),
    responses(
        (status = 200, description = "Comic deleted", body = MessageResponse),
        (status = 404, description = "Comic not found", body = ErrorResponse)
    )
)]
pub async fn delete_comic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ServerError> {
    let id: u64 = id
        .parse()
        .map_err(|_| ServerError::NotFound(format!("invalid comic id: {id}")))?;

    state.catalog.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Deleted successfully".into(),
    }))
}

/// Collect the `title` and `file` parts of an upload form.
///
/// Parts without a filename are not files; they are skipped like any other
/// unknown field. Browsers send `filename=""` when no file was chosen.
async fn read_upload(mut multipart: Multipart) -> Result<NewComic, ServerError> {
    let mut upload = NewComic::default();

    while let Some(field) = multipart.next_field().await? {
        let key = field.name().unwrap_or("").to_owned();
        match key.as_str() {
            "title" => {
                upload.title = Some(field.text().await?);
            }
            "file" => {
                let Some(original_name) = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned)
                else {
                    debug!("ignoring `file` part without a filename");
                    continue;
                };
                if upload.file.is_some() {
                    return Err(ServerError::BadRequest(
                        "Only one file may be uploaded".into(),
                    ));
                }
                let data = field.bytes().await?;
                upload.file = Some(UploadedFile {
                    original_name,
                    data,
                });
            }
            other => debug!(field = other, "ignoring unknown upload field"),
        }
    }

    Ok(upload)
}

/// Origin prefixed to `fileUrl` locators for this request.
fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.public_url {
        return url.clone();
    }

    headers
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
        .filter(|host| !host.is_empty())
        .map_or_else(
            || state.fallback_origin.clone(),
            |host| format!("http://{host}"),
        )
}
