use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to uploads that arrive without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A comic in the catalog: an uploaded file plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ComicRecord {
    /// Process-unique id, assigned in upload order starting at 1.
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: u64,
    /// Display title.
    #[cfg_attr(feature = "openapi", schema(example = "Issue #1"))]
    pub title: String,
    /// Where the uploaded file can be fetched.
    #[cfg_attr(
        feature = "openapi",
        schema(example = "http://localhost:5000/uploads/1706800000000-482913.pdf")
    )]
    pub file_url: String,
    /// When the comic was uploaded.
    pub created_at: DateTime<Utc>,
    /// Name of the backing file inside the storage directory.
    #[serde(skip)]
    pub(crate) filename: String,
}

impl ComicRecord {
    /// Name of the backing file inside the storage directory.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename reported by the client; only its extension is kept.
    pub original_name: String,
    /// File contents.
    pub data: Bytes,
}

/// Input to [`ComicCatalog::create`](crate::ComicCatalog::create).
#[derive(Debug, Clone, Default)]
pub struct NewComic {
    /// Optional title; empty titles fall back to [`DEFAULT_TITLE`].
    pub title: Option<String>,
    /// The uploaded file, if the request carried one.
    pub file: Option<UploadedFile>,
}

impl NewComic {
    pub(crate) fn resolved_title(&self) -> String {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_owned()
    }
}
