use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use inkshelf_blob::BlobStore;

use crate::error::CatalogError;
use crate::record::{ComicRecord, NewComic};

/// URL path segment under which stored files are served.
pub const UPLOADS_PATH: &str = "uploads";

#[derive(Debug)]
struct CatalogState {
    next_id: u64,
    records: Vec<ComicRecord>,
}

/// Ordered, in-memory catalog of uploaded comics.
///
/// Files go through the [`BlobStore`] before a record is published, and
/// records are withdrawn before their file is removed. Id assignment and
/// insertion share one write guard, so concurrent uploads never reuse an id.
pub struct ComicCatalog {
    blobs: Arc<dyn BlobStore>,
    state: RwLock<CatalogState>,
}

impl ComicCatalog {
    /// Create an empty catalog storing files in `blobs`.
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            blobs,
            state: RwLock::new(CatalogState {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }

    /// All current comics in upload order.
    pub async fn list(&self) -> Vec<ComicRecord> {
        self.state.read().await.records.clone()
    }

    /// Number of comics currently in the catalog.
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Returns `true` if the catalog holds no comics.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }

    /// Store an uploaded file and add it to the catalog.
    ///
    /// `base_url` is the externally reachable origin (e.g.
    /// `http://localhost:5000`) used to build the record's `fileUrl`.
    pub async fn create(
        &self,
        upload: NewComic,
        base_url: &str,
    ) -> Result<ComicRecord, CatalogError> {
        let title = upload.resolved_title();
        let Some(file) = upload.file else {
            return Err(CatalogError::MissingFile);
        };

        let blob = self.blobs.put(&file.original_name, file.data).await?;
        let file_url = format!(
            "{}/{UPLOADS_PATH}/{}",
            base_url.trim_end_matches('/'),
            blob.filename
        );

        let record = {
            let mut state = self.state.write().await;
            let id = state.next_id;
            state.next_id += 1;

            let record = ComicRecord {
                id,
                title,
                file_url,
                created_at: Utc::now(),
                filename: blob.filename,
            };
            state.records.push(record.clone());
            record
        };

        info!(
            id = record.id,
            title = %record.title,
            file_url = %record.file_url,
            bytes = blob.size_bytes,
            "comic uploaded"
        );
        Ok(record)
    }

    /// Remove a comic and, best effort, its backing file.
    ///
    /// The record is gone once this returns `Ok`, whether or not the file
    /// could be removed; file removal failures are only logged.
    pub async fn delete(&self, id: u64) -> Result<ComicRecord, CatalogError> {
        let removed = {
            let mut state = self.state.write().await;
            let index = state
                .records
                .iter()
                .position(|c| c.id == id)
                .ok_or(CatalogError::NotFound(id))?;
            state.records.remove(index)
        };

        match self.blobs.delete(&removed.filename).await {
            Ok(true) => debug!(id, filename = %removed.filename, "deleted backing file"),
            Ok(false) => warn!(
                id,
                filename = %removed.filename,
                "backing file was already missing"
            ),
            Err(e) => warn!(
                id,
                filename = %removed.filename,
                error = %e,
                "failed to delete backing file"
            ),
        }

        info!(id, title = %removed.title, "comic deleted");
        Ok(removed)
    }
}
