use async_trait::async_trait;
use bytes::Bytes;

use crate::error::BlobError;
use crate::types::StoredBlob;

/// Pluggable blob storage backend for uploaded files.
///
/// The store picks the on-disk name; callers only supply the name the client
/// uploaded, which contributes its extension.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist `data` under a freshly generated filename.
    ///
    /// The write is complete when this returns, so the blob is immediately
    /// readable under [`StoredBlob::filename`].
    async fn put(&self, original_name: &str, data: Bytes) -> Result<StoredBlob, BlobError>;

    /// Delete a blob by its stored filename. Returns `true` if the blob existed.
    async fn delete(&self, filename: &str) -> Result<bool, BlobError>;
}
