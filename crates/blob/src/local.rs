use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::error::BlobError;
use crate::store::BlobStore;
use crate::types::{StoredBlob, generate_filename, is_plain_filename};

/// How many generated names to try before giving up on a `put`.
const MAX_NAME_ATTEMPTS: u32 = 8;

/// [`BlobStore`] that keeps every blob as a file in one flat directory.
///
/// Files are created with create-new semantics, so an existing upload is never
/// overwritten even if two generated names collide.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Open a store rooted at `root`, creating the directory if it is absent.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, BlobError> {
        let root = root.into();
        if fs::try_exists(&root).await? {
            debug!(path = %root.display(), "using existing storage directory");
        } else {
            fs::create_dir_all(&root).await?;
            info!(path = %root.display(), "created storage directory");
        }
        Ok(Self { root })
    }

    /// Directory holding the stored files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute or root-relative path of a stored file.
    pub fn path_of(&self, filename: &str) -> Result<PathBuf, BlobError> {
        if !is_plain_filename(filename) {
            return Err(BlobError::InvalidName(filename.to_owned()));
        }
        Ok(self.root.join(filename))
    }

    async fn write_new(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;

        let written = async {
            file.write_all(data).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            // Best effort: drop the partial file so it does not linger unlisted.
            drop(file);
            if let Err(cleanup) = fs::remove_file(path).await {
                warn!(path = %path.display(), error = %cleanup, "failed to remove partial upload");
            }
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, original_name: &str, data: Bytes) -> Result<StoredBlob, BlobError> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let filename = generate_filename(original_name);
            let path = self.root.join(&filename);

            match self.write_new(&path, &data).await {
                Ok(()) => {
                    debug!(filename = %filename, bytes = data.len(), "stored blob");
                    return Ok(StoredBlob {
                        filename,
                        size_bytes: data.len() as u64,
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!(filename = %filename, "generated filename already taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(BlobError::Exhausted {
            attempts: MAX_NAME_ATTEMPTS,
        })
    }

    async fn delete(&self, filename: &str) -> Result<bool, BlobError> {
        let path = self.path_of(filename)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "deleted blob");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("nested").join("uploads");
        assert!(!root.exists());

        let store = LocalBlobStore::open(&root).await.unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[tokio::test]
    async fn open_reuses_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("keep.pdf"), b"old").unwrap();

        let store = LocalBlobStore::open(tmp.path()).await.unwrap();
        assert!(store.path_of("keep.pdf").unwrap().exists());
    }

    #[tokio::test]
    async fn put_writes_file_under_generated_name() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::open(tmp.path()).await.unwrap();

        let blob = store
            .put("a.pdf", Bytes::from_static(b"0123456789"))
            .await
            .unwrap();

        assert_eq!(blob.size_bytes, 10);
        assert!(blob.filename.ends_with(".pdf"));
        let on_disk = std::fs::read(tmp.path().join(&blob.filename)).unwrap();
        assert_eq!(on_disk, b"0123456789");
    }

    #[tokio::test]
    async fn put_defaults_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::open(tmp.path()).await.unwrap();

        let blob = store.put("scan", Bytes::from_static(b"x")).await.unwrap();
        assert!(blob.filename.ends_with(".pdf"), "got {}", blob.filename);
    }

    #[tokio::test]
    async fn puts_never_share_a_name() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::open(tmp.path()).await.unwrap();

        let mut names = std::collections::HashSet::new();
        for i in 0..50u8 {
            let blob = store.put("a.pdf", Bytes::from(vec![i])).await.unwrap();
            assert!(names.insert(blob.filename));
        }
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 50);
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::open(tmp.path()).await.unwrap();
        let blob = store.put("a.pdf", Bytes::from_static(b"x")).await.unwrap();

        assert!(store.delete(&blob.filename).await.unwrap());
        assert!(!tmp.path().join(&blob.filename).exists());
        assert!(!store.delete(&blob.filename).await.unwrap());
    }

    #[tokio::test]
    async fn delete_rejects_path_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::open(tmp.path().join("uploads")).await.unwrap();
        std::fs::write(tmp.path().join("outside.pdf"), b"x").unwrap();

        let err = store.delete("../outside.pdf").await.unwrap_err();
        assert!(matches!(err, BlobError::InvalidName(_)));
        assert!(tmp.path().join("outside.pdf").exists());
    }
}
