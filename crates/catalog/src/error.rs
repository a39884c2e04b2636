use inkshelf_blob::BlobError;

/// Errors that can occur during catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The upload carried no file part.
    #[error("No file received")]
    MissingFile,

    /// No comic with the given id is in the catalog.
    #[error("comic not found: {0}")]
    NotFound(u64),

    /// Writing the uploaded file failed.
    #[error("storage error: {0}")]
    Storage(#[from] BlobError),
}
