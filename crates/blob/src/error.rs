use thiserror::Error;

/// Errors that can occur during blob storage operations.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The filename would escape the storage directory.
    #[error("invalid blob name: {0}")]
    InvalidName(String),

    /// No unused filename could be generated.
    #[error("no free filename after {attempts} attempts")]
    Exhausted {
        /// Number of names tried.
        attempts: u32,
    },

    /// An I/O error from the underlying filesystem.
    #[error("blob storage error: {0}")]
    Io(#[from] std::io::Error),
}
