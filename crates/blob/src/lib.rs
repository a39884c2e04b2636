pub mod error;
pub mod local;
pub mod store;
pub mod types;

pub use error::BlobError;
pub use local::LocalBlobStore;
pub use store::BlobStore;
pub use types::{StoredBlob, generate_filename};
