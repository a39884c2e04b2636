pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::{ComicCatalog, UPLOADS_PATH};
pub use error::CatalogError;
pub use record::{ComicRecord, DEFAULT_TITLE, NewComic, UploadedFile};
