pub mod error;
pub mod record;
pub mod store;

pub use error::FeedbackError;
pub use record::{DEFAULT_NAME, FeedbackRecord, NewFeedback};
pub use store::FeedbackStore;
