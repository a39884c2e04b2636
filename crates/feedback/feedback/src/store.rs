use async_trait::async_trait;

use crate::error::FeedbackError;
use crate::record::{FeedbackRecord, NewFeedback};

/// Trait for append-only feedback storage backends.
///
/// Implementations must be `Send + Sync` to be shared across async tasks.
/// Submissions are validated with [`NewFeedback::validate`] before anything
/// is written, and ids are assigned as the log length plus one.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Validate and append a submission, returning the stored record.
    async fn submit(&self, entry: NewFeedback) -> Result<FeedbackRecord, FeedbackError>;

    /// Number of records in the log.
    async fn count(&self) -> Result<usize, FeedbackError>;
}
