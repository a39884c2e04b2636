use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use inkshelf_feedback::error::FeedbackError;
use inkshelf_feedback::record::{FeedbackRecord, NewFeedback};
use inkshelf_feedback::store::FeedbackStore;

/// In-memory feedback log. Contents are lost on restart.
///
/// Records are kept in submission order; the id of a new record is the log
/// length plus one, computed under the same write guard as the append.
#[derive(Debug, Default)]
pub struct MemoryFeedbackStore {
    records: RwLock<Vec<FeedbackRecord>>,
}

impl MemoryFeedbackStore {
    /// Create a new empty feedback log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackStore for MemoryFeedbackStore {
    async fn submit(&self, entry: NewFeedback) -> Result<FeedbackRecord, FeedbackError> {
        let (name, feedback) = entry.validate()?;

        let record = {
            let mut records = self.records.write().await;
            let record = FeedbackRecord {
                id: records.len() as u64 + 1,
                name,
                feedback,
                created_at: Utc::now(),
            };
            records.push(record.clone());
            record
        };

        info!(id = record.id, name = %record.name, "feedback received");
        Ok(record)
    }

    async fn count(&self) -> Result<usize, FeedbackError> {
        Ok(self.records.read().await.len())
    }
}
