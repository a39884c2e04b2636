use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;

/// Name recorded for submissions that arrive without one.
pub const DEFAULT_NAME: &str = "Anonymous Agent";

/// A stored feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// 1-based position in the log.
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: u64,
    /// Who left the feedback.
    #[cfg_attr(feature = "openapi", schema(example = "Anonymous Agent"))]
    pub name: String,
    /// The feedback text.
    #[cfg_attr(feature = "openapi", schema(example = "Great tool"))]
    pub feedback: String,
    /// When the feedback was submitted.
    pub created_at: DateTime<Utc>,
}

/// An unvalidated feedback submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewFeedback {
    /// Optional author name.
    #[cfg_attr(feature = "openapi", schema(example = "Santhosh"))]
    pub name: Option<String>,
    /// Required feedback text.
    #[cfg_attr(feature = "openapi", schema(example = "Great tool"))]
    pub feedback: Option<String>,
}

impl NewFeedback {
    /// Check the submission and resolve defaults.
    ///
    /// Returns `(name, feedback)`; empty names become [`DEFAULT_NAME`].
    pub fn validate(self) -> Result<(String, String), FeedbackError> {
        let feedback = self
            .feedback
            .filter(|text| !text.is_empty())
            .ok_or(FeedbackError::MissingFeedback)?;
        let name = self
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_owned());
        Ok((name, feedback))
    }
}
