/// Errors that can occur during feedback store operations.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    /// The submission had no feedback text.
    #[error("Feedback is required")]
    MissingFeedback,
}
