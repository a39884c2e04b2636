mod store;

pub use store::MemoryFeedbackStore;
