use serde::Deserialize;

/// Where uploaded files are kept.
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Flat directory holding uploaded files. Created on startup if absent.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> String {
    "uploads".to_owned()
}
