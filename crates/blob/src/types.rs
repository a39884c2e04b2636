use std::path::Path;

use chrono::Utc;
use rand::Rng;

/// Extension used when the uploaded name has none.
pub const DEFAULT_EXTENSION: &str = "pdf";

/// Upper bound (inclusive) for the random filename suffix.
const SUFFIX_MAX: u32 = 1_000_000_000;

/// Result of a successful [`BlobStore::put`](crate::BlobStore::put).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// Generated on-disk filename, e.g. `1706800000000-482913.pdf`.
    pub filename: String,
    /// Number of bytes written.
    pub size_bytes: u64,
}

/// Generate a storage filename of the form `<unix millis>-<random>.<ext>`.
///
/// The extension is taken from `original_name` when it is non-empty and
/// alphanumeric, otherwise [`DEFAULT_EXTENSION`] is used.
pub fn generate_filename(original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..=SUFFIX_MAX);
    format!("{millis}-{suffix}.{}", extension_of(original_name))
}

fn extension_of(original_name: &str) -> &str {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(char::is_alphanumeric))
        .unwrap_or(DEFAULT_EXTENSION)
}

/// Returns `true` if `filename` is a single path component inside the store.
pub(crate) fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}
