use serde::{Deserialize, Serialize};

/// A report file persisted by the upload handler.
///
/// `stored_path` is `{upload_dir}/{timestamp}_{original_filename}`; the
/// timestamp has second resolution, so two uploads of the same filename
/// within the same second land on the same path (last writer wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub original_filename: String,
    pub stored_path: String,
    pub timestamp: String,
}
