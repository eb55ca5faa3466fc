use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::UploadedFile;

/// Errors that can occur while persisting an upload
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Upload write failed: {0}")]
    Io(#[from] io::Error),
}

/// Persists uploaded report files under one flat directory
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `dir`, creating the directory if absent.
    /// Safe to call repeatedly for the same path.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, UploadError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Write `bytes` verbatim to `{dir}/{timestamp}_{filename}`
    ///
    /// The timestamp has second resolution: two uploads of the same
    /// filename within the same second land on the same path and the
    /// second write wins. Content type and size are not checked.
    pub fn store(&self, bytes: &[u8], filename: &str) -> Result<UploadedFile, UploadError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let path = self.dir.join(format!("{}_{}", timestamp, filename));

        fs::write(&path, bytes)?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Stored uploaded report");

        Ok(UploadedFile {
            original_filename: filename.to_string(),
            stored_path: path.to_string_lossy().into_owned(),
            timestamp,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
