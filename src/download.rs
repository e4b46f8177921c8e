//! Download trigger: hands a generated CSV document to the user.
//!
//! In the terminal the "download" is a file written into the output
//! directory. Every call offers a new file; an existing
//! `registration_details.csv` is never overwritten.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::AppError;
use crate::utils::next_free_path;

/// Fixed name offered for the exported file
pub const DOWNLOAD_FILE_NAME: &str = "registration_details.csv";

/// Destination for generated documents
pub trait DownloadSink {
    /// Offer `content` to the user, returning where it ended up.
    fn offer(&mut self, content: &str) -> Result<PathBuf, AppError>;
}

/// Writes each offered document into a directory
#[derive(Debug, Clone)]
pub struct FileDownload {
    output_dir: PathBuf,
}

impl FileDownload {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl DownloadSink for FileDownload {
    fn offer(&mut self, content: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| AppError::Download {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = next_free_path(&self.output_dir, DOWNLOAD_FILE_NAME);
        fs::write(&path, content.as_bytes()).map_err(|source| AppError::Download {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), bytes = content.len(), "csv written");
        Ok(path)
    }
}
