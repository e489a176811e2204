//! Local filesystem CSV storage.
//!
//! Rows are encoded in memory and written to a temporary sibling file which
//! is then renamed over the target, so a failed run never leaves a partial
//! file behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::ListingRecord;
use crate::storage::{ResultWriter, WriteSummary};

/// Writes listings to a CSV file on the local filesystem.
#[derive(Debug, Clone)]
pub struct CsvWriter {
    path: PathBuf,
    detail_url: String,
}

impl CsvWriter {
    /// Create a writer targeting `path`; links are `detail_url` + listing id.
    pub fn new(path: impl Into<PathBuf>, detail_url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            detail_url: detail_url.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode the header and rows as CSV.
    fn encode(&self, headers: &[&str], rows: &[ListingRecord]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(row.to_row(&self.detail_url))?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ResultWriter for CsvWriter {
    async fn write(&self, headers: &[&str], rows: &[ListingRecord]) -> Result<WriteSummary> {
        let bytes = self.encode(headers, rows)?;
        self.write_bytes(&bytes).await?;
        log::debug!("Wrote {} row(s) to {}", rows.len(), self.path.display());

        Ok(WriteSummary {
            row_count: rows.len(),
            location: self.path.display().to_string(),
        })
    }
}
