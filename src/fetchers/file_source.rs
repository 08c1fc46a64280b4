use async_trait::async_trait;
use log::info;
use std::path::{Path, PathBuf};

use super::RecordSource;
use crate::domain::RawSplitRecord;
use crate::errors::{ServiceError, parse_context};

/// Reads a JSON array of provider records from disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(json: &str) -> Result<Vec<RawSplitRecord>, ServiceError> {
        serde_json::from_str(json)
            .map_err(|e| {
                ServiceError::UnexpectedTransform(format!("{}: {e}", parse_context("records JSON")))
            })
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn fetch_raw_records(&self) -> Result<Vec<RawSplitRecord>, ServiceError> {
        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ServiceError::MissingInput(format!("{}: {}", self.path.display(), e))
        })?;

        let records = Self::parse(&json)?;
        info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
