//! Whole-collection report persistence
//!
//! Every mutation is load all, modify in memory, save all. There is no
//! locking: two writers whose load/save windows overlap race and the last
//! full write wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::StoreError;
use crate::features::reports::models::Report;

/// Durable, ordered collection of reports
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Load the entire collection in stored order.
    ///
    /// Never fails: a missing, unreadable or corrupt collection reads as empty.
    async fn load_all(&self) -> Vec<Report>;

    /// Replace the entire collection with `reports`, preserving order.
    async fn save_all(&self, reports: &[Report]) -> Result<(), StoreError>;
}

/// Report store backed by a single pretty-printed JSON array on disk
pub struct JsonFileReportStore {
    path: PathBuf,
}

impl JsonFileReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the collection file with an empty array if it does not exist yet
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            debug!("Report collection exists: {}", self.path.display());
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, b"[]").await?;

        info!("Initialized empty report collection: {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl ReportStore for JsonFileReportStore {
    async fn load_all(&self) -> Vec<Report> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Report collection missing, reading as empty: {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "Failed to read report collection {}, reading as empty: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<Report>>(&raw) {
            Ok(reports) => reports,
            Err(e) => {
                warn!(
                    "Corrupt report collection {}, reading as empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn save_all(&self, reports: &[Report]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(reports)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            tracing::error!(
                "Failed to write report collection {}: {:?}",
                self.path.display(),
                e
            );
            StoreError::Io(e)
        })?;

        debug!(
            "Saved {} reports to {}",
            reports.len(),
            self.path.display()
        );
        Ok(())
    }
}
