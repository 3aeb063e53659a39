use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{coerce_comment, CreateReportDto, UpdateReportDto};
use crate::features::reports::models::{Report, UpdateEntry};
use crate::features::reports::services::{
    assign_department, decode_photo_data_url, infer_priority, PhotoError,
};
use crate::modules::storage::{BlobStore, ReportStore};
use crate::shared::constants::{DEFAULT_CATEGORY, INITIAL_STATUS, NOTE_REPORT_CREATED};

/// Service for the report lifecycle: create, update, delete
///
/// Each mutation loads the whole collection, changes it in memory and writes
/// it back. Writers are not serialized, so overlapping mutations can lose
/// each other's changes.
pub struct ReportService {
    store: Arc<dyn ReportStore>,
    blob_store: Arc<dyn BlobStore>,
}

impl ReportService {
    pub fn new(store: Arc<dyn ReportStore>, blob_store: Arc<dyn BlobStore>) -> Self {
        Self { store, blob_store }
    }

    /// All reports in stored order (newest first)
    pub async fn list(&self) -> Vec<Report> {
        self.store.load_all().await
    }

    /// Create a report, derive priority and department, and store its photo
    pub async fn create(&self, dto: CreateReportDto) -> Result<Report> {
        let mut reports = self.store.load_all().await;

        let id = Self::generate_id(&reports);
        let created_at = Utc::now();

        let raw_category = dto.category.unwrap_or_default();
        let description = dto.description.unwrap_or_default();
        let priority = infer_priority(&raw_category, &description);
        let category = if raw_category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            raw_category
        };
        let department = assign_department(&category).to_string();

        let photo = match dto.photo_data_url.as_ref().and_then(Value::as_str) {
            Some(data_url) if data_url.starts_with("data:") => {
                match self.store_photo(&id, data_url).await {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!("Discarding photo for report {}: {}", id, e);
                        None
                    }
                }
            }
            _ => None,
        };

        let report = Report {
            id,
            created_at,
            category,
            description,
            coords: dto.coords.unwrap_or_default(),
            address: dto.address.unwrap_or_default(),
            status: INITIAL_STATUS.to_string(),
            priority,
            department,
            photo,
            updates: vec![UpdateEntry {
                at: created_at,
                status: INITIAL_STATUS.to_string(),
                note: NOTE_REPORT_CREATED.to_string(),
            }],
            reporter: dto.reporter.unwrap_or_default(),
            review: None,
        };

        reports.insert(0, report.clone());
        if let Err(e) = self.store.save_all(&reports).await {
            if let Some(photo) = &report.photo {
                if let Err(remove_err) = self.blob_store.remove(photo).await {
                    warn!(
                        "Failed to remove orphaned photo {} for report {}: {}",
                        photo, report.id, remove_err
                    );
                } else {
                    warn!("Removed photo {} of unsaved report {}", photo, report.id);
                }
            }
            return Err(e.into());
        }

        info!(
            "Created report: id={}, category={}, priority={}, department={}",
            report.id, report.category, report.priority, report.department
        );

        Ok(report)
    }

    /// Apply status, department and review changes, each logged separately
    pub async fn update(&self, id: &str, dto: UpdateReportDto) -> Result<Report> {
        let mut reports = self.store.load_all().await;

        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;

        if let Some(status) = dto.status {
            report.set_status(status);
        }
        if let Some(department) = dto.department {
            report.reassign(department);
        }
        if let Some(review) = dto.review {
            if let Some(rating) = review.numeric_rating() {
                report.attach_review(rating, coerce_comment(review.comment.as_ref()));
            }
        }

        let updated = report.clone();
        self.store.save_all(&reports).await?;

        info!(
            "Updated report: id={}, status={}, department={}",
            updated.id, updated.status, updated.department
        );

        Ok(updated)
    }

    /// Remove the report if present; deleting an unknown id is not an error
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut reports = self.store.load_all().await;
        let before = reports.len();

        reports.retain(|r| r.id != id);
        self.store.save_all(&reports).await?;

        info!(
            "Deleted report: id={}, removed={}",
            id,
            before - reports.len()
        );
        Ok(())
    }

    async fn store_photo(
        &self,
        id: &str,
        data_url: &str,
    ) -> std::result::Result<String, PhotoError> {
        let payload = decode_photo_data_url(data_url)?;
        let path = self
            .blob_store
            .store(id, &payload.mime_type, &payload.data)
            .await?;
        Ok(path)
    }

    fn generate_id(existing: &[Report]) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if !existing.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }
}
