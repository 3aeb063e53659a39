//! Storage module for reports and photos
//!
//! Provides the whole-collection report store backed by a JSON file and a
//! local-directory blob store for uploaded photos.

mod blob_store;
mod error;
mod report_store;

pub use blob_store::{BlobStore, LocalBlobStore};
pub use error::StoreError;
pub use report_store::{JsonFileReportStore, ReportStore};
