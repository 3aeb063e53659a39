use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use super::StoreError;
use crate::shared::constants::DEFAULT_PHOTO_EXTENSION;
use crate::shared::validation::EXTENSION_REGEX;

/// Opaque storage for uploaded photos
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Persist `data` for the report `id` and return its public reference path.
    ///
    /// The object name is `{id}.{ext}` where `ext` comes from the subtype of
    /// `mime_type`. Storing again under the same id and type replaces the blob.
    async fn store(&self, id: &str, mime_type: &str, data: &[u8]) -> Result<String, StoreError>;

    /// Delete the blob behind a reference path previously returned by `store`.
    ///
    /// A reference that does not belong to this store is left alone.
    async fn remove(&self, reference: &str) -> Result<(), StoreError>;
}

/// Derive a file extension from a MIME type such as `image/jpeg`.
///
/// Falls back to `png` when the subtype is missing or not a safe file suffix.
pub fn extension_for_mime(mime_type: &str) -> &str {
    let subtype = mime_type
        .split('/')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .map(str::trim)
        .unwrap_or("");

    if subtype.is_empty() || subtype.contains("..") || !EXTENSION_REGEX.is_match(subtype) {
        DEFAULT_PHOTO_EXTENSION
    } else {
        subtype
    }
}

/// Blob store writing photos into a local directory
pub struct LocalBlobStore {
    dir: PathBuf,
    url_prefix: String,
}

impl LocalBlobStore {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Create the upload directory if it doesn't exist
    pub async fn ensure_dir_exists(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        info!("Upload directory ready: {}", self.dir.display());
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(&self, id: &str, mime_type: &str, data: &[u8]) -> Result<String, StoreError> {
        let object_name = format!("{}.{}", id, extension_for_mime(mime_type));
        tokio::fs::write(self.dir.join(&object_name), data).await?;

        debug!("Stored blob {} ({} bytes)", object_name, data.len());
        Ok(format!("{}/{}", self.url_prefix, object_name))
    }

    async fn remove(&self, reference: &str) -> Result<(), StoreError> {
        let object_name = match reference
            .strip_prefix(self.url_prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
        {
            Some(name) if !name.is_empty() && !name.contains('/') && !name.contains("..") => name,
            _ => {
                debug!("Ignoring foreign blob reference: {}", reference);
                return Ok(());
            }
        };

        tokio::fs::remove_file(self.dir.join(object_name)).await?;
        debug!("Removed blob {}", object_name);
        Ok(())
    }
}
