use std::path::PathBuf;

use bytes::Bytes;
use tokio::fs;
use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    storage::{entities::StoredImage, policies::sanitize_file_name, ports::ImageStorage},
};

/// URL prefix under which saved images are served.
pub const UPLOADS_REFERENCE_PREFIX: &str = "uploads";

#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    upload_dir: PathBuf,
}

impl LocalImageStorage {
    pub async fn new(upload_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&upload_dir).await.map_err(|e| {
            error!("Failed to create upload directory {}: {}", upload_dir.display(), e);
            CoreError::Storage(format!("cannot create {}: {}", upload_dir.display(), e))
        })?;

        tracing::info!(upload_dir = %upload_dir.display(), "Initializing local image storage");

        Ok(Self { upload_dir })
    }
}

impl ImageStorage for LocalImageStorage {
    #[instrument(skip(self, data), fields(size = data.len()))]
    async fn save_image(&self, original_name: &str, data: Bytes) -> Result<StoredImage, CoreError> {
        let file_name = format!(
            "{}_{}",
            generate_uuid_v7().simple(),
            sanitize_file_name(original_name)
        );
        let path = self.upload_dir.join(&file_name);

        fs::write(&path, &data).await.map_err(|e| {
            error!("Failed to save image {}: {}", path.display(), e);
            CoreError::Storage(format!("cannot save image: {}", e))
        })?;

        tracing::debug!(file_name = %file_name, "Image saved");

        Ok(StoredImage {
            reference: format!("{}/{}", UPLOADS_REFERENCE_PREFIX, file_name),
            file_name,
        })
    }

    async fn is_ready(&self) -> bool {
        fs::metadata(&self.upload_dir)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_save_image_writes_unique_sanitized_copies() {
        let dir = tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path().join("uploads")).await.unwrap();

        let first = storage
            .save_image("my lunch.jpg", Bytes::from_static(b"one"))
            .await
            .unwrap();
        let second = storage
            .save_image("my lunch.jpg", Bytes::from_static(b"two"))
            .await
            .unwrap();

        assert_ne!(first.file_name, second.file_name);
        assert!(first.file_name.ends_with("_my_lunch.jpg"));
        assert_eq!(first.reference, format!("uploads/{}", first.file_name));
        assert_eq!(
            std::fs::read(dir.path().join("uploads").join(&first.file_name)).unwrap(),
            b"one"
        );
        assert!(storage.is_ready().await);
    }
}
