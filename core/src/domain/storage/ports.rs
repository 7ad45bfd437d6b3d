use std::future::Future;

use bytes::Bytes;

use crate::domain::{common::entities::app_errors::CoreError, storage::entities::StoredImage};

/// Port for keeping copies of uploaded images
#[cfg_attr(test, mockall::automock)]
pub trait ImageStorage: Send + Sync {
    /// Save the image under a unique name derived from the original file name
    fn save_image(
        &self,
        original_name: &str,
        data: Bytes,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    /// Whether the storage location is usable
    fn is_ready(&self) -> impl Future<Output = bool> + Send;
}
