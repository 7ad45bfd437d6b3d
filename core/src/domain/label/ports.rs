use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, label::entities::LabelCandidate};

/// Client for a label-detection vision API
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    /// Returns the label annotations for the image, in the API's ranked order
    fn detect_labels(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<LabelCandidate>, CoreError>> + Send;
}
