use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A saved copy of an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredImage {
    pub file_name: String,
    /// Path under which the image is served, e.g. `uploads/<file_name>`
    pub reference: String,
}
