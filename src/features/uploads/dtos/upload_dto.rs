use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Multipart form for Swagger UI; the handler reads the form with `Multipart`
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    /// The image to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadedImageDto {
    /// Public URL of the stored image
    pub url: String,
    /// Object key, needed to delete the image later
    pub public_id: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteImageDto {
    #[validate(length(min = 1, message = "public_id is required"))]
    pub public_id: String,
}

/// Image types accepted by the upload proxy
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];

/// Maximum image size in bytes (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        _ => None,
    }
}
