use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::uploads::dtos::{
    extension_for, UploadedImageDto, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE,
};
use crate::modules::storage::ImageHost;

/// Proxies catalog image uploads to the image host
pub struct UploadService {
    host: Arc<dyn ImageHost>,
    prefix: String,
}

impl UploadService {
    pub fn new(host: Arc<dyn ImageHost>, prefix: impl Into<String>) -> Self {
        Self {
            host,
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    /// Check type and size, then store the image under `{prefix}/{uuid}.{ext}`
    pub async fn upload_image(&self, data: Vec<u8>, content_type: &str) -> Result<UploadedImageDto> {
        let extension = extension_for(content_type).ok_or_else(|| {
            AppError::BadRequest(format!(
                "File type '{}' is not allowed. Allowed types: {}",
                content_type,
                ALLOWED_IMAGE_TYPES.join(", ")
            ))
        })?;

        if data.is_empty() {
            return Err(AppError::BadRequest("File is empty".to_string()));
        }
        if data.len() > MAX_IMAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {} MB",
                MAX_IMAGE_SIZE / 1024 / 1024
            )));
        }

        let key = format!("{}/{}.{}", self.prefix, Uuid::now_v7(), extension);
        let size = data.len();
        let url = self.host.upload(&key, data, content_type).await?;

        tracing::info!("Uploaded image {} ({} bytes)", key, size);

        Ok(UploadedImageDto {
            url,
            public_id: key,
        })
    }

    /// Delete an image previously returned by [`Self::upload_image`]
    pub async fn delete_image(&self, public_id: &str) -> Result<()> {
        let public_id = public_id.trim();
        let inside_prefix = public_id
            .strip_prefix(&self.prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|name| !name.is_empty());

        if !inside_prefix || public_id.contains("..") {
            return Err(AppError::BadRequest(format!(
                "'{}' is not an uploaded image",
                public_id
            )));
        }

        self.host.delete(public_id).await?;
        tracing::info!("Deleted image {}", public_id);

        Ok(())
    }
}
