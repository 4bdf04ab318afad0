//! Image storage
//!
//! Uploaded catalog images live on an external host behind [`ImageHost`];
//! production uses an S3-compatible bucket.

mod s3_image_host;

use async_trait::async_trait;

use crate::core::error::AppError;

pub use s3_image_host::S3ImageHost;

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Store `data` under `key` and return its public URL
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String, AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;
}
