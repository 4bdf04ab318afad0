//! S3-compatible image host
//!
//! Uses rust-s3 against MinIO or any S3-compatible service with path-style
//! URLs. Objects are assumed to be publicly readable under the bucket.

use async_trait::async_trait;
use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;
use crate::modules::storage::ImageHost;

pub struct S3ImageHost {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    public_endpoint: String,
}

impl S3ImageHost {
    /// Create a new client from configuration, creating the bucket when missing
    pub async fn new(config: StorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create S3 credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create S3 bucket handle: {}", e)))?;

        // Path-style URLs (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        let host = Self {
            bucket,
            region,
            credentials,
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
        };

        host.ensure_bucket_exists().await;

        info!(
            "Image host initialized for endpoint: {}, bucket: {}",
            config.endpoint,
            host.bucket.name()
        );

        Ok(host)
    }

    /// Create the bucket; an "already exists" answer is fine
    async fn ensure_bucket_exists(&self) {
        let result = Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await;

        match result {
            Ok(_) => info!("Bucket '{}' created successfully", self.bucket.name()),
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                }
            }
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }
}

#[async_trait]
impl ImageHost for S3ImageHost {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<String, AppError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to upload image '{}': {}", key, e))
            })?;

        if !(200..300).contains(&response.status_code()) {
            return Err(AppError::ExternalServiceError(format!(
                "Image host rejected upload of '{}': HTTP {}",
                key,
                response.status_code()
            )));
        }

        debug!("Uploaded image '{}' to bucket '{}'", key, self.bucket.name());
        Ok(self.public_url(key))
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let response = self.bucket.delete_object(key).await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to delete image '{}': {}", key, e))
        })?;

        if !(200..300).contains(&response.status_code()) {
            return Err(AppError::ExternalServiceError(format!(
                "Image host rejected delete of '{}': HTTP {}",
                key,
                response.status_code()
            )));
        }

        debug!("Deleted image '{}' from bucket '{}'", key, self.bucket.name());
        Ok(())
    }
}
