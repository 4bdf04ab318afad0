use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::core::config::SiteConfig;
use crate::core::error::{AppError, Result};
use crate::features::sitemap::models::CatalogNode;

/// Read side of the public catalog, one call per listing the sitemap walks
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn navbar_categories(&self) -> Result<Vec<CatalogNode>>;

    async fn categories_by_navbar(&self, navbar_slug: &str) -> Result<Vec<CatalogNode>>;

    async fn subcategories_by_category(&self, category_slug: &str) -> Result<Vec<CatalogNode>>;

    async fn products_by_category(&self, category_slug: &str) -> Result<Vec<CatalogNode>>;

    async fn products_by_subcategory(&self, subcategory_slug: &str) -> Result<Vec<CatalogNode>>;
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Vec<CatalogNode>,
}

/// Walks the catalog through its own public HTTP API
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("netcatalog-sitemap/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.public_api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, path: &str) -> Result<Vec<CatalogNode>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Sitemap fetch: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Request to {} failed: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        let envelope: Envelope = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse {}: {}", url, e))
        })?;

        if !envelope.success {
            return Err(AppError::ExternalServiceError(format!(
                "{} reported failure",
                url
            )));
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn navbar_categories(&self) -> Result<Vec<CatalogNode>> {
        self.fetch("/api/navbar-category").await
    }

    async fn categories_by_navbar(&self, navbar_slug: &str) -> Result<Vec<CatalogNode>> {
        self.fetch(&format!(
            "/api/category/by-navbar/{}",
            urlencoding::encode(navbar_slug)
        ))
        .await
    }

    async fn subcategories_by_category(&self, category_slug: &str) -> Result<Vec<CatalogNode>> {
        self.fetch(&format!(
            "/api/subcategory/by-category/{}",
            urlencoding::encode(category_slug)
        ))
        .await
    }

    async fn products_by_category(&self, category_slug: &str) -> Result<Vec<CatalogNode>> {
        self.fetch(&format!(
            "/api/product/by-category/{}",
            urlencoding::encode(category_slug)
        ))
        .await
    }

    async fn products_by_subcategory(&self, subcategory_slug: &str) -> Result<Vec<CatalogNode>> {
        self.fetch(&format!(
            "/api/product/by-subcategory/{}",
            urlencoding::encode(subcategory_slug)
        ))
        .await
    }
}
