//! Shared fixtures for handler and service tests

use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use axum::http::{header::COOKIE, HeaderName, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::app::{build_router, Collaborators, Services};
use crate::core::error::{AppError, Result};
use crate::features::auth::credentials::{hash_password_with, CredentialStore};
use crate::features::auth::signer::HmacTokenSigner;
use crate::features::auth::{AdminIdentity, TokenService};
use crate::features::sitemap::models::CatalogNode;
use crate::features::sitemap::CatalogSource;
use crate::modules::storage::ImageHost;
use crate::modules::store::MemoryStore;
use crate::shared::constants::ADMIN_TOKEN_COOKIE;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes";
pub const TEST_ADMIN: &str = "admin";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Argon2id hash with the cheapest parameters, so tests don't pay the production cost
pub fn fast_hash(password: &str) -> String {
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    hash_password_with(&argon2, password).unwrap()
}

/// Image host keeping uploads in memory
#[derive(Default)]
pub struct FakeImageHost {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl FakeImageHost {
    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.objects.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(&self, key: &str, data: Vec<u8>, _content_type: &str) -> Result<String> {
        self.objects.lock().unwrap().insert(key.to_string(), data);
        Ok(format!("https://images.test/catalog/{}", key))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Catalog source answering from canned listings keyed by API path;
/// any path without a listing fails like an unreachable API would
#[derive(Default, Clone)]
pub struct FakeCatalogSource {
    listings: HashMap<String, Vec<CatalogNode>>,
}

impl FakeCatalogSource {
    pub fn with(mut self, path: &str, slugs: &[&str]) -> Self {
        let nodes = slugs
            .iter()
            .map(|slug| CatalogNode {
                slug: slug.to_string(),
                updated_at: None,
            })
            .collect();
        self.listings.insert(path.to_string(), nodes);
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.listings.remove(path);
        self
    }

    fn get(&self, path: String) -> Result<Vec<CatalogNode>> {
        self.listings
            .get(&path)
            .cloned()
            .ok_or_else(|| AppError::ExternalServiceError(format!("{} returned status 503", path)))
    }
}

#[async_trait]
impl CatalogSource for FakeCatalogSource {
    async fn navbar_categories(&self) -> Result<Vec<CatalogNode>> {
        self.get("/api/navbar-category".to_string())
    }

    async fn categories_by_navbar(&self, navbar_slug: &str) -> Result<Vec<CatalogNode>> {
        self.get(format!("/api/category/by-navbar/{}", navbar_slug))
    }

    async fn subcategories_by_category(&self, category_slug: &str) -> Result<Vec<CatalogNode>> {
        self.get(format!("/api/subcategory/by-category/{}", category_slug))
    }

    async fn products_by_category(&self, category_slug: &str) -> Result<Vec<CatalogNode>> {
        self.get(format!("/api/product/by-category/{}", category_slug))
    }

    async fn products_by_subcategory(&self, subcategory_slug: &str) -> Result<Vec<CatalogNode>> {
        self.get(format!("/api/product/by-subcategory/{}", subcategory_slug))
    }
}

/// Full router over an in-memory store
pub struct TestApp {
    pub server: TestServer,
    pub tokens: Arc<TokenService>,
    pub images: Arc<FakeImageHost>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_catalog_source(FakeCatalogSource::default())
    }

    pub fn with_catalog_source(source: FakeCatalogSource) -> Self {
        let tokens = Arc::new(TokenService::new(Arc::new(HmacTokenSigner::new(
            TEST_SECRET,
        ))));
        let images = Arc::new(FakeImageHost::default());
        let credentials = CredentialStore::new(
            TEST_ADMIN,
            &[fast_hash(TEST_PASSWORD)],
        )
        .unwrap();

        let services = Services::new(
            Arc::new(MemoryStore::new()),
            Collaborators {
                tokens: Arc::clone(&tokens),
                credentials,
                cookie_secure: false,
                image_host: images.clone(),
                image_prefix: "products".to_string(),
                catalog_source: Arc::new(source),
                site_url: "https://shop.test".to_string(),
            },
        );

        let server = TestServer::new(build_router(&services, 10 * 1024 * 1024)).unwrap();

        Self {
            server,
            tokens,
            images,
        }
    }

    /// `Cookie` header carrying a fresh admin token
    pub fn admin_cookie(&self) -> (HeaderName, HeaderValue) {
        let token = self
            .tokens
            .issue_token(&AdminIdentity::new(TEST_ADMIN))
            .unwrap();
        (
            COOKIE,
            HeaderValue::from_str(&format!("{}={}", ADMIN_TOKEN_COOKIE, token)).unwrap(),
        )
    }

    pub async fn admin_get(&self, path: &str) -> TestResponse {
        let (name, value) = self.admin_cookie();
        self.server.get(path).add_header(name, value).await
    }

    pub async fn admin_post(&self, path: &str, body: &Value) -> TestResponse {
        let (name, value) = self.admin_cookie();
        self.server.post(path).add_header(name, value).json(body).await
    }

    pub async fn admin_put(&self, path: &str, body: &Value) -> TestResponse {
        let (name, value) = self.admin_cookie();
        self.server.put(path).add_header(name, value).json(body).await
    }

    pub async fn admin_delete(&self, path: &str) -> TestResponse {
        let (name, value) = self.admin_cookie();
        self.server.delete(path).add_header(name, value).await
    }

    pub async fn admin_delete_json(&self, path: &str, body: &Value) -> TestResponse {
        let (name, value) = self.admin_cookie();
        self.server.delete(path).add_header(name, value).json(body).await
    }

    /// Create through an admin endpoint and return the new document's id
    pub async fn create(&self, path: &str, body: Value) -> Uuid {
        let response = self.admin_post(path, &body).await;
        assert_eq!(
            response.status_code(),
            StatusCode::CREATED,
            "POST {} failed: {}",
            path,
            response.text()
        );
        let id = response.json::<Value>()["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();
        id.parse().unwrap()
    }

    pub async fn create_navbar(&self, name: &str, active: bool) -> Uuid {
        self.create(
            "/api/admin/navbar-category",
            json!({ "name": name, "isActive": active }),
        )
        .await
    }

    pub async fn create_category(&self, name: &str, navbar: Uuid, active: bool) -> Uuid {
        self.create(
            "/api/admin/category",
            json!({ "name": name, "navbarCategory": navbar, "isActive": active }),
        )
        .await
    }

    pub async fn create_subcategory(&self, name: &str, category: Uuid, active: bool) -> Uuid {
        self.create(
            "/api/admin/subcategory",
            json!({ "name": name, "category": category, "isActive": active }),
        )
        .await
    }

    pub async fn create_product(
        &self,
        name: &str,
        navbar: Uuid,
        category: Uuid,
        subcategory: Option<Uuid>,
    ) -> Uuid {
        self.create(
            "/api/admin/product",
            json!({
                "name": name,
                "description": format!("{} for small offices", name),
                "keyFeatures": ["PoE+", "Layer 3"],
                "images": ["https://images.test/catalog/products/a.png"],
                "navbarCategory": navbar,
                "category": category,
                "subcategory": subcategory,
            }),
        )
        .await
    }
}

/// `slug` of every item in an enveloped list response
pub fn slugs(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap().to_string())
        .collect()
}
