use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sitemap::handlers;
use crate::features::sitemap::services::SitemapService;

pub fn routes(service: Arc<SitemapService>) -> Router {
    Router::new()
        .route("/sitemap.xml", get(handlers::sitemap_xml))
        .route("/robots.txt", get(handlers::robots_txt))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::{header::CONTENT_TYPE, StatusCode};

    use crate::shared::test_helpers::{FakeCatalogSource, TestApp};

    #[tokio::test]
    async fn sitemap_is_served_as_xml() {
        let source = FakeCatalogSource::default()
            .with("/api/navbar-category", &["networking"])
            .with("/api/category/by-navbar/networking", &["switches"])
            .with("/api/subcategory/by-category/switches", &[])
            .with("/api/product/by-category/switches", &["catalyst-9200"]);
        let app = TestApp::with_catalog_source(source);

        let response = app.server.get("/sitemap.xml").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response
            .header(CONTENT_TYPE)
            .to_str()
            .unwrap()
            .starts_with("application/xml"));

        let xml = response.text();
        assert!(xml.contains("<loc>https://shop.test/networking/switches</loc>"));
        assert!(xml.contains("<loc>https://shop.test/product/catalyst-9200</loc>"));
    }

    #[tokio::test]
    async fn sitemap_survives_an_unreachable_catalog() {
        let app = TestApp::new();
        let response = app.server.get("/sitemap.xml").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let xml = response.text();
        assert!(xml.contains("<loc>https://shop.test/</loc>"));
        assert!(xml.contains("<loc>https://shop.test/contact</loc>"));
        assert!(!xml.contains("/product/"));
    }

    #[tokio::test]
    async fn robots_points_at_the_sitemap() {
        let app = TestApp::new();
        let response = app.server.get("/robots.txt").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response
            .header(CONTENT_TYPE)
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let body = response.text();
        assert!(body.contains("Disallow: /admin"));
        assert!(body.contains("Sitemap: https://shop.test/sitemap.xml"));
    }
}
