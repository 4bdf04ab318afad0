use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

use crate::features::sitemap::services::SitemapService;

/// Sitemap of every public catalog page
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "Sitemap", content_type = "application/xml", body = String)
    ),
    tag = "seo"
)]
pub async fn sitemap_xml(State(service): State<Arc<SitemapService>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        service.sitemap_xml().await,
    )
}

#[utoipa::path(
    get,
    path = "/robots.txt",
    responses(
        (status = 200, description = "Crawler rules", content_type = "text/plain", body = String)
    ),
    tag = "seo"
)]
pub async fn robots_txt(State(service): State<Arc<SitemapService>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        service.robots_txt(),
    )
}
