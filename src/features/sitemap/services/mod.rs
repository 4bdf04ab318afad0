mod catalog_source;
mod sitemap_service;

pub use catalog_source::{CatalogSource, HttpCatalogSource};
pub use sitemap_service::SitemapService;
