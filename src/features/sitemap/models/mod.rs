mod sitemap_entry;

pub use sitemap_entry::{ChangeFreq, CatalogNode, SitemapEntry};
