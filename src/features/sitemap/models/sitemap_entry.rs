use chrono::{DateTime, Utc};
use serde::Deserialize;

/// How often search engines should expect a page to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<DateTime<Utc>>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// The part of a catalog document the sitemap needs, as served by the public API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogNode {
    pub slug: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
