use futures::future::join_all;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::sitemap::models::{CatalogNode, ChangeFreq, SitemapEntry};
use crate::features::sitemap::services::CatalogSource;

/// Pages that exist outside the catalog tree
const STATIC_PAGES: &[&str] = &["/about", "/contact", "/products"];

/// Await a listing, turning a failure into an empty branch
async fn or_empty(
    what: String,
    listing: impl Future<Output = Result<Vec<CatalogNode>>>,
) -> Vec<CatalogNode> {
    match listing.await {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::warn!("Sitemap: skipping {}: {}", what, e);
            Vec::new()
        }
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Pages and products found under one navbar category
#[derive(Default)]
struct Branch {
    pages: Vec<SitemapEntry>,
    products: Vec<CatalogNode>,
}

impl Branch {
    fn merge(&mut self, other: Branch) {
        self.pages.extend(other.pages);
        self.products.extend(other.products);
    }
}

/// Builds `sitemap.xml` and `robots.txt` from the public catalog
pub struct SitemapService {
    source: Arc<dyn CatalogSource>,
    site_url: String,
}

impl SitemapService {
    pub fn new(source: Arc<dyn CatalogSource>, site_url: &str) -> Self {
        Self {
            source,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    fn entry(
        &self,
        path: &str,
        node: Option<&CatalogNode>,
        changefreq: ChangeFreq,
        priority: f32,
    ) -> SitemapEntry {
        SitemapEntry {
            loc: format!("{}{}", self.site_url, path),
            lastmod: node.and_then(|n| n.updated_at),
            changefreq,
            priority,
        }
    }

    /// Walk navbar → category → subcategory → product and list every page
    ///
    /// A listing that fails leaves its branch out; the rest of the tree is
    /// still returned.
    pub async fn build_entries(&self) -> Vec<SitemapEntry> {
        let mut entries = vec![self.entry("/", None, ChangeFreq::Daily, 1.0)];
        entries.extend(
            STATIC_PAGES
                .iter()
                .map(|page| self.entry(page, None, ChangeFreq::Monthly, 0.8)),
        );

        let navbars = or_empty(
            "navbar categories".to_string(),
            self.source.navbar_categories(),
        )
        .await;

        let mut tree = Branch::default();
        for branch in join_all(navbars.iter().map(|navbar| self.navbar_branch(navbar))).await {
            tree.merge(branch);
        }
        entries.extend(tree.pages);

        let mut seen = HashSet::new();
        entries.extend(
            tree.products
                .iter()
                .filter(|product| seen.insert(product.slug.clone()))
                .map(|product| {
                    self.entry(
                        &format!("/product/{}", product.slug),
                        Some(product),
                        ChangeFreq::Monthly,
                        0.6,
                    )
                }),
        );

        tracing::debug!("Sitemap built with {} entries", entries.len());
        entries
    }

    async fn navbar_branch(&self, navbar: &CatalogNode) -> Branch {
        let mut branch = Branch {
            pages: vec![self.entry(
                &format!("/{}", navbar.slug),
                Some(navbar),
                ChangeFreq::Weekly,
                0.9,
            )],
            products: Vec::new(),
        };

        let categories = or_empty(
            format!("categories of '{}'", navbar.slug),
            self.source.categories_by_navbar(&navbar.slug),
        )
        .await;

        for category in join_all(
            categories
                .iter()
                .map(|category| self.category_branch(navbar, category)),
        )
        .await
        {
            branch.merge(category);
        }

        branch
    }

    async fn category_branch(&self, navbar: &CatalogNode, category: &CatalogNode) -> Branch {
        let category_path = format!("/{}/{}", navbar.slug, category.slug);

        let (subcategories, direct_products) = futures::join!(
            or_empty(
                format!("subcategories of '{}'", category.slug),
                self.source.subcategories_by_category(&category.slug),
            ),
            or_empty(
                format!("products of category '{}'", category.slug),
                self.source.products_by_category(&category.slug),
            ),
        );

        let mut branch = Branch {
            pages: vec![self.entry(&category_path, Some(category), ChangeFreq::Weekly, 0.8)],
            products: direct_products,
        };

        let nested = join_all(subcategories.iter().map(|sub| {
            or_empty(
                format!("products of subcategory '{}'", sub.slug),
                self.source.products_by_subcategory(&sub.slug),
            )
        }))
        .await;

        for (sub, products) in subcategories.iter().zip(nested) {
            branch.pages.push(self.entry(
                &format!("{}/{}", category_path, sub.slug),
                Some(sub),
                ChangeFreq::Weekly,
                0.7,
            ));
            branch.products.extend(products);
        }

        branch
    }

    /// Render entries as a sitemaps.org `urlset`
    pub fn render(entries: &[SitemapEntry]) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );

        for entry in entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!(
                    "    <lastmod>{}</lastmod>\n",
                    lastmod.format("%Y-%m-%d")
                ));
            }
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    pub async fn sitemap_xml(&self) -> String {
        Self::render(&self.build_entries().await)
    }

    pub fn robots_txt(&self) -> String {
        format!(
            "User-agent: *\nAllow: /\nDisallow: /admin\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
            self.site_url
        )
    }
}
