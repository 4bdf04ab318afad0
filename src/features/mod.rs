pub mod admin_pages;
pub mod auth;
pub mod categories;
pub mod enquiries;
pub mod navbar_categories;
pub mod notifications;
pub mod products;
pub mod sitemap;
pub mod subcategories;
pub mod uploads;
