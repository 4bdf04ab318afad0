//! Service wiring and the HTTP router

use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;

use crate::core::middleware;
use crate::features::admin_pages::routes as admin_pages_routes;
use crate::features::auth::credentials::CredentialStore;
use crate::features::auth::routes as auth_routes;
use crate::features::auth::{AuthService, TokenService};
use crate::features::categories::models::Category;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::enquiries::models::{ContactEnquiry, ProductEnquiry};
use crate::features::enquiries::{routes as enquiries_routes, EnquiryService};
use crate::features::navbar_categories::models::NavbarCategory;
use crate::features::navbar_categories::{routes as navbar_routes, NavbarCategoryService};
use crate::features::notifications::models::Notification;
use crate::features::notifications::{routes as notifications_routes, NotificationService};
use crate::features::products::models::Product;
use crate::features::products::{routes as products_routes, ProductService};
use crate::features::sitemap::{routes as sitemap_routes, CatalogSource, SitemapService};
use crate::features::subcategories::models::SubCategory;
use crate::features::subcategories::{routes as subcategories_routes, SubCategoryService};
use crate::features::uploads::{routes as uploads_routes, UploadService};
use crate::modules::storage::ImageHost;
use crate::modules::store::Collection;

/// External collaborators and settings the services are built from
pub struct Collaborators {
    pub tokens: Arc<TokenService>,
    pub credentials: CredentialStore,
    pub cookie_secure: bool,
    pub image_host: Arc<dyn ImageHost>,
    pub image_prefix: String,
    pub catalog_source: Arc<dyn CatalogSource>,
    pub site_url: String,
}

pub struct Services {
    pub tokens: Arc<TokenService>,
    pub auth: Arc<AuthService>,
    pub navbar_categories: Arc<NavbarCategoryService>,
    pub categories: Arc<CategoryService>,
    pub subcategories: Arc<SubCategoryService>,
    pub products: Arc<ProductService>,
    pub enquiries: Arc<EnquiryService>,
    pub notifications: Arc<NotificationService>,
    pub uploads: Arc<UploadService>,
    pub sitemap: Arc<SitemapService>,
}

impl Services {
    /// Build every service on top of one store holding all seven collections
    pub fn new<S>(store: Arc<S>, deps: Collaborators) -> Self
    where
        S: Collection<NavbarCategory>
            + Collection<Category>
            + Collection<SubCategory>
            + Collection<Product>
            + Collection<ContactEnquiry>
            + Collection<ProductEnquiry>
            + Collection<Notification>
            + 'static,
    {
        let notifications = Arc::new(NotificationService::new(store.clone()));

        Self {
            auth: Arc::new(AuthService::new(
                deps.credentials,
                Arc::clone(&deps.tokens),
                deps.cookie_secure,
            )),
            tokens: deps.tokens,
            navbar_categories: Arc::new(NavbarCategoryService::new(store.clone())),
            categories: Arc::new(CategoryService::new(store.clone(), store.clone())),
            subcategories: Arc::new(SubCategoryService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            products: Arc::new(ProductService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            enquiries: Arc::new(EnquiryService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                Arc::clone(&notifications),
            )),
            notifications,
            uploads: Arc::new(UploadService::new(deps.image_host, deps.image_prefix)),
            sitemap: Arc::new(SitemapService::new(deps.catalog_source, &deps.site_url)),
        }
    }
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Every route of the service, without the outer tracing and CORS layers
pub fn build_router(services: &Services, max_body_size: usize) -> Router {
    // Routes requiring an admin token (cookie or Bearer)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .merge(navbar_routes::admin_routes(Arc::clone(
            &services.navbar_categories,
        )))
        .merge(categories_routes::admin_routes(Arc::clone(
            &services.categories,
        )))
        .merge(subcategories_routes::admin_routes(Arc::clone(
            &services.subcategories,
        )))
        .merge(products_routes::admin_routes(Arc::clone(&services.products)))
        .merge(enquiries_routes::admin_routes(Arc::clone(
            &services.enquiries,
        )))
        .merge(notifications_routes::admin_routes(Arc::clone(
            &services.notifications,
        )))
        .merge(uploads_routes::routes(Arc::clone(&services.uploads)))
        .route_layer(from_fn_with_state(
            Arc::clone(&services.tokens),
            middleware::admin_api_middleware,
        ));

    let public_routes = Router::new()
        .merge(auth_routes::public_routes(Arc::clone(&services.auth)))
        .merge(navbar_routes::routes(Arc::clone(&services.navbar_categories)))
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(subcategories_routes::routes(Arc::clone(
            &services.subcategories,
        )))
        .merge(products_routes::routes(Arc::clone(&services.products)))
        .merge(enquiries_routes::routes(Arc::clone(&services.enquiries)))
        .merge(sitemap_routes::routes(Arc::clone(&services.sitemap)))
        .route("/health", get(health_check));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .merge(admin_pages_routes::routes(Arc::clone(&services.tokens)))
        .layer(DefaultBodyLimit::max(max_body_size))
}
