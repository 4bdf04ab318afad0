use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Public category routes
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/category", get(handlers::list_categories))
        .route(
            "/api/category/by-navbar/{slug}",
            get(handlers::list_categories_by_navbar),
        )
        .route(
            "/api/category/by-slug/{slug}",
            get(handlers::get_category_by_slug),
        )
        .with_state(service)
}

/// Admin category routes (mounted behind the admin guard)
pub fn admin_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/category", post(handlers::admin_create_category))
        .route(
            "/api/admin/category",
            get(handlers::admin_list_categories).post(handlers::admin_create_category),
        )
        .route(
            "/api/admin/category/{id}",
            get(handlers::admin_get_category)
                .put(handlers::admin_update_category)
                .delete(handlers::admin_delete_category),
        )
        .with_state(service)
}
