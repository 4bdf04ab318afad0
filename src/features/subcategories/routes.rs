use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::subcategories::handlers;
use crate::features::subcategories::services::SubCategoryService;

/// Public subcategory routes
pub fn routes(service: Arc<SubCategoryService>) -> Router {
    Router::new()
        .route("/api/subcategory", get(handlers::list_subcategories))
        .route(
            "/api/subcategory/by-category/{slug}",
            get(handlers::list_subcategories_by_category),
        )
        .route(
            "/api/subcategory/by-slug/{slug}",
            get(handlers::get_subcategory_by_slug),
        )
        .with_state(service)
}

/// Admin subcategory routes (mounted behind the admin guard)
pub fn admin_routes(service: Arc<SubCategoryService>) -> Router {
    Router::new()
        .route("/api/subcategory", post(handlers::admin_create_subcategory))
        .route(
            "/api/admin/subcategory",
            get(handlers::admin_list_subcategories).post(handlers::admin_create_subcategory),
        )
        .route(
            "/api/admin/subcategory/{id}",
            get(handlers::admin_get_subcategory)
                .put(handlers::admin_update_subcategory)
                .delete(handlers::admin_delete_subcategory),
        )
        .with_state(service)
}
