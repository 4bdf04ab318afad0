use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::enquiries::handlers;
use crate::features::enquiries::services::EnquiryService;

/// Public enquiry submission routes
pub fn routes(service: Arc<EnquiryService>) -> Router {
    Router::new()
        .route(
            "/api/contact-enquiry",
            post(handlers::create_contact_enquiry),
        )
        .route(
            "/api/product-enquiry",
            post(handlers::create_product_enquiry),
        )
        .with_state(service)
}

/// Admin enquiry routes (mounted behind the admin guard)
pub fn admin_routes(service: Arc<EnquiryService>) -> Router {
    Router::new()
        .route(
            "/api/admin/contact-enquiry",
            get(handlers::admin_list_contact_enquiries),
        )
        .route(
            "/api/admin/contact-enquiry/{id}",
            get(handlers::admin_get_contact_enquiry)
                .put(handlers::admin_update_contact_enquiry)
                .delete(handlers::admin_delete_contact_enquiry),
        )
        .route(
            "/api/admin/product-enquiry",
            get(handlers::admin_list_product_enquiries),
        )
        .route(
            "/api/admin/product-enquiry/{id}",
            get(handlers::admin_get_product_enquiry)
                .put(handlers::admin_update_product_enquiry)
                .delete(handlers::admin_delete_product_enquiry),
        )
        .with_state(service)
}
