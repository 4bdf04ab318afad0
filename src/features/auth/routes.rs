use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Login and logout (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/admin/login", post(handlers::login))
        .route("/api/admin/logout", post(handlers::logout))
        .with_state(service)
}

/// Session check, mounted behind the admin guard
pub fn protected_routes() -> Router {
    Router::new().route("/api/admin/verify", get(handlers::verify))
}
