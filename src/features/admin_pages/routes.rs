use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::core::middleware;
use crate::features::admin_pages::handlers;
use crate::features::auth::TokenService;

/// Admin page shells, guarded by redirects between login and dashboard
pub fn routes(tokens: Arc<TokenService>) -> Router {
    Router::new()
        .route("/admin", get(handlers::login_page))
        .route("/admin/", get(handlers::login_page))
        .route("/admin/dashboard", get(handlers::dashboard_page))
        .route("/admin/dashboard/{*rest}", get(handlers::dashboard_page))
        .route_layer(from_fn_with_state(tokens, middleware::admin_pages_middleware))
}

#[cfg(test)]
mod tests {
    use axum::http::{header::LOCATION, StatusCode};

    use crate::shared::test_helpers::TestApp;

    #[tokio::test]
    async fn dashboard_without_session_redirects_to_login() {
        let app = TestApp::new();

        for path in ["/admin/dashboard", "/admin/dashboard/products/new"] {
            let response = app.server.get(path).await;
            assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT, "{}", path);
            assert_eq!(response.header(LOCATION), "/admin");
        }
    }

    #[tokio::test]
    async fn dashboard_with_session_is_served() {
        let app = TestApp::new();
        let response = app.admin_get("/admin/dashboard/enquiries").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains("<html"));
    }

    #[tokio::test]
    async fn login_page_redirects_a_signed_in_admin() {
        let app = TestApp::new();

        let anonymous = app.server.get("/admin").await;
        assert_eq!(anonymous.status_code(), StatusCode::OK);

        let signed_in = app.admin_get("/admin").await;
        assert_eq!(signed_in.status_code(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(signed_in.header(LOCATION), "/admin/dashboard");
    }

    #[tokio::test]
    async fn forged_cookie_counts_as_signed_out() {
        let app = TestApp::new();
        let response = app
            .server
            .get("/admin/dashboard")
            .add_header(
                axum::http::header::COOKIE,
                axum::http::HeaderValue::from_static("admin-token=forged"),
            )
            .await;
        assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    }
}
