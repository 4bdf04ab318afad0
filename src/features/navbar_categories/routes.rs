use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::navbar_categories::handlers;
use crate::features::navbar_categories::services::NavbarCategoryService;

/// Public navbar category routes
pub fn routes(service: Arc<NavbarCategoryService>) -> Router {
    Router::new()
        .route("/api/navbar-category", get(handlers::list_navbar_categories))
        .route(
            "/api/navbar-category/by-slug/{slug}",
            get(handlers::get_navbar_category_by_slug),
        )
        .with_state(service)
}

/// Admin navbar category routes (mounted behind the admin guard)
pub fn admin_routes(service: Arc<NavbarCategoryService>) -> Router {
    Router::new()
        .route("/api/navbar-category", post(handlers::admin_create_navbar_category))
        .route(
            "/api/admin/navbar-category",
            get(handlers::admin_list_navbar_categories)
                .post(handlers::admin_create_navbar_category),
        )
        .route(
            "/api/admin/navbar-category/{id}",
            get(handlers::admin_get_navbar_category)
                .put(handlers::admin_update_navbar_category)
                .delete(handlers::admin_delete_navbar_category),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{slugs, TestApp};

    #[tokio::test]
    async fn ordered_by_display_order() {
        let app = TestApp::new();
        for (name, order) in [("Wireless", 2), ("Networking", 1), ("Security", 3)] {
            app.create(
                "/api/admin/navbar-category",
                json!({ "name": name, "order": order }),
            )
            .await;
        }

        let response = app.server.get("/api/navbar-category").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            slugs(&response.json::<Value>()),
            vec!["networking", "wireless", "security"]
        );
    }

    #[tokio::test]
    async fn by_slug_only_finds_active_navbars() {
        let app = TestApp::new();
        app.create_navbar("Networking", true).await;
        app.create_navbar("Legacy Gear", false).await;

        let found = app.server.get("/api/navbar-category/by-slug/networking").await;
        assert_eq!(found.status_code(), StatusCode::OK);
        assert_eq!(found.json::<Value>()["data"]["name"], "Networking");

        let hidden = app
            .server
            .get("/api/navbar-category/by-slug/legacy-gear")
            .await;
        assert_eq!(hidden.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let app = TestApp::new();
        let response = app
            .admin_post("/api/admin/navbar-category", &json!({ "name": "!!!" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_description_clears_it() {
        let app = TestApp::new();
        let id = app
            .create(
                "/api/admin/navbar-category",
                json!({ "name": "Networking", "description": "Switches and routers" }),
            )
            .await;

        let response = app
            .admin_put(
                &format!("/api/admin/navbar-category/{}", id),
                &json!({ "description": "" }),
            )
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.json::<Value>()["data"]["description"].is_null());
    }

    #[tokio::test]
    async fn create_on_the_collection_path_is_admin_only() {
        let app = TestApp::new();
        let body = json!({ "name": "Wireless" });

        let anonymous = app.server.post("/api/navbar-category").json(&body).await;
        assert_eq!(anonymous.status_code(), StatusCode::UNAUTHORIZED);

        app.create("/api/navbar-category", body).await;
        let listed = app.server.get("/api/navbar-category").await;
        assert_eq!(slugs(&listed.json::<Value>()), vec!["wireless"]);
    }
}
