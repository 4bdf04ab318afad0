use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Public product routes
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/product", get(handlers::list_products))
        .route(
            "/api/product/by-navbar/{slug}",
            get(handlers::list_products_by_navbar),
        )
        .route(
            "/api/product/by-category/{slug}",
            get(handlers::list_products_by_category),
        )
        .route(
            "/api/product/by-subcategory/{slug}",
            get(handlers::list_products_by_subcategory),
        )
        .route(
            "/api/product/by-slug/{slug}",
            get(handlers::get_product_by_slug),
        )
        .with_state(service)
}

/// Admin product routes (mounted behind the admin guard)
pub fn admin_routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route("/api/product", post(handlers::admin_create_product))
        .route(
            "/api/admin/product",
            get(handlers::admin_list_products).post(handlers::admin_create_product),
        )
        .route(
            "/api/admin/product/{id}",
            get(handlers::admin_get_product)
                .put(handlers::admin_update_product)
                .delete(handlers::admin_delete_product),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{slugs, TestApp};

    #[tokio::test]
    async fn public_listing_requires_every_ancestor_to_be_active() {
        let app = TestApp::new();
        let navbar = app.create_navbar("Networking", true).await;
        let hidden_navbar = app.create_navbar("Legacy", false).await;
        let category = app.create_category("Switches", navbar, true).await;
        let hidden_category = app.create_category("Hubs", navbar, false).await;
        let managed = app.create_subcategory("Managed", category, true).await;
        let unmanaged = app.create_subcategory("Unmanaged", category, false).await;

        app.create_product("Catalyst 9200", navbar, category, Some(managed))
            .await;
        app.create_product("Desk Switch", navbar, category, None).await;
        app.create_product("Dumb Switch", navbar, category, Some(unmanaged))
            .await;
        app.create_product("Old Hub", navbar, hidden_category, None)
            .await;
        app.create_product("Token Ring", hidden_navbar, category, None)
            .await;
        let inactive = app.create_product("Prototype", navbar, category, None).await;
        app.admin_put(
            &format!("/api/admin/product/{}", inactive),
            &json!({ "isActive": false }),
        )
        .await;

        let public = app.server.get("/api/product").await;
        assert_eq!(public.status_code(), StatusCode::OK);
        let mut visible = slugs(&public.json::<Value>());
        visible.sort();
        assert_eq!(visible, vec!["catalyst-9200", "desk-switch"]);

        let admin = app.admin_get("/api/admin/product").await;
        assert_eq!(slugs(&admin.json::<Value>()).len(), 6);
    }

    #[tokio::test]
    async fn listings_by_parent_slug() {
        let app = TestApp::new();
        let navbar = app.create_navbar("Networking", true).await;
        let switches = app.create_category("Switches", navbar, true).await;
        let routers = app.create_category("Routers", navbar, true).await;
        let managed = app.create_subcategory("Managed", switches, true).await;

        app.create_product("Catalyst 9200", navbar, switches, Some(managed))
            .await;
        app.create_product("ISR 1100", navbar, routers, None).await;

        let by_navbar = app.server.get("/api/product/by-navbar/networking").await;
        assert_eq!(slugs(&by_navbar.json::<Value>()).len(), 2);

        let by_category = app.server.get("/api/product/by-category/routers").await;
        assert_eq!(slugs(&by_category.json::<Value>()), vec!["isr-1100"]);

        let by_sub = app
            .server
            .get("/api/product/by-subcategory/managed")
            .await;
        let body = by_sub.json::<Value>();
        assert_eq!(slugs(&body), vec!["catalyst-9200"]);
        assert_eq!(body["data"][0]["subcategory"]["slug"], "managed");
        assert_eq!(body["data"][0]["category"]["slug"], "switches");
        assert_eq!(body["data"][0]["navbarCategory"]["slug"], "networking");

        let unknown = app.server.get("/api/product/by-category/modems").await;
        assert_eq!(unknown.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_by_slug_hides_invisible_products() {
        let app = TestApp::new();
        let navbar = app.create_navbar("Networking", true).await;
        let category = app.create_category("Switches", navbar, true).await;
        app.create_product("Catalyst 9200", navbar, category, None)
            .await;

        let found = app.server.get("/api/product/by-slug/catalyst-9200").await;
        assert_eq!(found.status_code(), StatusCode::OK);
        assert_eq!(
            found.json::<Value>()["data"]["images"][0],
            "https://images.test/catalog/products/a.png"
        );

        app.admin_put(
            &format!("/api/admin/category/{}", category),
            &json!({ "isActive": false }),
        )
        .await;
        let hidden = app.server.get("/api/product/by-slug/catalyst-9200").await;
        assert_eq!(hidden.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn null_subcategory_clears_it() {
        let app = TestApp::new();
        let navbar = app.create_navbar("Networking", true).await;
        let category = app.create_category("Switches", navbar, true).await;
        let managed = app.create_subcategory("Managed", category, true).await;
        let product = app
            .create_product("Catalyst 9200", navbar, category, Some(managed))
            .await;

        let untouched = app
            .admin_put(
                &format!("/api/admin/product/{}", product),
                &json!({ "order": 2 }),
            )
            .await;
        assert_eq!(
            untouched.json::<Value>()["data"]["subcategoryId"],
            managed.to_string()
        );

        let cleared = app
            .admin_put(
                &format!("/api/admin/product/{}", product),
                &json!({ "subcategory": null }),
            )
            .await;
        assert_eq!(cleared.status_code(), StatusCode::OK);
        let body = cleared.json::<Value>();
        assert!(body["data"]["subcategoryId"].is_null());
        assert!(body["data"]["subcategory"].is_null());
    }

    #[tokio::test]
    async fn create_validates_images_and_parents() {
        let app = TestApp::new();
        let navbar = app.create_navbar("Networking", true).await;
        let category = app.create_category("Switches", navbar, true).await;

        let product = |images: Value, category: Value| {
            json!({
                "name": "Catalyst 9200",
                "description": "Stackable access switch",
                "images": images,
                "navbarCategory": navbar,
                "category": category,
            })
        };

        let no_images = app
            .admin_post("/api/admin/product", &product(json!([]), json!(category)))
            .await;
        assert_eq!(no_images.status_code(), StatusCode::BAD_REQUEST);

        let too_many = app
            .admin_post(
                "/api/admin/product",
                &product(
                    json!(["/a.png", "/b.png", "/c.png", "/d.png", "/e.png"]),
                    json!(category),
                ),
            )
            .await;
        assert_eq!(too_many.status_code(), StatusCode::BAD_REQUEST);

        let missing_parent = app
            .admin_post(
                "/api/admin/product",
                &product(json!(["/a.png"]), json!(uuid::Uuid::new_v4())),
            )
            .await;
        assert_eq!(missing_parent.status_code(), StatusCode::BAD_REQUEST);

        let admin = app.admin_get("/api/admin/product").await;
        assert!(slugs(&admin.json::<Value>()).is_empty());
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let app = TestApp::new();
        let navbar = app.create_navbar("Networking", true).await;
        let category = app.create_category("Switches", navbar, true).await;
        let product = app.create_product("Catalyst 9200", navbar, category, None).await;
        let path = format!("/api/admin/product/{}", product);

        assert_eq!(app.admin_delete(&path).await.status_code(), StatusCode::OK);
        assert_eq!(app.admin_get(&path).await.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            app.admin_delete(&path).await.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn create_on_the_collection_path_is_admin_only() {
        let app = TestApp::new();
        let navbar = app.create_navbar("Networking", true).await;
        let switches = app.create_category("Switches", navbar, true).await;
        let body = json!({
            "name": "Edge Switch 24",
            "description": "24 port gigabit switch",
            "images": ["https://images.test/catalog/products/edge.png"],
            "navbarCategory": navbar,
            "category": switches,
        });

        let anonymous = app.server.post("/api/product").json(&body).await;
        assert_eq!(anonymous.status_code(), StatusCode::UNAUTHORIZED);

        app.create("/api/product", body).await;
        let listed = app.server.get("/api/product").await;
        assert_eq!(listed.status_code(), StatusCode::OK);
        assert_eq!(slugs(&listed.json::<Value>()), vec!["edge-switch-24"]);
    }
}
