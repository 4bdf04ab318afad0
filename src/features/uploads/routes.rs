use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::features::uploads::dtos::MAX_IMAGE_SIZE;
use crate::features::uploads::handlers;
use crate::features::uploads::services::UploadService;

/// Image upload routes (mounted behind the admin guard)
pub fn routes(service: Arc<UploadService>) -> Router {
    Router::new()
        .route(
            "/api/upload/image",
            post(handlers::upload_image).delete(handlers::delete_image),
        )
        // Room for the multipart framing around a maximum-size image
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::{json, Value};

    use crate::shared::test_helpers::TestApp;

    fn image_form(bytes: Vec<u8>, mime: &str) -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(bytes).file_name("switch.png").mime_type(mime),
        )
    }

    #[tokio::test]
    async fn upload_then_delete() {
        let app = TestApp::new();
        let (name, value) = app.admin_cookie();

        let response = app
            .server
            .post("/api/upload/image")
            .add_header(name, value)
            .multipart(image_form(b"\x89PNG fake".to_vec(), "image/png"))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body = response.json::<Value>();
        let public_id = body["data"]["public_id"].as_str().unwrap().to_string();
        assert!(public_id.starts_with("products/"));
        assert!(public_id.ends_with(".png"));
        assert_eq!(
            body["data"]["url"],
            format!("https://images.test/catalog/{}", public_id)
        );
        assert!(app.images.contains(&public_id));

        let deleted = app
            .admin_delete_json("/api/upload/image", &json!({ "public_id": public_id }))
            .await;
        assert_eq!(deleted.status_code(), StatusCode::OK);
        assert!(app.images.is_empty());
    }

    #[tokio::test]
    async fn rejects_wrong_type_and_missing_file() {
        let app = TestApp::new();

        let (name, value) = app.admin_cookie();
        let pdf = app
            .server
            .post("/api/upload/image")
            .add_header(name, value)
            .multipart(image_form(b"%PDF-1.7".to_vec(), "application/pdf"))
            .await;
        assert_eq!(pdf.status_code(), StatusCode::BAD_REQUEST);

        let (name, value) = app.admin_cookie();
        let no_file = app
            .server
            .post("/api/upload/image")
            .add_header(name, value)
            .multipart(MultipartForm::new().add_text("caption", "switch"))
            .await;
        assert_eq!(no_file.status_code(), StatusCode::BAD_REQUEST);

        assert!(app.images.is_empty());
    }

    #[tokio::test]
    async fn delete_outside_the_prefix_is_rejected() {
        let app = TestApp::new();
        let response = app
            .admin_delete_json(
                "/api/upload/image",
                &json!({ "public_id": "products/../secrets.txt" }),
            )
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn uploads_require_a_session() {
        let app = TestApp::new();
        let response = app
            .server
            .post("/api/upload/image")
            .multipart(image_form(b"\x89PNG fake".to_vec(), "image/png"))
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert!(app.images.is_empty());
    }
}
