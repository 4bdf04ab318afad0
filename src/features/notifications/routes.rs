use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::features::notifications::handlers;
use crate::features::notifications::services::NotificationService;

/// Admin notification routes (mounted behind the admin guard)
pub fn admin_routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/api/admin/notifications", get(handlers::list_notifications))
        .route(
            "/api/admin/notifications/read-all",
            put(handlers::mark_all_notifications_read),
        )
        .route(
            "/api/admin/notifications/{id}/read",
            put(handlers::mark_notification_read),
        )
        .route(
            "/api/admin/notifications/{id}",
            delete(handlers::delete_notification),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::TestApp;

    async fn submit_contacts(app: &TestApp, count: usize) {
        for i in 0..count {
            let response = app
                .server
                .post("/api/contact-enquiry")
                .json(&json!({
                    "name": format!("Visitor {}", i),
                    "email": "visitor@example.com",
                    "message": "Please call me back",
                }))
                .await;
            assert_eq!(response.status_code(), StatusCode::CREATED);
        }
    }

    #[tokio::test]
    async fn mark_one_then_all_read() {
        let app = TestApp::new();
        submit_contacts(&app, 3).await;

        let feed = app.admin_get("/api/admin/notifications").await.json::<Value>();
        assert_eq!(feed["success"], true);
        assert_eq!(feed["count"], 3);
        assert_eq!(feed["unread"], 3);
        let first = feed["data"][0]["id"].as_str().unwrap().to_string();

        let read = app
            .admin_put(&format!("/api/admin/notifications/{}/read", first), &json!({}))
            .await;
        assert_eq!(read.status_code(), StatusCode::OK);
        assert_eq!(read.json::<Value>()["data"]["read"], true);

        let unread = app
            .admin_get("/api/admin/notifications?unread=true")
            .await
            .json::<Value>();
        assert_eq!(unread["count"], 2);
        assert_eq!(unread["unread"], 2);

        let all = app
            .admin_put("/api/admin/notifications/read-all", &json!({}))
            .await;
        assert_eq!(all.json::<Value>()["data"]["updated"], 2);

        let feed = app.admin_get("/api/admin/notifications").await.json::<Value>();
        assert_eq!(feed["count"], 3);
        assert_eq!(feed["unread"], 0);
    }

    #[tokio::test]
    async fn delete_notification() {
        let app = TestApp::new();
        submit_contacts(&app, 1).await;
        let feed = app.admin_get("/api/admin/notifications").await.json::<Value>();
        let path = format!(
            "/api/admin/notifications/{}",
            feed["data"][0]["id"].as_str().unwrap()
        );

        assert_eq!(app.admin_delete(&path).await.status_code(), StatusCode::OK);
        assert_eq!(
            app.admin_delete(&path).await.status_code(),
            StatusCode::NOT_FOUND
        );

        let feed = app.admin_get("/api/admin/notifications").await.json::<Value>();
        assert_eq!(feed["count"], 0);
    }

    #[tokio::test]
    async fn feed_requires_a_session() {
        let app = TestApp::new();
        let response = app.server.get("/api/admin/notifications").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }
}
