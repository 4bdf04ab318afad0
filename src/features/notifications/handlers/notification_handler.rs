use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::notifications::dtos::{
    MarkAllReadResponseDto, NotificationFeedResponse, NotificationListQuery,
    NotificationResponseDto,
};
use crate::features::notifications::services::NotificationService;
use crate::shared::types::ApiResponse;

/// List notifications, newest first
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    params(NotificationListQuery),
    responses(
        (status = 200, description = "Notification feed", body = NotificationFeedResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn list_notifications(
    State(service): State<Arc<NotificationService>>,
    AppQuery(query): AppQuery<NotificationListQuery>,
) -> Result<Json<NotificationFeedResponse>> {
    let (data, unread) = service.list(query.unread.unwrap_or(false)).await?;
    Ok(Json(NotificationFeedResponse {
        success: true,
        count: data.len(),
        data,
        unread,
    }))
}

#[utoipa::path(
    put,
    path = "/api/admin/notifications/{id}/read",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = ApiResponse<NotificationResponseDto>),
        (status = 404, description = "Notification not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    State(service): State<Arc<NotificationService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<NotificationResponseDto>>> {
    let notification = service.mark_read(id).await?;
    Ok(Json(ApiResponse::success(Some(notification), None)))
}

#[utoipa::path(
    put,
    path = "/api/admin/notifications/read-all",
    responses(
        (status = 200, description = "All notifications marked as read", body = ApiResponse<MarkAllReadResponseDto>)
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn mark_all_notifications_read(
    State(service): State<Arc<NotificationService>>,
) -> Result<Json<ApiResponse<MarkAllReadResponseDto>>> {
    let updated = service.mark_all_read().await?;
    Ok(Json(ApiResponse::success(
        Some(MarkAllReadResponseDto { updated }),
        Some("All notifications marked as read".to_string()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/notifications/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted"),
        (status = 404, description = "Notification not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn delete_notification(
    State(service): State<Arc<NotificationService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Notification deleted successfully".to_string()),
    )))
}
