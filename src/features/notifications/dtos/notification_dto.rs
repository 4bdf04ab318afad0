use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::notifications::models::{Notification, NotificationKind};

/// Query parameters for the notification feed
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NotificationListQuery {
    /// Only return unread notifications
    pub unread: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponseDto {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub icon: String,
    pub link: Option<String>,
    pub read: bool,
    pub urgent: bool,
    pub related_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponseDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            title: n.title,
            message: n.message,
            kind: n.kind,
            icon: n.icon,
            link: n.link,
            read: n.is_read,
            urgent: n.urgent,
            related_id: n.related_id,
            created_at: n.created_at,
        }
    }
}

/// Notification feed envelope: the usual `count` plus the unread total
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotificationFeedResponse {
    pub success: bool,
    pub data: Vec<NotificationResponseDto>,
    pub count: usize,
    pub unread: usize,
}

/// Result of marking every notification as read
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadResponseDto {
    pub updated: usize,
}

/// Input for raising a notification from another feature
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub link: Option<String>,
    pub urgent: bool,
    pub related_id: Option<Uuid>,
}
