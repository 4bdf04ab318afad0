use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::store::{Document, Sort, Value};

/// What raised the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ContactEnquiry,
    ProductEnquiry,
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ContactEnquiry => "contact_enquiry",
            NotificationKind::ProductEnquiry => "product_enquiry",
            NotificationKind::System => "system",
        }
    }

    /// Icon name shown next to the notification in the admin panel
    pub fn default_icon(&self) -> &'static str {
        match self {
            NotificationKind::ContactEnquiry => "mail",
            NotificationKind::ProductEnquiry => "shopping-cart",
            NotificationKind::System => "bell",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown notification kind '{0}'")]
pub struct UnknownNotificationKind(String);

impl TryFrom<String> for NotificationKind {
    type Error = UnknownNotificationKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "contact_enquiry" => Ok(NotificationKind::ContactEnquiry),
            "product_enquiry" => Ok(NotificationKind::ProductEnquiry),
            "system" => Ok(NotificationKind::System),
            _ => Err(UnknownNotificationKind(value)),
        }
    }
}

/// Database model for an admin notification
#[derive(Debug, Clone, FromRow)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[sqlx(try_from = "String")]
    pub kind: NotificationKind,
    pub icon: String,
    pub link: Option<String>,
    pub is_read: bool,
    pub urgent: bool,
    pub related_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Notification {
    const COLLECTION: &'static str = "notifications";
    const ENTITY: &'static str = "notification";
    const DEFAULT_SORT: Sort = Sort::Newest;

    fn id(&self) -> Uuid {
        self.id
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Uuid(self.id)),
            ("title", Value::Text(self.title.clone())),
            ("message", Value::Text(self.message.clone())),
            ("kind", Value::Text(self.kind.as_str().to_string())),
            ("icon", Value::Text(self.icon.clone())),
            ("link", Value::OptText(self.link.clone())),
            ("is_read", Value::Bool(self.is_read)),
            ("urgent", Value::Bool(self.urgent)),
            ("related_id", Value::OptUuid(self.related_id)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }
}
