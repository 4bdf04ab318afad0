use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::notifications::dtos::{NewNotification, NotificationResponseDto};
use crate::features::notifications::models::Notification;
use crate::modules::store::{Filter, Repo, Sort, Value};

/// Service for the admin notification feed
pub struct NotificationService {
    repo: Repo<Notification>,
}

impl NotificationService {
    pub fn new(repo: Repo<Notification>) -> Self {
        Self { repo }
    }

    /// Store a new unread notification
    pub async fn notify(&self, input: NewNotification) -> Result<Notification> {
        let now = Utc::now();
        let notification = Notification {
            id: Uuid::new_v4(),
            title: input.title,
            message: input.message,
            icon: input.kind.default_icon().to_string(),
            kind: input.kind,
            link: input.link,
            is_read: false,
            urgent: input.urgent,
            related_id: input.related_id,
            created_at: now,
            updated_at: now,
        };

        self.repo.insert(&notification).await?;
        tracing::debug!(
            "Raised {} notification {} (urgent: {})",
            notification.kind.as_str(),
            notification.id,
            notification.urgent
        );

        Ok(notification)
    }

    fn unread_filter() -> Filter {
        Filter::new()
            .eq("is_read", Value::Bool(false))
            .sort(Sort::Newest)
    }

    /// Newest first, with the total number of unread notifications
    pub async fn list(&self, unread_only: bool) -> Result<(Vec<NotificationResponseDto>, usize)> {
        let notifications = if unread_only {
            self.repo.find(Self::unread_filter()).await?
        } else {
            self.repo.find(Filter::new().sort(Sort::Newest)).await?
        };

        let unread = if unread_only {
            notifications.len()
        } else {
            notifications.iter().filter(|n| !n.is_read).count()
        };

        Ok((notifications.into_iter().map(Into::into).collect(), unread))
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<NotificationResponseDto> {
        let mut notification = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))?;

        if !notification.is_read {
            notification.is_read = true;
            notification.updated_at = Utc::now();
            if !self.repo.update(&notification).await? {
                return Err(AppError::NotFound(format!("Notification {} not found", id)));
            }
        }

        Ok(notification.into())
    }

    /// Mark every unread notification as read, returning how many changed
    pub async fn mark_all_read(&self) -> Result<usize> {
        let unread = self.repo.find(Self::unread_filter()).await?;
        let now = Utc::now();

        let mut updated = 0;
        for mut notification in unread {
            notification.is_read = true;
            notification.updated_at = now;
            if self.repo.update(&notification).await? {
                updated += 1;
            }
        }

        tracing::info!("Marked {} notifications as read", updated);
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notifications::models::NotificationKind;
    use crate::modules::store::MemoryStore;
    use std::sync::Arc;

    fn service() -> NotificationService {
        NotificationService::new(Arc::new(MemoryStore::new()))
    }

    fn contact(title: &str) -> NewNotification {
        NewNotification {
            title: title.to_string(),
            message: "Someone wrote in".to_string(),
            kind: NotificationKind::ContactEnquiry,
            link: None,
            urgent: false,
            related_id: None,
        }
    }

    #[tokio::test]
    async fn new_notifications_are_unread_with_kind_icon() {
        let service = service();
        let created = service.notify(contact("Hello")).await.unwrap();

        assert!(!created.is_read);
        assert_eq!(created.icon, "mail");

        let (all, unread) = service.list(false).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(unread, 1);
    }

    #[tokio::test]
    async fn mark_read_and_read_all_update_unread_total() {
        let service = service();
        let first = service.notify(contact("one")).await.unwrap();
        service.notify(contact("two")).await.unwrap();
        service.notify(contact("three")).await.unwrap();

        let read = service.mark_read(first.id).await.unwrap();
        assert!(read.read);

        let (unread_only, unread) = service.list(true).await.unwrap();
        assert_eq!(unread_only.len(), 2);
        assert_eq!(unread, 2);

        assert_eq!(service.mark_all_read().await.unwrap(), 2);
        let (all, unread) = service.list(false).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(unread, 0);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let service = service();
        assert!(matches!(
            service.mark_read(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
