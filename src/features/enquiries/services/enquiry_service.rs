use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::enquiries::dtos::{
    ContactEnquiryResponseDto, CreateContactEnquiryDto, CreateProductEnquiryDto,
    ProductEnquiryResponseDto,
};
use crate::features::enquiries::models::{ContactEnquiry, EnquiryStatus, ProductEnquiry};
use crate::features::notifications::dtos::NewNotification;
use crate::features::notifications::models::NotificationKind;
use crate::features::notifications::NotificationService;
use crate::features::products::models::Product;
use crate::modules::store::{Filter, Repo, Sort, Value};
use crate::shared::constants::URGENT_ENQUIRY_QUANTITY;

const ENQUIRIES_PAGE: &str = "/admin/dashboard/enquiries";

fn status_filter(status: Option<EnquiryStatus>) -> Filter {
    let filter = Filter::new().sort(Sort::Newest);
    match status {
        Some(status) => filter.eq("status", Value::Text(status.as_str().to_string())),
        None => filter,
    }
}

/// Service for contact and product enquiries
///
/// Every accepted submission raises an admin notification. A failure to store
/// the notification is logged and does not fail the submission.
pub struct EnquiryService {
    contacts: Repo<ContactEnquiry>,
    product_enquiries: Repo<ProductEnquiry>,
    products: Repo<Product>,
    notifications: Arc<NotificationService>,
}

impl EnquiryService {
    pub fn new(
        contacts: Repo<ContactEnquiry>,
        product_enquiries: Repo<ProductEnquiry>,
        products: Repo<Product>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            contacts,
            product_enquiries,
            products,
            notifications,
        }
    }

    async fn notify(&self, notification: NewNotification) {
        if let Err(e) = self.notifications.notify(notification).await {
            tracing::warn!("Failed to raise enquiry notification: {}", e);
        }
    }

    // =========================================================================
    // CONTACT ENQUIRIES
    // =========================================================================

    pub async fn submit_contact(
        &self,
        dto: CreateContactEnquiryDto,
    ) -> Result<ContactEnquiryResponseDto> {
        let now = Utc::now();
        let enquiry = ContactEnquiry {
            id: Uuid::new_v4(),
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            company: dto.company,
            subject: dto.subject,
            message: dto.message,
            status: EnquiryStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.contacts.insert(&enquiry).await?;
        tracing::info!("Received contact enquiry {}", enquiry.id);

        self.notify(NewNotification {
            title: "New contact enquiry".to_string(),
            message: match &enquiry.subject {
                Some(subject) => format!("{} ({}): {}", enquiry.name, enquiry.email, subject),
                None => format!("{} ({}) sent a message", enquiry.name, enquiry.email),
            },
            kind: NotificationKind::ContactEnquiry,
            link: Some(format!("{}/contact/{}", ENQUIRIES_PAGE, enquiry.id)),
            urgent: false,
            related_id: Some(enquiry.id),
        })
        .await;

        Ok(enquiry.into())
    }

    pub async fn list_contacts(
        &self,
        status: Option<EnquiryStatus>,
    ) -> Result<Vec<ContactEnquiryResponseDto>> {
        let enquiries = self.contacts.find(status_filter(status)).await?;
        Ok(enquiries.into_iter().map(Into::into).collect())
    }

    async fn find_contact(&self, id: Uuid) -> Result<ContactEnquiry> {
        self.contacts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact enquiry {} not found", id)))
    }

    pub async fn get_contact(&self, id: Uuid) -> Result<ContactEnquiryResponseDto> {
        Ok(self.find_contact(id).await?.into())
    }

    pub async fn update_contact_status(
        &self,
        id: Uuid,
        status: EnquiryStatus,
    ) -> Result<ContactEnquiryResponseDto> {
        let mut enquiry = self.find_contact(id).await?;
        enquiry.status = status;
        enquiry.updated_at = Utc::now();

        if !self.contacts.update(&enquiry).await? {
            return Err(AppError::NotFound(format!("Contact enquiry {} not found", id)));
        }
        tracing::info!("Contact enquiry {} is now {}", id, status);

        Ok(enquiry.into())
    }

    pub async fn delete_contact(&self, id: Uuid) -> Result<()> {
        if !self.contacts.delete(id).await? {
            return Err(AppError::NotFound(format!("Contact enquiry {} not found", id)));
        }
        Ok(())
    }

    // =========================================================================
    // PRODUCT ENQUIRIES
    // =========================================================================

    /// Store a quote request; it is urgent when the product is known and the
    /// requested quantity reaches the urgent threshold
    pub async fn submit_product(
        &self,
        dto: CreateProductEnquiryDto,
    ) -> Result<ProductEnquiryResponseDto> {
        let product = match dto.product {
            Some(id) => self.products.find_by_id(id).await?,
            None => None,
        };

        let product_name = dto
            .product_name
            .or_else(|| product.as_ref().map(|p| p.name.clone()))
            .ok_or_else(|| AppError::Validation("productName: Product name is required".to_string()))?;

        let urgent = product.is_some()
            && dto
                .quantity
                .is_some_and(|quantity| quantity >= URGENT_ENQUIRY_QUANTITY);

        let now = Utc::now();
        let enquiry = ProductEnquiry {
            id: Uuid::new_v4(),
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            company: dto.company,
            product_id: dto.product,
            product_name,
            quantity: dto.quantity,
            message: dto.message,
            status: EnquiryStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.product_enquiries.insert(&enquiry).await?;
        tracing::info!(
            "Received product enquiry {} for '{}' (urgent: {})",
            enquiry.id,
            enquiry.product_name,
            urgent
        );

        let quantity = enquiry
            .quantity
            .map(|q| format!(" x{}", q))
            .unwrap_or_default();
        self.notify(NewNotification {
            title: if urgent {
                "Urgent product enquiry".to_string()
            } else {
                "New product enquiry".to_string()
            },
            message: format!(
                "{} asked about {}{}",
                enquiry.name, enquiry.product_name, quantity
            ),
            kind: NotificationKind::ProductEnquiry,
            link: Some(format!("{}/product/{}", ENQUIRIES_PAGE, enquiry.id)),
            urgent,
            related_id: Some(enquiry.id),
        })
        .await;

        Ok(enquiry.into())
    }

    pub async fn list_product_enquiries(
        &self,
        status: Option<EnquiryStatus>,
    ) -> Result<Vec<ProductEnquiryResponseDto>> {
        let enquiries = self.product_enquiries.find(status_filter(status)).await?;
        Ok(enquiries.into_iter().map(Into::into).collect())
    }

    async fn find_product_enquiry(&self, id: Uuid) -> Result<ProductEnquiry> {
        self.product_enquiries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product enquiry {} not found", id)))
    }

    pub async fn get_product_enquiry(&self, id: Uuid) -> Result<ProductEnquiryResponseDto> {
        Ok(self.find_product_enquiry(id).await?.into())
    }

    pub async fn update_product_enquiry_status(
        &self,
        id: Uuid,
        status: EnquiryStatus,
    ) -> Result<ProductEnquiryResponseDto> {
        let mut enquiry = self.find_product_enquiry(id).await?;
        enquiry.status = status;
        enquiry.updated_at = Utc::now();

        if !self.product_enquiries.update(&enquiry).await? {
            return Err(AppError::NotFound(format!("Product enquiry {} not found", id)));
        }
        tracing::info!("Product enquiry {} is now {}", id, status);

        Ok(enquiry.into())
    }

    pub async fn delete_product_enquiry(&self, id: Uuid) -> Result<()> {
        if !self.product_enquiries.delete(id).await? {
            return Err(AppError::NotFound(format!("Product enquiry {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::MemoryStore;

    struct Fixture {
        service: EnquiryService,
        notifications: Arc<NotificationService>,
        store: Arc<MemoryStore>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let notifications = Arc::new(NotificationService::new(store.clone()));
        let service = EnquiryService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            notifications.clone(),
        );
        Fixture {
            service,
            notifications,
            store,
        }
    }

    async fn seed_product(store: &Arc<MemoryStore>) -> Product {
        use crate::modules::store::Collection;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: "Catalyst 9200".to_string(),
            slug: "catalyst-9200".to_string(),
            description: "Access switch".to_string(),
            key_features: vec![],
            images: vec!["https://img.example.com/c9200.png".to_string()],
            navbar_category_id: Uuid::new_v4(),
            category_id: Uuid::new_v4(),
            subcategory_id: None,
            display_order: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        Collection::<Product>::insert(store.as_ref(), &product)
            .await
            .unwrap();
        product
    }

    fn product_enquiry(product: Option<Uuid>, quantity: Option<i32>) -> CreateProductEnquiryDto {
        CreateProductEnquiryDto {
            name: "Sari".to_string(),
            email: "sari@example.com".to_string(),
            phone: None,
            company: None,
            product,
            product_name: None,
            quantity,
            message: None,
        }
    }

    #[tokio::test]
    async fn contact_submission_raises_a_notification() {
        let f = fixture();
        let enquiry = f
            .service
            .submit_contact(CreateContactEnquiryDto {
                name: "Budi".to_string(),
                email: "budi@example.com".to_string(),
                phone: None,
                company: None,
                subject: Some("Pricing".to_string()),
                message: "Please call me".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(enquiry.status, EnquiryStatus::Pending);

        let (feed, unread) = f.notifications.list(false).await.unwrap();
        assert_eq!(unread, 1);
        assert_eq!(feed[0].kind, NotificationKind::ContactEnquiry);
        assert_eq!(feed[0].related_id, Some(enquiry.id));
        assert!(!feed[0].urgent);
    }

    #[tokio::test]
    async fn large_orders_for_known_products_are_urgent() {
        let f = fixture();
        let product = seed_product(&f.store).await;

        let enquiry = f
            .service
            .submit_product(product_enquiry(Some(product.id), Some(URGENT_ENQUIRY_QUANTITY)))
            .await
            .unwrap();
        assert_eq!(enquiry.product_name, "Catalyst 9200");

        f.service
            .submit_product(product_enquiry(Some(product.id), Some(URGENT_ENQUIRY_QUANTITY - 1)))
            .await
            .unwrap();

        let mut unknown = product_enquiry(Some(Uuid::new_v4()), Some(500));
        unknown.product_name = Some("Mystery router".to_string());
        f.service.submit_product(unknown).await.unwrap();

        let (feed, _) = f.notifications.list(false).await.unwrap();
        let urgent: Vec<_> = feed.iter().filter(|n| n.urgent).collect();
        assert_eq!(feed.len(), 3);
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].related_id, Some(enquiry.id));
    }

    #[tokio::test]
    async fn product_name_is_required_without_a_known_product() {
        let f = fixture();
        let result = f.service.submit_product(product_enquiry(None, Some(1))).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(f.service.list_product_enquiries(None).await.unwrap().is_empty());
        assert!(f.notifications.list(false).await.unwrap().0.is_empty());
    }

    #[tokio::test]
    async fn status_filter_and_update() {
        let f = fixture();
        let mut dto = product_enquiry(None, None);
        dto.product_name = Some("SFP module".to_string());
        let enquiry = f.service.submit_product(dto).await.unwrap();

        let updated = f
            .service
            .update_product_enquiry_status(enquiry.id, EnquiryStatus::Resolved)
            .await
            .unwrap();
        assert_eq!(updated.status, EnquiryStatus::Resolved);

        let pending = f
            .service
            .list_product_enquiries(Some(EnquiryStatus::Pending))
            .await
            .unwrap();
        let resolved = f
            .service
            .list_product_enquiries(Some(EnquiryStatus::Resolved))
            .await
            .unwrap();
        assert!(pending.is_empty());
        assert_eq!(resolved.len(), 1);
    }
}
