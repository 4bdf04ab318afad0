use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::EnquiryStatus;
use crate::modules::store::{Document, Sort, Value};

/// Database model for a quote request about a product
///
/// `product_name` is captured at submission time so the enquiry stays
/// readable after the product is renamed or deleted.
#[derive(Debug, Clone, FromRow)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct ProductEnquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: Option<i32>,
    pub message: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for ProductEnquiry {
    const COLLECTION: &'static str = "product_enquiries";
    const ENTITY: &'static str = "product enquiry";
    const DEFAULT_SORT: Sort = Sort::Newest;

    fn id(&self) -> Uuid {
        self.id
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Uuid(self.id)),
            ("name", Value::Text(self.name.clone())),
            ("email", Value::Text(self.email.clone())),
            ("phone", Value::OptText(self.phone.clone())),
            ("company", Value::OptText(self.company.clone())),
            ("product_id", Value::OptUuid(self.product_id)),
            ("product_name", Value::Text(self.product_name.clone())),
            ("quantity", Value::OptInt(self.quantity)),
            ("message", Value::OptText(self.message.clone())),
            ("status", Value::Text(self.status.as_str().to_string())),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }
}
