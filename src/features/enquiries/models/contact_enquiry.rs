use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::EnquiryStatus;
use crate::modules::store::{Document, Sort, Value};

/// Database model for a contact-form submission
#[derive(Debug, Clone, FromRow)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct ContactEnquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    #[sqlx(try_from = "String")]
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for ContactEnquiry {
    const COLLECTION: &'static str = "contact_enquiries";
    const ENTITY: &'static str = "contact enquiry";
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
            ("subject", Value::OptText(self.subject.clone())),
            ("message", Value::Text(self.message.clone())),
            ("status", Value::Text(self.status.as_str().to_string())),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }
}
