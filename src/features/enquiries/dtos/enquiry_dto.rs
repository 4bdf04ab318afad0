use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::enquiries::models::{ContactEnquiry, EnquiryStatus, ProductEnquiry};
use crate::shared::validation::PHONE_REGEX;

/// Trim a free-text form field, treating blank input as absent
fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Request DTO for the public contact form
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactEnquiryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Company must be at most 200 characters"))]
    pub company: Option<String>,

    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

impl CreateContactEnquiryDto {
    /// Trim every field and drop blank optional ones, ahead of validation
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: blank_to_none(self.phone),
            company: blank_to_none(self.company),
            subject: blank_to_none(self.subject),
            message: self.message.trim().to_string(),
        }
    }
}

/// Request DTO for a product quote request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductEnquiryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Company must be at most 200 characters"))]
    pub company: Option<String>,

    /// Product the enquiry is about
    pub product: Option<Uuid>,

    /// Required unless `product` names a known product
    #[validate(length(max = 200, message = "Product name must be at most 200 characters"))]
    pub product_name: Option<String>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,

    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: Option<String>,
}

impl CreateProductEnquiryDto {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: blank_to_none(self.phone),
            company: blank_to_none(self.company),
            product_name: blank_to_none(self.product_name),
            message: blank_to_none(self.message),
            ..self
        }
    }
}

/// Status change; the only edit allowed on a submitted enquiry
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEnquiryStatusDto {
    pub status: EnquiryStatus,
}

/// Query params for the admin enquiry lists
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct EnquiryListQuery {
    /// Only enquiries in this state
    pub status: Option<EnquiryStatus>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactEnquiryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactEnquiry> for ContactEnquiryResponseDto {
    fn from(e: ContactEnquiry) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            phone: e.phone,
            company: e.company,
            subject: e.subject,
            message: e.message,
            status: e.status,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductEnquiryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: Option<i32>,
    pub message: Option<String>,
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductEnquiry> for ProductEnquiryResponseDto {
    fn from(e: ProductEnquiry) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            phone: e.phone,
            company: e.company,
            product_id: e.product_id,
            product_name: e.product_name,
            quantity: e.quantity,
            message: e.message,
            status: e.status,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_form_rejects_bad_email_and_phone() {
        let dto: CreateContactEnquiryDto = serde_json::from_value(serde_json::json!({
            "name": "Budi",
            "email": "not-an-email",
            "phone": "call me",
            "message": "Need a quote"
        }))
        .unwrap();

        let errors = dto.normalized().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn blank_optional_fields_are_dropped_before_validation() {
        let dto: CreateContactEnquiryDto = serde_json::from_value(serde_json::json!({
            "name": "  Budi ",
            "email": "budi@example.com",
            "phone": "   ",
            "company": "",
            "message": "Need a quote"
        }))
        .unwrap();

        let dto = dto.normalized();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.name, "Budi");
        assert_eq!(dto.phone, None);
        assert_eq!(dto.company, None);
    }

    #[test]
    fn status_update_accepts_nothing_but_status() {
        let ok: UpdateEnquiryStatusDto =
            serde_json::from_value(serde_json::json!({ "status": "contacted" })).unwrap();
        assert_eq!(ok.status, EnquiryStatus::Contacted);

        assert!(serde_json::from_value::<UpdateEnquiryStatusDto>(serde_json::json!({
            "status": "resolved",
            "email": "other@example.com"
        }))
        .is_err());
        assert!(serde_json::from_value::<UpdateEnquiryStatusDto>(
            serde_json::json!({ "status": "closed" })
        )
        .is_err());
    }
}
