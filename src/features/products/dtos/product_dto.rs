use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::dtos::CategoryRefDto;
use crate::features::navbar_categories::dtos::NavbarCategoryRefDto;
use crate::features::subcategories::dtos::SubCategoryRefDto;

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`)
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Ordered bullet points
    #[serde(default)]
    pub key_features: Vec<String>,

    /// One to four image URLs; the first is the cover image
    pub images: Vec<String>,

    pub navbar_category: Uuid,

    pub category: Uuid,

    pub subcategory: Option<Uuid>,

    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

/// Request DTO for updating a product; only supplied fields change
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    pub key_features: Option<Vec<String>>,

    pub images: Option<Vec<String>>,

    pub navbar_category: Option<Uuid>,

    pub category: Option<Uuid>,

    /// `null` detaches the product from its subcategory
    #[serde(default, deserialize_with = "explicit_null")]
    #[schema(value_type = Option<Uuid>)]
    pub subcategory: Option<Option<Uuid>>,

    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub navbar_category: Option<Uuid>,
    pub category: Option<Uuid>,
    pub subcategory: Option<Uuid>,
}

/// Response DTO for product with every parent reference populated
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub images: Vec<String>,
    pub navbar_category_id: Uuid,
    pub navbar_category: Option<NavbarCategoryRefDto>,
    pub category_id: Uuid,
    pub category: Option<CategoryRefDto>,
    pub subcategory_id: Option<Uuid>,
    pub subcategory: Option<SubCategoryRefDto>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_missing_and_null_subcategory() {
        let missing: UpdateProductDto = serde_json::from_str(r#"{"name":"X"}"#).unwrap();
        assert_eq!(missing.subcategory, None);

        let cleared: UpdateProductDto = serde_json::from_str(r#"{"subcategory":null}"#).unwrap();
        assert_eq!(cleared.subcategory, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateProductDto =
            serde_json::from_str(&format!(r#"{{"subcategory":"{}"}}"#, id)).unwrap();
        assert_eq!(set.subcategory, Some(Some(id)));
    }
}
