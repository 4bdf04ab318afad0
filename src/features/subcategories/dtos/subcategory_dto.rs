use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::dtos::CategoryRefDto;
use crate::features::categories::models::Category;
use crate::features::navbar_categories::models::NavbarCategory;
use crate::features::subcategories::models::SubCategory;
use crate::shared::validation::IMAGE_URL_REGEX;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Parent category ID
    pub category: Uuid,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(regex(path = *IMAGE_URL_REGEX, message = "Image must be an http(s) URL or a site path"))]
    pub image: Option<String>,

    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub category: Option<Uuid>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// An empty string removes the image
    pub image: Option<String>,

    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryListQuery {
    /// Only subcategories under this category
    pub category: Option<Uuid>,
}

/// Response DTO for subcategory: category populated, including its navbar category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category_id: Uuid,
    /// `null` when the category no longer exists
    pub category: Option<CategoryRefDto>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubCategoryResponseDto {
    pub fn populated(
        s: SubCategory,
        categories: &HashMap<Uuid, Category>,
        navbars: &HashMap<Uuid, NavbarCategory>,
    ) -> Self {
        Self {
            category: categories
                .get(&s.category_id)
                .map(|c| CategoryRefDto::populated(c, navbars)),
            id: s.id,
            name: s.name,
            slug: s.slug,
            category_id: s.category_id,
            description: s.description,
            image: s.image,
            order: s.display_order,
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Populated reference to a subcategory
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryRefDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<&SubCategory> for SubCategoryRefDto {
    fn from(s: &SubCategory) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            slug: s.slug.clone(),
        }
    }
}
