use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::navbar_categories::dtos::NavbarCategoryRefDto;
use crate::features::navbar_categories::models::NavbarCategory;
use crate::shared::validation::IMAGE_URL_REGEX;

/// Request DTO for creating a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    /// Parent navbar category ID
    pub navbar_category: Uuid,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(regex(path = *IMAGE_URL_REGEX, message = "Image must be an http(s) URL or a site path"))]
    pub image: Option<String>,

    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

/// Request DTO for updating a category; only supplied fields change
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub navbar_category: Option<Uuid>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// An empty string removes the image
    pub image: Option<String>,

    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

/// Query params for listing categories
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListQuery {
    /// Only categories under this navbar category
    pub navbar_category: Option<Uuid>,
}

/// Response DTO for category, with its navbar category populated
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub navbar_category_id: Uuid,
    /// `null` when the navbar category no longer exists
    pub navbar_category: Option<NavbarCategoryRefDto>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryResponseDto {
    pub fn populated(c: Category, navbars: &HashMap<Uuid, NavbarCategory>) -> Self {
        Self {
            navbar_category: navbars.get(&c.navbar_category_id).map(Into::into),
            id: c.id,
            name: c.name,
            slug: c.slug,
            navbar_category_id: c.navbar_category_id,
            description: c.description,
            image: c.image,
            order: c.display_order,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Populated reference to a category, one level further up to its navbar category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRefDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub navbar_category: Option<NavbarCategoryRefDto>,
}

impl CategoryRefDto {
    pub fn populated(c: &Category, navbars: &HashMap<Uuid, NavbarCategory>) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
            navbar_category: navbars.get(&c.navbar_category_id).map(Into::into),
        }
    }
}
