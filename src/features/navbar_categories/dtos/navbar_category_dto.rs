use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::navbar_categories::models::NavbarCategory;

/// Request DTO for creating a navbar category
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNavbarCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Display position, ascending (default 0)
    pub order: Option<i32>,

    /// Defaults to true
    pub is_active: Option<bool>,
}

/// Request DTO for updating a navbar category; only supplied fields change
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNavbarCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    /// An empty string clears the description
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub order: Option<i32>,

    pub is_active: Option<bool>,
}

/// Response DTO for navbar category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavbarCategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NavbarCategory> for NavbarCategoryResponseDto {
    fn from(n: NavbarCategory) -> Self {
        Self {
            id: n.id,
            name: n.name,
            slug: n.slug,
            description: n.description,
            order: n.display_order,
            is_active: n.is_active,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

/// Populated reference to a navbar category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavbarCategoryRefDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl From<&NavbarCategory> for NavbarCategoryRefDto {
    fn from(n: &NavbarCategory) -> Self {
        Self {
            id: n.id,
            name: n.name.clone(),
            slug: n.slug.clone(),
        }
    }
}
