use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::navbar_categories::dtos::{
    CreateNavbarCategoryDto, NavbarCategoryResponseDto, UpdateNavbarCategoryDto,
};
use crate::features::navbar_categories::models::NavbarCategory;
use crate::modules::store::{before_save, Filter, Repo, Value};

/// Service for navbar category operations
pub struct NavbarCategoryService {
    repo: Repo<NavbarCategory>,
}

impl NavbarCategoryService {
    pub fn new(repo: Repo<NavbarCategory>) -> Self {
        Self { repo }
    }

    /// List navbar categories; `active_only` for the public site
    pub async fn list(&self, active_only: bool) -> Result<Vec<NavbarCategoryResponseDto>> {
        let filter = if active_only {
            Filter::new().active_only()
        } else {
            Filter::new()
        };

        let navbars = self.repo.find(filter).await?;
        Ok(navbars.into_iter().map(Into::into).collect())
    }

    /// Get an active navbar category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<NavbarCategoryResponseDto> {
        self.find_active_by_slug(slug).await.map(Into::into)
    }

    pub(crate) async fn find_active_by_slug(&self, slug: &str) -> Result<NavbarCategory> {
        self.repo
            .find_one(
                Filter::new()
                    .eq("slug", Value::Text(slug.to_string()))
                    .active_only(),
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Navbar category '{}' not found", slug)))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<NavbarCategoryResponseDto> {
        self.find(id).await.map(Into::into)
    }

    async fn find(&self, id: Uuid) -> Result<NavbarCategory> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Navbar category {} not found", id)))
    }

    pub async fn create(&self, dto: CreateNavbarCategoryDto) -> Result<NavbarCategoryResponseDto> {
        let now = Utc::now();
        let mut navbar = NavbarCategory {
            id: Uuid::new_v4(),
            name: dto.name.trim().to_string(),
            slug: String::new(),
            description: dto.description.filter(|d| !d.trim().is_empty()),
            display_order: dto.order.unwrap_or(0),
            is_active: dto.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        before_save(&mut navbar, None)?;

        self.repo.insert(&navbar).await?;
        tracing::info!("Created navbar category '{}' ({})", navbar.slug, navbar.id);

        Ok(navbar.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateNavbarCategoryDto,
    ) -> Result<NavbarCategoryResponseDto> {
        let existing = self.find(id).await?;
        let mut navbar = existing.clone();

        if let Some(name) = dto.name {
            navbar.name = name.trim().to_string();
        }
        if let Some(description) = dto.description {
            navbar.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        if let Some(order) = dto.order {
            navbar.display_order = order;
        }
        if let Some(is_active) = dto.is_active {
            navbar.is_active = is_active;
        }
        before_save(&mut navbar, Some(&existing))?;
        navbar.updated_at = Utc::now();

        if !self.repo.update(&navbar).await? {
            return Err(AppError::NotFound(format!("Navbar category {} not found", id)));
        }
        tracing::info!("Updated navbar category '{}' ({})", navbar.slug, navbar.id);

        Ok(navbar.into())
    }

    /// Hard delete; categories pointing at this navbar category are left in place
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Navbar category {} not found", id)));
        }
        tracing::info!("Deleted navbar category {}", id);
        Ok(())
    }
}
