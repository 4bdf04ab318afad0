use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::features::navbar_categories::models::NavbarCategory;
use crate::modules::store::{before_save, index_by_id, Filter, Repo, Value};
use crate::shared::validation::optional_image;

/// A category is publicly visible when it and its navbar category are active
pub(crate) fn category_visible(
    category: &Category,
    navbars: &HashMap<Uuid, NavbarCategory>,
) -> bool {
    category.is_active
        && navbars
            .get(&category.navbar_category_id)
            .is_some_and(|navbar| navbar.is_active)
}

/// Service for category operations
pub struct CategoryService {
    repo: Repo<Category>,
    navbars: Repo<NavbarCategory>,
}

impl CategoryService {
    pub fn new(repo: Repo<Category>, navbars: Repo<NavbarCategory>) -> Self {
        Self { repo, navbars }
    }

    /// Find categories and populate their navbar category
    async fn find_populated(
        &self,
        filter: Filter,
        public: bool,
    ) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repo.find(filter).await?;
        let navbars = index_by_id(
            &self.navbars,
            categories.iter().map(|c| c.navbar_category_id),
        )
        .await?;

        Ok(categories
            .into_iter()
            .filter(|c| !public || category_visible(c, &navbars))
            .map(|c| CategoryResponseDto::populated(c, &navbars))
            .collect())
    }

    fn filter(navbar_category: Option<Uuid>, public: bool) -> Filter {
        let mut filter = Filter::new();
        if public {
            filter = filter.active_only();
        }
        if let Some(id) = navbar_category {
            filter = filter.eq("navbar_category_id", Value::Uuid(id));
        }
        filter
    }

    /// List publicly visible categories, optionally under one navbar category
    pub async fn list_public(
        &self,
        navbar_category: Option<Uuid>,
    ) -> Result<Vec<CategoryResponseDto>> {
        self.find_populated(Self::filter(navbar_category, true), true)
            .await
    }

    /// List publicly visible categories under the navbar category with this slug
    pub async fn list_by_navbar_slug(&self, slug: &str) -> Result<Vec<CategoryResponseDto>> {
        let navbar = self
            .navbars
            .find_one(
                Filter::new()
                    .eq("slug", Value::Text(slug.to_string()))
                    .active_only(),
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Navbar category '{}' not found", slug)))?;

        self.list_public(Some(navbar.id)).await
    }

    /// Get a publicly visible category by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryResponseDto> {
        self.find_populated(
            Filter::new()
                .eq("slug", Value::Text(slug.to_string()))
                .active_only(),
            true,
        )
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// List every category (admin)
    pub async fn list_all(&self, navbar_category: Option<Uuid>) -> Result<Vec<CategoryResponseDto>> {
        self.find_populated(Self::filter(navbar_category, false), false)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = self.find(id).await?;
        self.populate(category).await
    }

    async fn find(&self, id: Uuid) -> Result<Category> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    async fn populate(&self, category: Category) -> Result<CategoryResponseDto> {
        let navbars = index_by_id(&self.navbars, [category.navbar_category_id]).await?;
        Ok(CategoryResponseDto::populated(category, &navbars))
    }

    async fn ensure_navbar_exists(&self, id: Uuid) -> Result<()> {
        match self.navbars.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Navbar category {} does not exist",
                id
            ))),
        }
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        self.ensure_navbar_exists(dto.navbar_category).await?;

        let now = Utc::now();
        let mut category = Category {
            id: Uuid::new_v4(),
            name: dto.name.trim().to_string(),
            slug: String::new(),
            navbar_category_id: dto.navbar_category,
            description: dto.description.filter(|d| !d.trim().is_empty()),
            image: dto.image.filter(|i| !i.trim().is_empty()),
            display_order: dto.order.unwrap_or(0),
            is_active: dto.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        before_save(&mut category, None)?;

        self.repo.insert(&category).await?;
        tracing::info!("Created category '{}' ({})", category.slug, category.id);

        self.populate(category).await
    }

    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let existing = self.find(id).await?;
        let mut category = existing.clone();

        if let Some(name) = dto.name {
            category.name = name.trim().to_string();
        }
        if let Some(navbar_category) = dto.navbar_category {
            if navbar_category != existing.navbar_category_id {
                self.ensure_navbar_exists(navbar_category).await?;
            }
            category.navbar_category_id = navbar_category;
        }
        if let Some(description) = dto.description {
            category.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        if let Some(image) = dto.image {
            category.image = optional_image(image)?;
        }
        if let Some(order) = dto.order {
            category.display_order = order;
        }
        if let Some(is_active) = dto.is_active {
            category.is_active = is_active;
        }
        before_save(&mut category, Some(&existing))?;
        category.updated_at = Utc::now();

        if !self.repo.update(&category).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        tracing::info!("Updated category '{}' ({})", category.slug, category.id);

        self.populate(category).await
    }

    /// Hard delete; subcategories and products pointing at it are left in place
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        tracing::info!("Deleted category {}", id);
        Ok(())
    }
}
