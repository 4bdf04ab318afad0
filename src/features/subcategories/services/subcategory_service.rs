use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::services::category_visible;
use crate::features::navbar_categories::models::NavbarCategory;
use crate::features::subcategories::dtos::{
    CreateSubCategoryDto, SubCategoryResponseDto, UpdateSubCategoryDto,
};
use crate::features::subcategories::models::SubCategory;
use crate::modules::store::{before_save, index_by_id, Filter, Repo, Value};
use crate::shared::validation::optional_image;

/// Parents needed to populate and filter subcategories
struct Parents {
    categories: HashMap<Uuid, Category>,
    navbars: HashMap<Uuid, NavbarCategory>,
}

impl Parents {
    /// Active subcategory under a visible category
    fn visible(&self, sub: &SubCategory) -> bool {
        sub.is_active
            && self
                .categories
                .get(&sub.category_id)
                .is_some_and(|c| category_visible(c, &self.navbars))
    }
}

/// Service for subcategory operations
pub struct SubCategoryService {
    repo: Repo<SubCategory>,
    categories: Repo<Category>,
    navbars: Repo<NavbarCategory>,
}

impl SubCategoryService {
    pub fn new(
        repo: Repo<SubCategory>,
        categories: Repo<Category>,
        navbars: Repo<NavbarCategory>,
    ) -> Self {
        Self {
            repo,
            categories,
            navbars,
        }
    }

    async fn load_parents(&self, subs: &[SubCategory]) -> Result<Parents> {
        let categories =
            index_by_id(&self.categories, subs.iter().map(|s| s.category_id)).await?;
        let navbars = index_by_id(
            &self.navbars,
            categories.values().map(|c| c.navbar_category_id),
        )
        .await?;

        Ok(Parents {
            categories,
            navbars,
        })
    }

    async fn find_populated(
        &self,
        filter: Filter,
        public: bool,
    ) -> Result<Vec<SubCategoryResponseDto>> {
        let subs = self.repo.find(filter).await?;
        let parents = self.load_parents(&subs).await?;

        Ok(subs
            .into_iter()
            .filter(|s| !public || parents.visible(s))
            .map(|s| SubCategoryResponseDto::populated(s, &parents.categories, &parents.navbars))
            .collect())
    }

    fn filter(category: Option<Uuid>, public: bool) -> Filter {
        let mut filter = Filter::new();
        if public {
            filter = filter.active_only();
        }
        if let Some(id) = category {
            filter = filter.eq("category_id", Value::Uuid(id));
        }
        filter
    }

    /// List publicly visible subcategories, optionally under one category
    pub async fn list_public(&self, category: Option<Uuid>) -> Result<Vec<SubCategoryResponseDto>> {
        self.find_populated(Self::filter(category, true), true).await
    }

    /// List publicly visible subcategories of the category with this slug
    pub async fn list_by_category_slug(&self, slug: &str) -> Result<Vec<SubCategoryResponseDto>> {
        let category = self
            .categories
            .find_one(
                Filter::new()
                    .eq("slug", Value::Text(slug.to_string()))
                    .active_only(),
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

        self.list_public(Some(category.id)).await
    }

    /// Get a publicly visible subcategory by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<SubCategoryResponseDto> {
        self.find_populated(
            Filter::new()
                .eq("slug", Value::Text(slug.to_string()))
                .active_only(),
            true,
        )
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("Subcategory '{}' not found", slug)))
    }

    /// List every subcategory (admin)
    pub async fn list_all(&self, category: Option<Uuid>) -> Result<Vec<SubCategoryResponseDto>> {
        self.find_populated(Self::filter(category, false), false)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<SubCategoryResponseDto> {
        let sub = self.find(id).await?;
        self.populate(sub).await
    }

    async fn find(&self, id: Uuid) -> Result<SubCategory> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subcategory {} not found", id)))
    }

    async fn populate(&self, sub: SubCategory) -> Result<SubCategoryResponseDto> {
        let parents = self.load_parents(std::slice::from_ref(&sub)).await?;
        Ok(SubCategoryResponseDto::populated(
            sub,
            &parents.categories,
            &parents.navbars,
        ))
    }

    async fn ensure_category_exists(&self, id: Uuid) -> Result<()> {
        match self.categories.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                id
            ))),
        }
    }

    pub async fn create(&self, dto: CreateSubCategoryDto) -> Result<SubCategoryResponseDto> {
        self.ensure_category_exists(dto.category).await?;

        let now = Utc::now();
        let mut sub = SubCategory {
            id: Uuid::new_v4(),
            name: dto.name.trim().to_string(),
            slug: String::new(),
            category_id: dto.category,
            description: dto.description.filter(|d| !d.trim().is_empty()),
            image: dto.image.filter(|i| !i.trim().is_empty()),
            display_order: dto.order.unwrap_or(0),
            is_active: dto.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        before_save(&mut sub, None)?;

        self.repo.insert(&sub).await?;
        tracing::info!("Created subcategory '{}' ({})", sub.slug, sub.id);

        self.populate(sub).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateSubCategoryDto,
    ) -> Result<SubCategoryResponseDto> {
        let existing = self.find(id).await?;
        let mut sub = existing.clone();

        if let Some(name) = dto.name {
            sub.name = name.trim().to_string();
        }
        if let Some(category) = dto.category {
            if category != existing.category_id {
                self.ensure_category_exists(category).await?;
            }
            sub.category_id = category;
        }
        if let Some(description) = dto.description {
            sub.description = Some(description).filter(|d| !d.trim().is_empty());
        }
        if let Some(image) = dto.image {
            sub.image = optional_image(image)?;
        }
        if let Some(order) = dto.order {
            sub.display_order = order;
        }
        if let Some(is_active) = dto.is_active {
            sub.is_active = is_active;
        }
        before_save(&mut sub, Some(&existing))?;
        sub.updated_at = Utc::now();

        if !self.repo.update(&sub).await? {
            return Err(AppError::NotFound(format!("Subcategory {} not found", id)));
        }
        tracing::info!("Updated subcategory '{}' ({})", sub.slug, sub.id);

        self.populate(sub).await
    }

    /// Hard delete; products pointing at it are left in place
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Subcategory {} not found", id)));
        }
        tracing::info!("Deleted subcategory {}", id);
        Ok(())
    }
}
