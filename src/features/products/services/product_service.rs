use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryRefDto;
use crate::features::categories::models::Category;
use crate::features::navbar_categories::models::NavbarCategory;
use crate::features::products::dtos::{
    CreateProductDto, ProductListQuery, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::models::Product;
use crate::features::subcategories::models::SubCategory;
use crate::modules::store::{before_save, index_by_id, Filter, Repo, Value};
use crate::shared::validation::image_list;

/// Parents needed to populate and filter products
struct Parents {
    navbars: HashMap<Uuid, NavbarCategory>,
    categories: HashMap<Uuid, Category>,
    subcategories: HashMap<Uuid, SubCategory>,
}

impl Parents {
    /// Active product whose navbar category and category are active, and whose
    /// subcategory (when it has one) is active too
    fn visible(&self, product: &Product) -> bool {
        let navbar_ok = self
            .navbars
            .get(&product.navbar_category_id)
            .is_some_and(|n| n.is_active);
        let category_ok = self
            .categories
            .get(&product.category_id)
            .is_some_and(|c| c.is_active);
        let subcategory_ok = product
            .subcategory_id
            .map_or(true, |id| self.subcategories.get(&id).is_some_and(|s| s.is_active));

        product.is_active && navbar_ok && category_ok && subcategory_ok
    }

    fn populate(&self, p: Product) -> ProductResponseDto {
        ProductResponseDto {
            navbar_category: self.navbars.get(&p.navbar_category_id).map(Into::into),
            category: self
                .categories
                .get(&p.category_id)
                .map(|c| CategoryRefDto::populated(c, &self.navbars)),
            subcategory: p
                .subcategory_id
                .and_then(|id| self.subcategories.get(&id))
                .map(Into::into),
            id: p.id,
            name: p.name,
            slug: p.slug,
            description: p.description,
            key_features: p.key_features,
            images: p.images,
            navbar_category_id: p.navbar_category_id,
            category_id: p.category_id,
            subcategory_id: p.subcategory_id,
            order: p.display_order,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

fn clean_features(features: Vec<String>) -> Vec<String> {
    features
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

fn clean_images(images: Vec<String>) -> Result<Vec<String>> {
    let images: Vec<String> = images.into_iter().map(|i| i.trim().to_string()).collect();
    image_list(&images)?;
    Ok(images)
}

/// Service for product operations
pub struct ProductService {
    repo: Repo<Product>,
    navbars: Repo<NavbarCategory>,
    categories: Repo<Category>,
    subcategories: Repo<SubCategory>,
}

impl ProductService {
    pub fn new(
        repo: Repo<Product>,
        navbars: Repo<NavbarCategory>,
        categories: Repo<Category>,
        subcategories: Repo<SubCategory>,
    ) -> Self {
        Self {
            repo,
            navbars,
            categories,
            subcategories,
        }
    }

    async fn load_parents(&self, products: &[Product]) -> Result<Parents> {
        let categories =
            index_by_id(&self.categories, products.iter().map(|p| p.category_id)).await?;
        // Category refs carry their own navbar category, which may differ from the product's
        let navbars = index_by_id(
            &self.navbars,
            products
                .iter()
                .map(|p| p.navbar_category_id)
                .chain(categories.values().map(|c| c.navbar_category_id)),
        )
        .await?;
        let subcategories = index_by_id(
            &self.subcategories,
            products.iter().filter_map(|p| p.subcategory_id),
        )
        .await?;

        Ok(Parents {
            navbars,
            categories,
            subcategories,
        })
    }

    async fn find_populated(&self, filter: Filter, public: bool) -> Result<Vec<ProductResponseDto>> {
        let products = self.repo.find(filter).await?;
        let parents = self.load_parents(&products).await?;

        Ok(products
            .into_iter()
            .filter(|p| !public || parents.visible(p))
            .map(|p| parents.populate(p))
            .collect())
    }

    fn filter(query: &ProductListQuery, public: bool) -> Filter {
        let mut filter = Filter::new();
        if public {
            filter = filter.active_only();
        }
        if let Some(id) = query.navbar_category {
            filter = filter.eq("navbar_category_id", Value::Uuid(id));
        }
        if let Some(id) = query.category {
            filter = filter.eq("category_id", Value::Uuid(id));
        }
        if let Some(id) = query.subcategory {
            filter = filter.eq("subcategory_id", Value::Uuid(id));
        }
        filter
    }

    /// List publicly visible products, optionally narrowed by parent ids
    pub async fn list_public(&self, query: &ProductListQuery) -> Result<Vec<ProductResponseDto>> {
        self.find_populated(Self::filter(query, true), true).await
    }

    fn by_slug(slug: &str) -> Filter {
        Filter::new()
            .eq("slug", Value::Text(slug.to_string()))
            .active_only()
    }

    pub async fn list_by_navbar_slug(&self, slug: &str) -> Result<Vec<ProductResponseDto>> {
        let navbar = self
            .navbars
            .find_one(Self::by_slug(slug))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Navbar category '{}' not found", slug)))?;

        self.list_public(&ProductListQuery {
            navbar_category: Some(navbar.id),
            ..Default::default()
        })
        .await
    }

    /// Every visible product of the category, with or without a subcategory
    pub async fn list_by_category_slug(&self, slug: &str) -> Result<Vec<ProductResponseDto>> {
        let category = self
            .categories
            .find_one(Self::by_slug(slug))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

        self.list_public(&ProductListQuery {
            category: Some(category.id),
            ..Default::default()
        })
        .await
    }

    pub async fn list_by_subcategory_slug(&self, slug: &str) -> Result<Vec<ProductResponseDto>> {
        let subcategory = self
            .subcategories
            .find_one(Self::by_slug(slug))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subcategory '{}' not found", slug)))?;

        self.list_public(&ProductListQuery {
            subcategory: Some(subcategory.id),
            ..Default::default()
        })
        .await
    }

    /// Get a publicly visible product by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<ProductResponseDto> {
        self.find_populated(Self::by_slug(slug), true)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", slug)))
    }

    /// List every product (admin)
    pub async fn list_all(&self, query: &ProductListQuery) -> Result<Vec<ProductResponseDto>> {
        self.find_populated(Self::filter(query, false), false).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = self.find(id).await?;
        self.populate(product).await
    }

    async fn find(&self, id: Uuid) -> Result<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    async fn populate(&self, product: Product) -> Result<ProductResponseDto> {
        let parents = self.load_parents(std::slice::from_ref(&product)).await?;
        Ok(parents.populate(product))
    }

    async fn ensure_parents_exist(
        &self,
        navbar_category: Uuid,
        category: Uuid,
        subcategory: Option<Uuid>,
    ) -> Result<()> {
        if self.navbars.find_by_id(navbar_category).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Navbar category {} does not exist",
                navbar_category
            )));
        }
        if self.categories.find_by_id(category).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                category
            )));
        }
        if let Some(id) = subcategory {
            if self.subcategories.find_by_id(id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Subcategory {} does not exist",
                    id
                )));
            }
        }
        Ok(())
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let images = clean_images(dto.images)?;
        self.ensure_parents_exist(dto.navbar_category, dto.category, dto.subcategory)
            .await?;

        let now = Utc::now();
        let mut product = Product {
            id: Uuid::new_v4(),
            name: dto.name.trim().to_string(),
            slug: String::new(),
            description: dto.description.trim().to_string(),
            key_features: clean_features(dto.key_features),
            images,
            navbar_category_id: dto.navbar_category,
            category_id: dto.category,
            subcategory_id: dto.subcategory,
            display_order: dto.order.unwrap_or(0),
            is_active: dto.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        before_save(&mut product, None)?;

        self.repo.insert(&product).await?;
        tracing::info!("Created product '{}' ({})", product.slug, product.id);

        self.populate(product).await
    }

    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        let existing = self.find(id).await?;
        let mut product = existing.clone();

        if let Some(name) = dto.name {
            product.name = name.trim().to_string();
        }
        if let Some(description) = dto.description {
            product.description = description.trim().to_string();
        }
        if let Some(features) = dto.key_features {
            product.key_features = clean_features(features);
        }
        if let Some(images) = dto.images {
            product.images = clean_images(images)?;
        }
        if let Some(navbar_category) = dto.navbar_category {
            product.navbar_category_id = navbar_category;
        }
        if let Some(category) = dto.category {
            product.category_id = category;
        }
        if let Some(subcategory) = dto.subcategory {
            product.subcategory_id = subcategory;
        }
        if product.navbar_category_id != existing.navbar_category_id
            || product.category_id != existing.category_id
            || (product.subcategory_id != existing.subcategory_id
                && product.subcategory_id.is_some())
        {
            self.ensure_parents_exist(
                product.navbar_category_id,
                product.category_id,
                product.subcategory_id,
            )
            .await?;
        }
        if let Some(order) = dto.order {
            product.display_order = order;
        }
        if let Some(is_active) = dto.is_active {
            product.is_active = is_active;
        }
        before_save(&mut product, Some(&existing))?;
        product.updated_at = Utc::now();

        if !self.repo.update(&product).await? {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }
        tracing::info!("Updated product '{}' ({})", product.slug, product.id);

        self.populate(product).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Product {} not found", id)));
        }
        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}
