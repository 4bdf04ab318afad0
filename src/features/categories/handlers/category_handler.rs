use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::categories::dtos::{
    CategoryListQuery, CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// List active categories
///
/// Only categories whose navbar category is also active are returned.
#[utoipa::path(
    get,
    path = "/api/category",
    params(CategoryListQuery),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 400, description = "Invalid navbarCategory id")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<CategoryListQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list_public(query.navbar_category).await?;
    Ok(Json(ApiResponse::collection(categories)))
}

/// List active categories of a navbar category
#[utoipa::path(
    get,
    path = "/api/category/by-navbar/{slug}",
    params(
        ("slug" = String, Path, description = "Navbar category slug")
    ),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 404, description = "Navbar category not found")
    ),
    tag = "categories"
)]
pub async fn list_categories_by_navbar(
    State(service): State<Arc<CategoryService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list_by_navbar_slug(&slug).await?;
    Ok(Json(ApiResponse::collection(categories)))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/category/by-slug/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category_by_slug(
    State(service): State<Arc<CategoryService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// List all categories (admin)
#[utoipa::path(
    get,
    path = "/api/admin/category",
    params(CategoryListQuery),
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_list_categories(
    State(service): State<Arc<CategoryService>>,
    AppQuery(query): AppQuery<CategoryListQuery>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list_all(query.navbar_category).await?;
    Ok(Json(ApiResponse::collection(categories)))
}

/// Get category by id (admin)
#[utoipa::path(
    get,
    path = "/api/admin/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None)))
}

/// Create a category (admin)
#[utoipa::path(
    post,
    path = "/api/admin/category",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error or unknown navbar category"),
        (status = 409, description = "Slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Category created successfully".to_string()),
        )),
    ))
}

/// Update a category (admin)
#[utoipa::path(
    put,
    path = "/api/admin/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category updated successfully".to_string()),
    )))
}

/// Delete a category (admin)
///
/// Subcategories and products referencing it are not touched.
#[utoipa::path(
    delete,
    path = "/api/admin/category/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted successfully".to_string()),
    )))
}
