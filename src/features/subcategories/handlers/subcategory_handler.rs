use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::subcategories::dtos::{
    CreateSubCategoryDto, SubCategoryListQuery, SubCategoryResponseDto, UpdateSubCategoryDto,
};
use crate::features::subcategories::services::SubCategoryService;
use crate::shared::types::ApiResponse;

/// List active subcategories
///
/// Only subcategories whose category and navbar category are active are returned.
#[utoipa::path(
    get,
    path = "/api/subcategory",
    params(SubCategoryListQuery),
    responses(
        (status = 200, description = "List of subcategories", body = ApiResponse<Vec<SubCategoryResponseDto>>),
        (status = 400, description = "Invalid category id")
    ),
    tag = "subcategories"
)]
pub async fn list_subcategories(
    State(service): State<Arc<SubCategoryService>>,
    AppQuery(query): AppQuery<SubCategoryListQuery>,
) -> Result<Json<ApiResponse<Vec<SubCategoryResponseDto>>>> {
    let subcategories = service.list_public(query.category).await?;
    Ok(Json(ApiResponse::collection(subcategories)))
}

/// List active subcategories of a category
#[utoipa::path(
    get,
    path = "/api/subcategory/by-category/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "List of subcategories", body = ApiResponse<Vec<SubCategoryResponseDto>>),
        (status = 404, description = "Category not found")
    ),
    tag = "subcategories"
)]
pub async fn list_subcategories_by_category(
    State(service): State<Arc<SubCategoryService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<SubCategoryResponseDto>>>> {
    let subcategories = service.list_by_category_slug(&slug).await?;
    Ok(Json(ApiResponse::collection(subcategories)))
}

/// Get subcategory by slug
#[utoipa::path(
    get,
    path = "/api/subcategory/by-slug/{slug}",
    params(
        ("slug" = String, Path, description = "Subcategory slug")
    ),
    responses(
        (status = 200, description = "Subcategory found", body = ApiResponse<SubCategoryResponseDto>),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories"
)]
pub async fn get_subcategory_by_slug(
    State(service): State<Arc<SubCategoryService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<SubCategoryResponseDto>>> {
    let subcategory = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(subcategory), None)))
}

/// List all subcategories (admin)
#[utoipa::path(
    get,
    path = "/api/admin/subcategory",
    params(SubCategoryListQuery),
    responses(
        (status = 200, description = "All subcategories", body = ApiResponse<Vec<SubCategoryResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_list_subcategories(
    State(service): State<Arc<SubCategoryService>>,
    AppQuery(query): AppQuery<SubCategoryListQuery>,
) -> Result<Json<ApiResponse<Vec<SubCategoryResponseDto>>>> {
    let subcategories = service.list_all(query.category).await?;
    Ok(Json(ApiResponse::collection(subcategories)))
}

/// Get subcategory by id (admin)
#[utoipa::path(
    get,
    path = "/api/admin/subcategory/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory found", body = ApiResponse<SubCategoryResponseDto>),
        (status = 404, description = "Subcategory not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_get_subcategory(
    State(service): State<Arc<SubCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<SubCategoryResponseDto>>> {
    let subcategory = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(subcategory), None)))
}

/// Create a subcategory (admin)
#[utoipa::path(
    post,
    path = "/api/admin/subcategory",
    request_body = CreateSubCategoryDto,
    responses(
        (status = 201, description = "Subcategory created", body = ApiResponse<SubCategoryResponseDto>),
        (status = 400, description = "Validation error or unknown category"),
        (status = 409, description = "Slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_create_subcategory(
    State(service): State<Arc<SubCategoryService>>,
    AppJson(dto): AppJson<CreateSubCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubCategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subcategory = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(subcategory),
            Some("Subcategory created successfully".to_string()),
        )),
    ))
}

/// Update a subcategory (admin)
#[utoipa::path(
    put,
    path = "/api/admin/subcategory/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    request_body = UpdateSubCategoryDto,
    responses(
        (status = 200, description = "Subcategory updated", body = ApiResponse<SubCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Subcategory not found"),
        (status = 409, description = "Slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_update_subcategory(
    State(service): State<Arc<SubCategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateSubCategoryDto>,
) -> Result<Json<ApiResponse<SubCategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subcategory = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(subcategory),
        Some("Subcategory updated successfully".to_string()),
    )))
}

/// Delete a subcategory (admin)
///
/// Products referencing it are not touched.
#[utoipa::path(
    delete,
    path = "/api/admin/subcategory/{id}",
    params(
        ("id" = Uuid, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory deleted"),
        (status = 404, description = "Subcategory not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_delete_subcategory(
    State(service): State<Arc<SubCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Subcategory deleted successfully".to_string()),
    )))
}
