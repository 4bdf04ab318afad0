use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::navbar_categories::dtos::{
    CreateNavbarCategoryDto, NavbarCategoryResponseDto, UpdateNavbarCategoryDto,
};
use crate::features::navbar_categories::services::NavbarCategoryService;
use crate::shared::types::ApiResponse;

/// List active navbar categories
#[utoipa::path(
    get,
    path = "/api/navbar-category",
    responses(
        (status = 200, description = "Active navbar categories", body = ApiResponse<Vec<NavbarCategoryResponseDto>>),
    ),
    tag = "navbar-categories"
)]
pub async fn list_navbar_categories(
    State(service): State<Arc<NavbarCategoryService>>,
) -> Result<Json<ApiResponse<Vec<NavbarCategoryResponseDto>>>> {
    let navbars = service.list(true).await?;
    Ok(Json(ApiResponse::collection(navbars)))
}

/// Get an active navbar category by slug
#[utoipa::path(
    get,
    path = "/api/navbar-category/by-slug/{slug}",
    params(
        ("slug" = String, Path, description = "Navbar category slug")
    ),
    responses(
        (status = 200, description = "Navbar category found", body = ApiResponse<NavbarCategoryResponseDto>),
        (status = 404, description = "Navbar category not found")
    ),
    tag = "navbar-categories"
)]
pub async fn get_navbar_category_by_slug(
    State(service): State<Arc<NavbarCategoryService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<NavbarCategoryResponseDto>>> {
    let navbar = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(navbar), None)))
}

/// List all navbar categories (admin)
#[utoipa::path(
    get,
    path = "/api/admin/navbar-category",
    responses(
        (status = 200, description = "All navbar categories", body = ApiResponse<Vec<NavbarCategoryResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_list_navbar_categories(
    State(service): State<Arc<NavbarCategoryService>>,
) -> Result<Json<ApiResponse<Vec<NavbarCategoryResponseDto>>>> {
    let navbars = service.list(false).await?;
    Ok(Json(ApiResponse::collection(navbars)))
}

/// Get a navbar category by id (admin)
#[utoipa::path(
    get,
    path = "/api/admin/navbar-category/{id}",
    params(
        ("id" = Uuid, Path, description = "Navbar category ID")
    ),
    responses(
        (status = 200, description = "Navbar category found", body = ApiResponse<NavbarCategoryResponseDto>),
        (status = 404, description = "Navbar category not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_get_navbar_category(
    State(service): State<Arc<NavbarCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<NavbarCategoryResponseDto>>> {
    let navbar = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(navbar), None)))
}

/// Create a navbar category (admin)
#[utoipa::path(
    post,
    path = "/api/admin/navbar-category",
    request_body = CreateNavbarCategoryDto,
    responses(
        (status = 201, description = "Navbar category created", body = ApiResponse<NavbarCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Name or slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_create_navbar_category(
    State(service): State<Arc<NavbarCategoryService>>,
    AppJson(dto): AppJson<CreateNavbarCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<NavbarCategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let navbar = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(navbar),
            Some("Navbar category created successfully".to_string()),
        )),
    ))
}

/// Update a navbar category (admin)
#[utoipa::path(
    put,
    path = "/api/admin/navbar-category/{id}",
    params(
        ("id" = Uuid, Path, description = "Navbar category ID")
    ),
    request_body = UpdateNavbarCategoryDto,
    responses(
        (status = 200, description = "Navbar category updated", body = ApiResponse<NavbarCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Navbar category not found"),
        (status = 409, description = "Name or slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_update_navbar_category(
    State(service): State<Arc<NavbarCategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateNavbarCategoryDto>,
) -> Result<Json<ApiResponse<NavbarCategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let navbar = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(navbar),
        Some("Navbar category updated successfully".to_string()),
    )))
}

/// Delete a navbar category (admin)
///
/// Categories referencing it are not touched.
#[utoipa::path(
    delete,
    path = "/api/admin/navbar-category/{id}",
    params(
        ("id" = Uuid, Path, description = "Navbar category ID")
    ),
    responses(
        (status = 200, description = "Navbar category deleted"),
        (status = 404, description = "Navbar category not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_delete_navbar_category(
    State(service): State<Arc<NavbarCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Navbar category deleted successfully".to_string()),
    )))
}
