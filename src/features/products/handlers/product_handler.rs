use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::products::dtos::{
    CreateProductDto, ProductListQuery, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::ApiResponse;

/// List visible products
///
/// A product is visible when it is active and its navbar category, category and
/// subcategory (if any) are active.
#[utoipa::path(
    get,
    path = "/api/product",
    params(ProductListQuery),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 400, description = "Invalid filter id")
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<ProductListQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list_public(&query).await?;
    Ok(Json(ApiResponse::collection(products)))
}

#[utoipa::path(
    get,
    path = "/api/product/by-navbar/{slug}",
    params(
        ("slug" = String, Path, description = "Navbar category slug")
    ),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 404, description = "Navbar category not found")
    ),
    tag = "products"
)]
pub async fn list_products_by_navbar(
    State(service): State<Arc<ProductService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list_by_navbar_slug(&slug).await?;
    Ok(Json(ApiResponse::collection(products)))
}

#[utoipa::path(
    get,
    path = "/api/product/by-category/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 404, description = "Category not found")
    ),
    tag = "products"
)]
pub async fn list_products_by_category(
    State(service): State<Arc<ProductService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list_by_category_slug(&slug).await?;
    Ok(Json(ApiResponse::collection(products)))
}

#[utoipa::path(
    get,
    path = "/api/product/by-subcategory/{slug}",
    params(
        ("slug" = String, Path, description = "Subcategory slug")
    ),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "products"
)]
pub async fn list_products_by_subcategory(
    State(service): State<Arc<ProductService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list_by_subcategory_slug(&slug).await?;
    Ok(Json(ApiResponse::collection(products)))
}

/// Get product by slug
#[utoipa::path(
    get,
    path = "/api/product/by-slug/{slug}",
    params(
        ("slug" = String, Path, description = "Product slug")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    tag = "products"
)]
pub async fn get_product_by_slug(
    State(service): State<Arc<ProductService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(product), None)))
}

/// List all products (admin)
#[utoipa::path(
    get,
    path = "/api/admin/product",
    params(ProductListQuery),
    responses(
        (status = 200, description = "All products", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_list_products(
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<ProductListQuery>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list_all(&query).await?;
    Ok(Json(ApiResponse::collection(products)))
}

#[utoipa::path(
    get,
    path = "/api/admin/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_get_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None)))
}

/// Create a product (admin)
#[utoipa::path(
    post,
    path = "/api/admin/product",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown parent"),
        (status = 409, description = "Slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(product),
            Some("Product created successfully".to_string()),
        )),
    ))
}

/// Update a product (admin)
///
/// Sending `"subcategory": null` detaches the product from its subcategory.
#[utoipa::path(
    put,
    path = "/api/admin/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or unknown parent"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Slug already taken")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_update_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(product),
        Some("Product updated successfully".to_string()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/product/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-catalog"
)]
pub async fn admin_delete_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Product deleted successfully".to_string()),
    )))
}
