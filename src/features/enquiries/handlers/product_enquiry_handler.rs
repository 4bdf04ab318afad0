//! Product enquiry handlers
//!
//! The admin endpoints here answer with the bare document or array rather than
//! the `ApiResponse` envelope; the admin panel reads them that way. Errors
//! still go through `AppError` and carry the error envelope.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::enquiries::dtos::{
    CreateProductEnquiryDto, EnquiryListQuery, ProductEnquiryResponseDto, UpdateEnquiryStatusDto,
};
use crate::features::enquiries::services::EnquiryService;
use crate::shared::types::ApiResponse;

/// Submit a quote request for a product
#[utoipa::path(
    post,
    path = "/api/product-enquiry",
    request_body = CreateProductEnquiryDto,
    responses(
        (status = 201, description = "Enquiry received", body = ApiResponse<ProductEnquiryResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "enquiries"
)]
pub async fn create_product_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppJson(dto): AppJson<CreateProductEnquiryDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductEnquiryResponseDto>>)> {
    let dto = dto.normalized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let enquiry = service.submit_product(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(enquiry),
            Some("Thank you, we will send you a quote soon".to_string()),
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/product-enquiry",
    params(EnquiryListQuery),
    responses(
        (status = 200, description = "Product enquiries, newest first", body = Vec<ProductEnquiryResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_list_product_enquiries(
    State(service): State<Arc<EnquiryService>>,
    AppQuery(query): AppQuery<EnquiryListQuery>,
) -> Result<Json<Vec<ProductEnquiryResponseDto>>> {
    let enquiries = service.list_product_enquiries(query.status).await?;
    Ok(Json(enquiries))
}

#[utoipa::path(
    get,
    path = "/api/admin/product-enquiry/{id}",
    params(
        ("id" = Uuid, Path, description = "Product enquiry ID")
    ),
    responses(
        (status = 200, description = "Product enquiry found", body = ProductEnquiryResponseDto),
        (status = 404, description = "Product enquiry not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_get_product_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ProductEnquiryResponseDto>> {
    let enquiry = service.get_product_enquiry(id).await?;
    Ok(Json(enquiry))
}

#[utoipa::path(
    put,
    path = "/api/admin/product-enquiry/{id}",
    params(
        ("id" = Uuid, Path, description = "Product enquiry ID")
    ),
    request_body = UpdateEnquiryStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ProductEnquiryResponseDto),
        (status = 400, description = "Unknown status or extra fields"),
        (status = 404, description = "Product enquiry not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_update_product_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateEnquiryStatusDto>,
) -> Result<Json<ProductEnquiryResponseDto>> {
    let enquiry = service.update_product_enquiry_status(id, dto.status).await?;
    Ok(Json(enquiry))
}

/// Returns `{"message": ...}` without the envelope
#[utoipa::path(
    delete,
    path = "/api/admin/product-enquiry/{id}",
    params(
        ("id" = Uuid, Path, description = "Product enquiry ID")
    ),
    responses(
        (status = 200, description = "Product enquiry deleted"),
        (status = 404, description = "Product enquiry not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_delete_product_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<serde_json::Value>> {
    service.delete_product_enquiry(id).await?;
    Ok(Json(serde_json::json!({ "message": "Enquiry deleted successfully" })))
}
