use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::enquiries::dtos::{
    ContactEnquiryResponseDto, CreateContactEnquiryDto, EnquiryListQuery, UpdateEnquiryStatusDto,
};
use crate::features::enquiries::services::EnquiryService;
use crate::shared::types::ApiResponse;

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/api/contact-enquiry",
    request_body = CreateContactEnquiryDto,
    responses(
        (status = 201, description = "Enquiry received", body = ApiResponse<ContactEnquiryResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "enquiries"
)]
pub async fn create_contact_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppJson(dto): AppJson<CreateContactEnquiryDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactEnquiryResponseDto>>)> {
    let dto = dto.normalized();
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let enquiry = service.submit_contact(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(enquiry),
            Some("Thank you, we will get back to you soon".to_string()),
        )),
    ))
}

/// List contact enquiries, newest first (admin)
#[utoipa::path(
    get,
    path = "/api/admin/contact-enquiry",
    params(EnquiryListQuery),
    responses(
        (status = 200, description = "Contact enquiries", body = ApiResponse<Vec<ContactEnquiryResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_list_contact_enquiries(
    State(service): State<Arc<EnquiryService>>,
    AppQuery(query): AppQuery<EnquiryListQuery>,
) -> Result<Json<ApiResponse<Vec<ContactEnquiryResponseDto>>>> {
    let enquiries = service.list_contacts(query.status).await?;
    Ok(Json(ApiResponse::collection(enquiries)))
}

#[utoipa::path(
    get,
    path = "/api/admin/contact-enquiry/{id}",
    params(
        ("id" = Uuid, Path, description = "Contact enquiry ID")
    ),
    responses(
        (status = 200, description = "Contact enquiry found", body = ApiResponse<ContactEnquiryResponseDto>),
        (status = 404, description = "Contact enquiry not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_get_contact_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ContactEnquiryResponseDto>>> {
    let enquiry = service.get_contact(id).await?;
    Ok(Json(ApiResponse::success(Some(enquiry), None)))
}

/// Change the status of a contact enquiry (admin)
#[utoipa::path(
    put,
    path = "/api/admin/contact-enquiry/{id}",
    params(
        ("id" = Uuid, Path, description = "Contact enquiry ID")
    ),
    request_body = UpdateEnquiryStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ContactEnquiryResponseDto>),
        (status = 400, description = "Unknown status or extra fields"),
        (status = 404, description = "Contact enquiry not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_update_contact_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateEnquiryStatusDto>,
) -> Result<Json<ApiResponse<ContactEnquiryResponseDto>>> {
    let enquiry = service.update_contact_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(enquiry),
        Some("Enquiry status updated".to_string()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/contact-enquiry/{id}",
    params(
        ("id" = Uuid, Path, description = "Contact enquiry ID")
    ),
    responses(
        (status = 200, description = "Contact enquiry deleted"),
        (status = 404, description = "Contact enquiry not found")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "admin-enquiries"
)]
pub async fn admin_delete_contact_enquiry(
    State(service): State<Arc<EnquiryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_contact(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Enquiry deleted successfully".to_string()),
    )))
}
