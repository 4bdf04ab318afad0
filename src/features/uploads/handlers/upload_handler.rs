use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::uploads::dtos::{DeleteImageDto, UploadImageForm, UploadedImageDto};
use crate::features::uploads::services::UploadService;
use crate::shared::types::ApiResponse;

/// Upload a catalog image
///
/// Accepts multipart/form-data with a single `file` field holding a JPEG, PNG,
/// GIF, WebP or SVG image of at most 5MB.
#[utoipa::path(
    post,
    path = "/api/upload/image",
    tag = "uploads",
    request_body(
        content = UploadImageForm,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 201, description = "Image uploaded", body = ApiResponse<UploadedImageDto>),
        (status = 400, description = "Missing file, wrong type or too large"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Image host failed")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = []))
)]
pub async fn upload_image(
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadedImageDto>>)> {
    let mut file: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            debug!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

        file = Some((data.to_vec(), content_type));
    }

    let (data, content_type) =
        file.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    let uploaded = service.upload_image(data, &content_type).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(uploaded),
            Some("Image uploaded successfully".to_string()),
        )),
    ))
}

/// Delete an uploaded image by its `public_id`
#[utoipa::path(
    delete,
    path = "/api/upload/image",
    tag = "uploads",
    request_body = DeleteImageDto,
    responses(
        (status = 200, description = "Image deleted"),
        (status = 400, description = "Not an uploaded image"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Image host failed")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = []))
)]
pub async fn delete_image(
    State(service): State<Arc<UploadService>>,
    AppJson(dto): AppJson<DeleteImageDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.delete_image(&dto.public_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Image deleted successfully".to_string()),
    )))
}
