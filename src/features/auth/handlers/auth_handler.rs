use std::sync::Arc;

use axum::{extract::State, http::header::SET_COOKIE, response::IntoResponse, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::cookie::{clear_session_cookie, session_cookie};
use crate::features::auth::dtos::{AdminSessionDto, LoginRequestDto};
use crate::features::auth::model::AdminIdentity;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

/// Admin login
///
/// Sets the `admin-token` cookie (HttpOnly, SameSite=Strict, 24h) on success.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Logged in, admin-token cookie set", body = ApiResponse<AdminSessionDto>),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<impl IntoResponse> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (identity, token) = service.login(&dto.username, &dto.password).await?;
    let cookie = session_cookie(&token, service.cookie_secure())
        .map_err(|e| AppError::Internal(format!("Failed to build session cookie: {}", e)))?;

    Ok((
        [(SET_COOKIE, cookie)],
        Json(ApiResponse::success(
            Some(AdminSessionDto {
                username: identity.username,
            }),
            Some("Login successful".to_string()),
        )),
    ))
}

/// Admin logout (clears the cookie)
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Cookie cleared")
    ),
    tag = "auth"
)]
pub async fn logout(State(service): State<Arc<AuthService>>) -> Result<impl IntoResponse> {
    let cookie = clear_session_cookie(service.cookie_secure())
        .map_err(|e| AppError::Internal(format!("Failed to build session cookie: {}", e)))?;

    Ok((
        [(SET_COOKIE, cookie)],
        Json(ApiResponse::<()>::success(
            None,
            Some("Logged out".to_string()),
        )),
    ))
}

/// Check the current admin session
#[utoipa::path(
    get,
    path = "/api/admin/verify",
    responses(
        (status = 200, description = "Token is valid", body = ApiResponse<AdminSessionDto>),
        (status = 401, description = "Missing, invalid or expired token")
    ),
    security(("admin_cookie" = []), ("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn verify(identity: AdminIdentity) -> Json<ApiResponse<AdminSessionDto>> {
    Json(ApiResponse::success(
        Some(AdminSessionDto {
            username: identity.username,
        }),
        None,
    ))
}
