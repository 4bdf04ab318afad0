use crate::core::error::AppError;
use crate::features::auth::cookie::{extract_bearer_token, extract_cookie_token};
use crate::features::auth::TokenService;
use crate::shared::constants::{ADMIN_DASHBOARD_PATH, ADMIN_LOGIN_PATH};
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        // Parse origins into HeaderValue
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

/// Guard for `/api/admin/*` and `/api/upload/*`
///
/// Accepts the `admin-token` cookie or an `Authorization: Bearer` header and
/// inserts the verified [`AdminIdentity`](crate::features::auth::AdminIdentity)
/// into request extensions.
pub async fn admin_api_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_cookie_token(req.headers())
        .or_else(|| extract_bearer_token(req.headers()))
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let identity = tokens.verify_token(&token)?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Guard for the admin pages
///
/// Dashboard pages without a valid cookie redirect to the login page, and the
/// login page with a valid cookie redirects to the dashboard.
pub async fn admin_pages_middleware(
    State(tokens): State<Arc<TokenService>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    let authenticated = extract_cookie_token(req.headers())
        .is_some_and(|token| tokens.verify_token(&token).is_ok());

    if path.starts_with(ADMIN_DASHBOARD_PATH) && !authenticated {
        return Redirect::temporary(ADMIN_LOGIN_PATH).into_response();
    }

    if path.trim_end_matches('/') == ADMIN_LOGIN_PATH && authenticated {
        return Redirect::temporary(ADMIN_DASHBOARD_PATH).into_response();
    }

    next.run(req).await
}
