use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated administrator, inserted into request extensions by the admin guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminIdentity {
    pub username: String,
}

impl AdminIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Registered claims carried by an admin token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
