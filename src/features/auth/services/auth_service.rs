use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::credentials::CredentialStore;
use crate::features::auth::model::AdminIdentity;
use crate::features::auth::services::TokenService;

/// Admin login against the configured credential store
pub struct AuthService {
    credentials: Arc<CredentialStore>,
    token_service: Arc<TokenService>,
    cookie_secure: bool,
}

impl AuthService {
    pub fn new(
        credentials: CredentialStore,
        token_service: Arc<TokenService>,
        cookie_secure: bool,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            token_service,
            cookie_secure,
        }
    }

    /// Check the credentials and issue a token for the session cookie
    ///
    /// Argon2 verification is CPU bound, so it runs on the blocking pool.
    pub async fn login(&self, username: &str, password: &str) -> Result<(AdminIdentity, String)> {
        let credentials = Arc::clone(&self.credentials);
        let (user, pass) = (username.to_string(), password.to_string());
        let verified = tokio::task::spawn_blocking(move || credentials.authenticate(&user, &pass))
            .await
            .map_err(|e| AppError::Internal(format!("Credential check failed: {}", e)))?;

        let Some(identity) = verified else {
            tracing::warn!("Failed admin login attempt for username '{}'", username);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        };

        let token = self.token_service.issue_token(&identity)?;
        tracing::info!("Admin '{}' logged in", identity.username);

        Ok((identity, token))
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }
}
