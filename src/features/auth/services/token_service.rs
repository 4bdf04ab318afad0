use chrono::Utc;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AdminIdentity, TokenClaims};
use crate::features::auth::signer::{TokenError, TokenSigner};
use crate::shared::constants::ADMIN_TOKEN_TTL_SECS;

/// Issues and verifies admin tokens (`sub`, `iat`, `exp = iat + 24h`)
pub struct TokenService {
    signer: Arc<dyn TokenSigner>,
}

impl TokenService {
    pub fn new(signer: Arc<dyn TokenSigner>) -> Self {
        Self { signer }
    }

    pub fn issue_token(&self, identity: &AdminIdentity) -> Result<String> {
        self.issue_token_at(identity, Utc::now().timestamp())
    }

    pub fn issue_token_at(&self, identity: &AdminIdentity, issued_at: i64) -> Result<String> {
        let claims = TokenClaims {
            sub: identity.username.clone(),
            iat: issued_at,
            exp: issued_at + ADMIN_TOKEN_TTL_SECS,
        };

        self.signer.sign(&claims).map_err(|e| {
            tracing::error!("Failed to sign admin token: {}", e);
            AppError::Internal(e.to_string())
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<AdminIdentity> {
        self.verify_token_at(token, Utc::now().timestamp())
    }

    /// Verify against an explicit clock; a token is rejected once `exp < now`
    pub fn verify_token_at(&self, token: &str, now: i64) -> Result<AdminIdentity> {
        let claims = self
            .signer
            .verify(token)
            .and_then(|claims| {
                if claims.exp < now {
                    Err(TokenError::Expired)
                } else {
                    Ok(claims)
                }
            })
            .map_err(|e| {
                tracing::debug!("Rejected admin token: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })?;

        Ok(AdminIdentity::new(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TokenBackend;
    use crate::features::auth::signer::signer_for;

    const SECRET: &[u8] = b"token-service-test-secret-32-bytes!!";

    fn services() -> Vec<TokenService> {
        [TokenBackend::JsonWebToken, TokenBackend::Hmac]
            .into_iter()
            .map(|backend| TokenService::new(signer_for(backend, SECRET)))
            .collect()
    }

    #[test]
    fn token_verifies_until_it_expires() {
        let admin = AdminIdentity::new("admin");
        let issued_at = 1_700_000_000;

        for service in services() {
            let token = service.issue_token_at(&admin, issued_at).unwrap();

            assert_eq!(service.verify_token_at(&token, issued_at).unwrap(), admin);
            assert_eq!(
                service
                    .verify_token_at(&token, issued_at + ADMIN_TOKEN_TTL_SECS - 1)
                    .unwrap(),
                admin
            );
            assert_eq!(
                service
                    .verify_token_at(&token, issued_at + ADMIN_TOKEN_TTL_SECS)
                    .unwrap(),
                admin
            );
            assert!(matches!(
                service.verify_token_at(&token, issued_at + ADMIN_TOKEN_TTL_SECS + 1),
                Err(AppError::Unauthorized(_))
            ));
        }
    }

    #[test]
    fn freshly_issued_token_verifies_now() {
        for service in services() {
            let token = service.issue_token(&AdminIdentity::new("ops")).unwrap();
            assert_eq!(service.verify_token(&token).unwrap().username, "ops");
        }
    }

    #[test]
    fn garbage_is_unauthorized() {
        for service in services() {
            assert!(matches!(
                service.verify_token("definitely.not.valid"),
                Err(AppError::Unauthorized(_))
            ));
        }
    }
}
