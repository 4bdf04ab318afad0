//! HS256 token signing
//!
//! Two interchangeable backends produce and check the same compact JWS:
//! [`JsonWebTokenSigner`] delegates to the `jsonwebtoken` crate, while
//! [`HmacTokenSigner`] assembles the three segments by hand. Signers only
//! check structure and signature; expiry is enforced by the token service
//! against its own clock. Admin tokens carry no audience, so both backends
//! refuse any token that names one.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use sha2::Sha256;
use std::sync::Arc;
use thiserror::Error;

use crate::core::config::TokenBackend;
use crate::features::auth::model::TokenClaims;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError>;

    /// Check the signature and decode the claims. Does not look at `exp`.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// Build the signer selected by configuration
pub fn signer_for(backend: TokenBackend, secret: &[u8]) -> Arc<dyn TokenSigner> {
    match backend {
        TokenBackend::JsonWebToken => Arc::new(JsonWebTokenSigner::new(secret)),
        TokenBackend::Hmac => Arc::new(HmacTokenSigner::new(secret)),
    }
}

pub struct JsonWebTokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JsonWebTokenSigner {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenSigner for JsonWebTokenSigner {
    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        use jsonwebtoken::errors::ErrorKind;

        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm => TokenError::UnsupportedAlgorithm,
                _ => TokenError::Malformed,
            })
    }
}

#[derive(Deserialize)]
struct JoseHeader {
    alg: String,
}

/// Registered claims that are never issued here
#[derive(Deserialize)]
struct UnexpectedClaims {
    aud: Option<serde_json::Value>,
}

pub struct HmacTokenSigner {
    secret: Vec<u8>,
}

impl HmacTokenSigner {
    const HEADER: &'static str = r#"{"alg":"HS256","typ":"JWT"}"#;

    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: secret.to_vec(),
        }
    }

    fn mac(&self, signing_input: &str) -> Result<HmacSha256, TokenError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| TokenError::Signing(e.to_string()))?;
        mac.update(signing_input.as_bytes());
        Ok(mac)
    }
}

impl TokenSigner for HmacTokenSigner {
    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let payload =
            serde_json::to_vec(claims).map_err(|e| TokenError::Signing(e.to_string()))?;
        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(Self::HEADER),
            URL_SAFE_NO_PAD.encode(payload)
        );
        let signature = self.mac(&signing_input)?.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            signing_input,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (signing_input, signature) = token.rsplit_once('.').ok_or(TokenError::Malformed)?;
        let (header, payload) = signing_input
            .split_once('.')
            .ok_or(TokenError::Malformed)?;
        if payload.contains('.') {
            return Err(TokenError::Malformed);
        }

        let header_bytes = URL_SAFE_NO_PAD
            .decode(header)
            .map_err(|_| TokenError::Malformed)?;
        let header: JoseHeader =
            serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;
        if header.alg != "HS256" {
            return Err(TokenError::UnsupportedAlgorithm);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| TokenError::Malformed)?;
        self.mac(signing_input)?
            .verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let unexpected: UnexpectedClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;
        if unexpected.aud.is_some() {
            return Err(TokenError::Malformed);
        }
        serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)
    }
}
