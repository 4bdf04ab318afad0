use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, PasswordHasher, PasswordVerifier};

use crate::features::auth::model::AdminIdentity;

/// Hash a password with Argon2id and a fresh random salt, as a PHC string
pub fn hash_password(password: &str) -> Result<String, String> {
    hash_password_with(&Argon2::default(), password)
}

/// Hash with explicit Argon2 settings; the parameters travel inside the PHC string
pub fn hash_password_with(argon2: &Argon2<'_>, password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| format!("failed to hash password: {}", e))
}

/// Parse a PHC string and make sure it names an Argon2 variant
fn parse_phc(phc: &str) -> Result<PasswordHash<'_>, String> {
    let hash = PasswordHash::new(phc).map_err(|e| format!("invalid password hash: {}", e))?;
    Algorithm::try_from(hash.algorithm)
        .map_err(|_| format!("unsupported password hash algorithm '{}'", hash.algorithm))?;
    Ok(hash)
}

/// Admin credentials injected by configuration.
///
/// Several hashes may be active at once so a new password can be rolled out
/// before the old one is retired.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    username: String,
    hashes: Vec<String>,
}

impl CredentialStore {
    pub fn new(username: impl Into<String>, hashes: &[String]) -> Result<Self, String> {
        let hashes: Vec<String> = hashes.iter().map(|h| h.trim().to_string()).collect();
        for hash in &hashes {
            parse_phc(hash)?;
        }

        if hashes.is_empty() {
            return Err("at least one admin password hash is required".to_string());
        }

        Ok(Self {
            username: username.into(),
            hashes,
        })
    }

    /// Check a username/password pair, trying every active hash
    pub fn authenticate(&self, username: &str, password: &str) -> Option<AdminIdentity> {
        let password_ok = self.hashes.iter().fold(false, |ok, phc| {
            let matches = parse_phc(phc).is_ok_and(|hash| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &hash)
                    .is_ok()
            });
            matches || ok
        });

        (password_ok && username == self.username).then(|| AdminIdentity::new(&self.username))
    }
}
