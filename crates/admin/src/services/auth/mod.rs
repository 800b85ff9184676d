//! Admin authentication.
//!
//! A single admin account, checked with Argon2id. The gate in front of the
//! console only needs a yes/no answer, so callers go through the
//! [`Authenticator`] trait and never see the hash.

mod error;

pub use error::AuthError;

use std::sync::{PoisonError, RwLock};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{AdminConfig, AdminCredential};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Credential check guarding the admin console.
pub trait Authenticator: Send + Sync {
    /// Whether `username`/`password` identify the admin.
    fn authenticate(&self, username: &str, password: &str) -> bool;

    /// Replace the admin password for the lifetime of the process.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password is too short and
    /// `AuthError::PasswordHash` if hashing fails.
    fn change_password(&self, new_password: &SecretString) -> Result<(), AuthError>;
}

/// Single-account authenticator backed by an Argon2id hash.
pub struct PasswordAuthenticator {
    username: String,
    password_hash: RwLock<String>,
}

impl std::fmt::Debug for PasswordAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordAuthenticator")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl PasswordAuthenticator {
    /// Build the authenticator from the admin configuration.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedHash` if a configured hash is not a valid
    /// PHC string, or `AuthError::PasswordHash` if a plain password cannot be
    /// hashed.
    pub fn from_config(config: &AdminConfig) -> Result<Self, AuthError> {
        let password_hash = match &config.credential {
            AdminCredential::Hash(hash) => {
                PasswordHash::new(hash.expose_secret()).map_err(|_| AuthError::MalformedHash)?;
                hash.expose_secret().to_string()
            }
            AdminCredential::Plain(password) => hash_password(password.expose_secret())?,
        };

        Ok(Self {
            username: config.username.clone(),
            password_hash: RwLock::new(password_hash),
        })
    }

    /// Login name this authenticator accepts.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl Authenticator for PasswordAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        let hash = self
            .password_hash
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        // Verify even on a username mismatch so timing does not reveal it.
        let password_ok = verify_password(password, &hash).is_ok();
        password_ok && username.trim() == self.username
    }

    fn change_password(&self, new_password: &SecretString) -> Result<(), AuthError> {
        let password = new_password.expose_secret();
        validate_password(password)?;
        let hash = hash_password(password)?;

        *self
            .password_hash
            .write()
            .unwrap_or_else(PoisonError::into_inner) = hash;
        tracing::info!(username = %self.username, "Admin password changed");
        Ok(())
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use personalistar_core::Email;

    use super::*;

    fn config(credential: AdminCredential) -> AdminConfig {
        AdminConfig {
            username: "admin".to_string(),
            admin_email: Email::parse("admin@personalistar.com").unwrap(),
            credential,
            data_path: PathBuf::from("unused.json"),
            save_notice: Duration::from_secs(3),
        }
    }

    fn plain_authenticator() -> PasswordAuthenticator {
        PasswordAuthenticator::from_config(&config(AdminCredential::Plain(SecretString::from(
            "t1nta-Azul-77",
        ))))
        .unwrap()
    }

    #[test]
    fn test_plain_credential_is_hashed_and_checked() {
        let auth = plain_authenticator();

        assert!(auth.authenticate("admin", "t1nta-Azul-77"));
        assert!(!auth.authenticate("admin", "errada"));
        assert!(!auth.authenticate("outro", "t1nta-Azul-77"));
    }

    #[test]
    fn test_hash_credential() {
        let hash = hash_password("t1nta-Azul-77").unwrap();
        let auth =
            PasswordAuthenticator::from_config(&config(AdminCredential::Hash(SecretString::from(
                hash,
            ))))
            .unwrap();
        assert!(auth.authenticate("admin", "t1nta-Azul-77"));
    }

    #[test]
    fn test_malformed_hash_rejected() {
        let result = PasswordAuthenticator::from_config(&config(AdminCredential::Hash(
            SecretString::from("not-a-hash"),
        )));
        assert!(matches!(result, Err(AuthError::MalformedHash)));
    }

    #[test]
    fn test_change_password() {
        let auth = plain_authenticator();

        assert!(matches!(
            auth.change_password(&SecretString::from("curta")),
            Err(AuthError::WeakPassword(_))
        ));
        assert!(auth.authenticate("admin", "t1nta-Azul-77"));

        auth.change_password(&SecretString::from("papel-Couche-300"))
            .unwrap();
        assert!(auth.authenticate("admin", "papel-Couche-300"));
        assert!(!auth.authenticate("admin", "t1nta-Azul-77"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let debug = format!("{:?}", plain_authenticator());
        assert!(!debug.contains("argon2"));
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            AuthError::InvalidCredentials.user_message(),
            "Usuário ou senha inválidos."
        );
    }
}
