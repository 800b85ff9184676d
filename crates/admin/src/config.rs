//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Credentials (one of)
//! - `ADMIN_PASSWORD_HASH` - Argon2 PHC string for the admin password
//! - `ADMIN_PASSWORD` - Plain admin password, hashed at startup (min 8 chars)
//!
//! ## Optional
//! - `ADMIN_USERNAME` - Login name (default: admin)
//! - `ADMIN_EMAIL` - Email shown on the admin profile (default: admin@personalistar.com)
//! - `PERSONALISTAR_DATA_PATH` - Snapshot file (default: data/personalistar.json)
//! - `ADMIN_SAVE_NOTICE_SECS` - How long the "saved" notice stays up (default: 3)

use std::path::PathBuf;
use std::time::Duration;

use personalistar_core::Email;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_PASSWORD_LENGTH: usize = 8;
const DEFAULT_DATA_PATH: &str = "data/personalistar.json";
const DEFAULT_ADMIN_EMAIL: &str = "admin@personalistar.com";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "senha",
    "admin123",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// How the admin password is provided.
#[derive(Clone)]
pub enum AdminCredential {
    /// Argon2 PHC string.
    Hash(SecretString),
    /// Plain password; hashed when the authenticator is built.
    Plain(SecretString),
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hash(_) => f.write_str("Hash([REDACTED])"),
            Self::Plain(_) => f.write_str("Plain([REDACTED])"),
        }
    }
}

/// Admin console configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Login name accepted by the gate
    pub username: String,
    /// Initial email of the admin profile
    pub admin_email: Email,
    /// Admin password (hash or plain)
    pub credential: AdminCredential,
    /// Snapshot file holding the site configuration and catalog
    pub data_path: PathBuf,
    /// Lifetime of the success notice after a configuration commit
    pub save_notice: Duration,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no credential is set, a number does not parse,
    /// or a plain password looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let username = get_env_or_default("ADMIN_USERNAME", "admin");
        if username.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_USERNAME".to_string(),
                "cannot be blank".to_string(),
            ));
        }

        let admin_email =
            parse_admin_email(&get_env_or_default("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL))?;
        let credential = credential_from_env()?;
        let data_path = PathBuf::from(get_env_or_default(
            "PERSONALISTAR_DATA_PATH",
            DEFAULT_DATA_PATH,
        ));
        let save_notice_secs = get_env_or_default("ADMIN_SAVE_NOTICE_SECS", "3")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ADMIN_SAVE_NOTICE_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            username,
            admin_email,
            credential,
            data_path,
            save_notice: Duration::from_secs(save_notice_secs),
        })
    }
}

fn parse_admin_email(value: &str) -> Result<Email, ConfigError> {
    Email::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_EMAIL".to_string(), e.to_string()))
}

fn credential_from_env() -> Result<AdminCredential, ConfigError> {
    if let Some(hash) = get_optional_env("ADMIN_PASSWORD_HASH") {
        if !hash.starts_with("$argon2") {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_PASSWORD_HASH".to_string(),
                "expected an argon2 PHC string".to_string(),
            ));
        }
        return Ok(AdminCredential::Hash(SecretString::from(hash)));
    }

    let password = get_required_secret("ADMIN_PASSWORD").map_err(|_| {
        ConfigError::MissingEnvVar("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD".to_string())
    })?;
    validate_password_strength(&password, "ADMIN_PASSWORD")?;
    Ok(AdminCredential::Plain(password))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a password is long enough and not a placeholder.
pub fn validate_password_strength(
    secret: &SecretString,
    var_name: &str,
) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    let lower = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_password_placeholder_rejected() {
        let result = validate_password_strength(&SecretString::from("changeme123"), "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));

        let result = validate_password_strength(&SecretString::from("MinhaSenha2024"), "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_password_too_short() {
        let result = validate_password_strength(&SecretString::from("k9#Lq"), "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_password_valid() {
        let result = validate_password_strength(&SecretString::from("t1nta-Azul-77"), "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_admin_email_parsed() {
        assert_eq!(
            parse_admin_email(DEFAULT_ADMIN_EMAIL).unwrap().as_str(),
            DEFAULT_ADMIN_EMAIL
        );
        assert!(matches!(
            parse_admin_email("grafica"),
            Err(ConfigError::InvalidEnvVar(var, _)) if var == "ADMIN_EMAIL"
        ));
    }

    #[test]
    fn test_credential_debug_redacted() {
        let credential = AdminCredential::Plain(SecretString::from("t1nta-Azul-77"));
        let debug = format!("{credential:?}");
        assert!(!debug.contains("t1nta"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_config_debug_redacts_credential() {
        let config = AdminConfig {
            username: "admin".to_string(),
            admin_email: parse_admin_email(DEFAULT_ADMIN_EMAIL).unwrap(),
            credential: AdminCredential::Hash(SecretString::from("$argon2id$v=19$abc")),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            save_notice: Duration::from_secs(3),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("argon2id"));
        assert!(debug.contains("personalistar.json"));
    }
}
