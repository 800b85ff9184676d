//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_CAROUSEL_INTERVAL_SECS` - Seconds between banner slides (default: 5)
//! - `STOREFRONT_FEATURED_COUNT` - Products featured on the home page (default: 3)
//! - `STOREFRONT_WHATSAPP_COUNTRY_CODE` - Prefix for `wa.me` links (default: 55)

use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Delay before the carousel advances on its own
    pub carousel_interval: Duration,
    /// Number of catalog entries shown under "Nossos Destaques"
    pub featured_count: usize,
    /// Country calling code prepended to the `WhatsApp` number
    pub whatsapp_country_code: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            carousel_interval: Duration::from_secs(5),
            featured_count: 3,
            whatsapp_country_code: "55".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a number does not parse, the
    /// interval is zero, or the country code is not all digits.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let interval_secs: u64 = parse_env("STOREFRONT_CAROUSEL_INTERVAL_SECS", "5")?;
        if interval_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_CAROUSEL_INTERVAL_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let featured_count = parse_env("STOREFRONT_FEATURED_COUNT", "3")?;

        let whatsapp_country_code = get_env_or_default("STOREFRONT_WHATSAPP_COUNTRY_CODE", "55");
        validate_country_code(&whatsapp_country_code)?;

        Ok(Self {
            carousel_interval: Duration::from_secs(interval_secs),
            featured_count,
            whatsapp_country_code,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn validate_country_code(code: &str) -> Result<(), ConfigError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_WHATSAPP_COUNTRY_CODE".to_string(),
            format!("expected digits only, got {code:?}"),
        ));
    }
    Ok(())
}
