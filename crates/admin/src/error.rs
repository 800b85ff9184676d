//! Unified error handling for admin.

use thiserror::Error;

use personalistar_core::ValidationError;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::image::ImageError;
use crate::services::profile::ProfileError;

/// Application-level error type for the admin console.
#[derive(Debug, Error)]
pub enum AppError {
    /// A draft or form failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Login or password change failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Profile form was rejected.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Upload could not be turned into an image reference.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Snapshot storage failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Whether the failure is on our side rather than the admin's input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Repository(_) | Self::Config(_) | Self::Image(ImageError::Io(_))
        )
    }

    /// Inline message for the admin.
    ///
    /// Internal failures are logged and replaced by a generic message so
    /// file paths and parser details never reach the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_internal() {
            tracing::error!(error = %self, "Admin operation failed");
            return "Ocorreu um erro interno. Tente novamente.".to_string();
        }

        match self {
            Self::Validation(e) => e.user_message(),
            Self::Auth(e) => e.user_message(),
            Self::Profile(e) => e.user_message(),
            Self::Image(e) => e.user_message(),
            Self::NotFound(_) => "Registro não encontrado.".to_string(),
            Self::Repository(_) | Self::Config(_) => {
                "Ocorreu um erro interno. Tente novamente.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::from(ValidationError::NoImageProvided);
        assert_eq!(
            err.to_string(),
            "Validation error: at least one image URL is required"
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::from(ValidationError::NoValidVariation).user_message(),
            "Adicione pelo menos uma variação com nome e preço válido."
        );
        assert_eq!(
            AppError::from(AuthError::InvalidCredentials).user_message(),
            "Usuário ou senha inválidos."
        );
        assert_eq!(
            AppError::from(ProfileError::PasswordMismatch).user_message(),
            "As senhas não coincidem."
        );
    }

    #[test]
    fn test_internal_errors_are_generic() {
        let err = AppError::from(RepositoryError::DataCorruption("/srv/data.json".to_string()));
        assert!(err.is_internal());
        assert!(!err.user_message().contains("/srv"));

        assert!(!AppError::from(ValidationError::NoImageProvided).is_internal());
    }
}
