//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong username or password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// New password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Stored hash could not be parsed.
    #[error("malformed password hash")]
    MalformedHash,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

impl AuthError {
    /// Message shown on the login or profile form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Usuário ou senha inválidos.".to_string(),
            Self::WeakPassword(_) => "A nova senha deve ter pelo menos 8 caracteres.".to_string(),
            Self::MalformedHash | Self::PasswordHash => {
                "Não foi possível validar a senha.".to_string()
            }
        }
    }
}
