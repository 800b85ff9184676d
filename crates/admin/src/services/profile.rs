//! Admin profile editing.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use personalistar_core::{Email, EmailError};

use crate::models::AdminProfile;
use crate::services::auth::{AuthError, Authenticator};

/// Errors that block saving the profile form.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// `save` was called outside edit mode.
    #[error("profile is not being edited")]
    NotEditing,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// New password and confirmation differ.
    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("password change failed: {0}")]
    Auth(#[from] AuthError),
}

impl ProfileError {
    /// Message shown on the profile form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotEditing => "Clique em editar antes de salvar.".to_string(),
            Self::EmptyName => "Informe o nome.".to_string(),
            Self::InvalidEmail(_) => "Informe um e-mail válido.".to_string(),
            Self::PasswordMismatch => "As senhas não coincidem.".to_string(),
            Self::Auth(e) => e.user_message(),
        }
    }
}

/// Profile form with an edit mode and an optional password change.
pub struct ProfileEditor {
    saved: AdminProfile,
    editing: bool,
    pub name: String,
    pub email: String,
    new_password: SecretString,
    confirm_password: SecretString,
}

impl std::fmt::Debug for ProfileEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileEditor")
            .field("saved", &self.saved)
            .field("editing", &self.editing)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("new_password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl ProfileEditor {
    #[must_use]
    pub fn new(profile: AdminProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.as_str().to_string(),
            saved: profile,
            editing: false,
            new_password: SecretString::from(String::new()),
            confirm_password: SecretString::from(String::new()),
        }
    }

    /// Last saved profile.
    #[must_use]
    pub const fn profile(&self) -> &AdminProfile {
        &self.saved
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Stage a password change. Leave both empty to keep the password.
    pub fn set_passwords(&mut self, new_password: SecretString, confirm_password: SecretString) {
        self.new_password = new_password;
        self.confirm_password = confirm_password;
    }

    /// Leave edit mode and restore the saved values.
    pub fn cancel(&mut self) {
        *self = Self::new(self.saved.clone());
    }

    /// Validate the form, apply a password change and leave edit mode.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::PasswordMismatch` when the confirmation differs,
    /// or another `ProfileError` for a blank name, a malformed email or a
    /// rejected password. Nothing is saved on error.
    pub fn save(&mut self, authenticator: &dyn Authenticator) -> Result<AdminProfile, ProfileError> {
        if !self.editing {
            return Err(ProfileError::NotEditing);
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let email = Email::parse(&self.email)?;

        let new_password = self.new_password.expose_secret();
        if new_password != self.confirm_password.expose_secret() {
            return Err(ProfileError::PasswordMismatch);
        }
        if !new_password.is_empty() {
            authenticator.change_password(&self.new_password)?;
        }

        let profile = AdminProfile {
            name: name.to_string(),
            email,
        };
        tracing::info!(email = %profile.email, "Admin profile saved");
        *self = Self::new(profile.clone());
        Ok(profile)
    }
}
