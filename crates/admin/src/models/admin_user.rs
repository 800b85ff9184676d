//! Admin user domain types.

use serde::{Deserialize, Serialize};

use personalistar_core::Email;

/// Display identity of the single admin account.
///
/// Held in memory only; the login name and password live in the
/// authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// Admin's display name.
    pub name: String,
    /// Admin's email address.
    pub email: Email,
}

impl AdminProfile {
    /// Profile shown before the admin has edited it.
    #[must_use]
    pub fn initial(email: Email) -> Self {
        Self {
            name: "Admin".to_string(),
            email,
        }
    }
}
