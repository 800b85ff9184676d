//! Application state shared by every admin surface.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use personalistar_core::{CatalogStore, ConfigStore};

use crate::config::AdminConfig;
use crate::console::AdminConsole;
use crate::db::{RepositoryError, SnapshotRepository};
use crate::error::AppError;
use crate::models::AdminProfile;
use crate::services::auth::{AuthError, Authenticator, PasswordAuthenticator};
use crate::services::image::DataUrlEncoder;

/// Application state shared across the admin console.
///
/// Cheap to clone; all clones see the same stores.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    site: ConfigStore,
    catalog: CatalogStore,
    authenticator: Arc<dyn Authenticator>,
    encoder: DataUrlEncoder,
    repository: SnapshotRepository,
    profile: RwLock<AdminProfile>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("site", &self.inner.site)
            .field("catalog", &self.inner.catalog)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build the state around existing stores.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the configured credential cannot be used.
    pub fn new(
        config: AdminConfig,
        site: ConfigStore,
        catalog: CatalogStore,
    ) -> Result<Self, AuthError> {
        let authenticator = Arc::new(PasswordAuthenticator::from_config(&config)?);
        Ok(Self::with_authenticator(config, site, catalog, authenticator))
    }

    /// Build the state with a custom credential check.
    #[must_use]
    pub fn with_authenticator(
        config: AdminConfig,
        site: ConfigStore,
        catalog: CatalogStore,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        let repository = SnapshotRepository::new(config.data_path.clone());
        let profile = AdminProfile::initial(config.admin_email.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                site,
                catalog,
                authenticator,
                encoder: DataUrlEncoder,
                repository,
                profile: RwLock::new(profile),
            }),
        }
    }

    /// Build the state from the snapshot at `config.data_path`.
    ///
    /// Falls back to the seed configuration and an empty catalog when no
    /// snapshot exists yet.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the snapshot exists but cannot be
    /// used, or `AppError::Auth` if the credential is unusable.
    pub async fn load(config: AdminConfig) -> Result<Self, AppError> {
        let repository = SnapshotRepository::new(config.data_path.clone());
        let (site, catalog) = match repository.load().await? {
            Some(snapshot) => (snapshot.config, snapshot.catalog),
            None => {
                tracing::info!("Starting from seed configuration");
                (ConfigStore::default(), CatalogStore::new())
            }
        };
        Ok(Self::new(config, site, catalog)?)
    }

    /// Returns a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Returns the site configuration store.
    #[must_use]
    pub fn site(&self) -> &ConfigStore {
        &self.inner.site
    }

    /// Returns the product catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    #[must_use]
    pub fn repository(&self) -> &SnapshotRepository {
        &self.inner.repository
    }

    pub(crate) fn authenticator(&self) -> &dyn Authenticator {
        self.inner.authenticator.as_ref()
    }

    pub(crate) fn encoder(&self) -> &DataUrlEncoder {
        &self.inner.encoder
    }

    /// Current admin profile.
    #[must_use]
    pub fn profile(&self) -> AdminProfile {
        self.inner
            .profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_profile(&self, profile: AdminProfile) {
        *self
            .inner
            .profile
            .write()
            .unwrap_or_else(PoisonError::into_inner) = profile;
    }

    /// Check credentials and open the admin console.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for a wrong username or
    /// password. No lockout is applied.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminConsole, AuthError> {
        if !self.inner.authenticator.authenticate(username, password) {
            tracing::warn!(username = %username, "Admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        tracing::info!(username = %username, "Admin logged in");
        Ok(AdminConsole::new(self.clone(), username.trim().to_string()))
    }

    /// Write both stores to the snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the snapshot cannot be written.
    pub async fn persist(&self) -> Result<DateTime<Utc>, RepositoryError> {
        self.inner
            .repository
            .save(&self.inner.site, &self.inner.catalog)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use personalistar_core::Email;
    use secrecy::SecretString;

    use super::*;
    use crate::config::AdminCredential;

    fn config(data_path: std::path::PathBuf) -> AdminConfig {
        AdminConfig {
            username: "admin".to_string(),
            admin_email: Email::parse("admin@personalistar.com").unwrap(),
            credential: AdminCredential::Plain(SecretString::from("t1nta-Azul-77")),
            data_path,
            save_notice: Duration::from_secs(3),
        }
    }

    #[test]
    fn test_login_gate() {
        let state = AppState::new(
            config("unused.json".into()),
            ConfigStore::default(),
            CatalogStore::new(),
        )
        .unwrap();

        assert!(matches!(
            state.login("admin", "errada"),
            Err(AuthError::InvalidCredentials)
        ));
        let console = state.login("admin", "t1nta-Azul-77").unwrap();
        assert_eq!(console.username(), "admin");
    }

    #[test]
    fn test_profile_starts_from_configured_email() {
        let mut config = config("unused.json".into());
        config.admin_email = Email::parse("contato@personalistar.com").unwrap();
        let state = AppState::new(config, ConfigStore::default(), CatalogStore::new()).unwrap();

        let profile = state.profile();
        assert_eq!(profile.name, "Admin");
        assert_eq!(profile.email.as_str(), "contato@personalistar.com");
    }

    #[tokio::test]
    async fn test_load_seeds_then_reads_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");

        let state = AppState::load(config(path.clone())).await.unwrap();
        assert!(state.catalog().is_empty());
        assert_eq!(*state.site().get(), personalistar_core::SiteConfig::default());

        let mut next = (*state.site().get()).clone();
        next.company_info.phone2 = "(11) 97777-6666".to_string();
        state.site().replace(next).unwrap();
        state.persist().await.unwrap();

        let reloaded = AppState::load(config(path)).await.unwrap();
        assert_eq!(reloaded.site().get().company_info.phone2, "(11) 97777-6666");
    }
}
