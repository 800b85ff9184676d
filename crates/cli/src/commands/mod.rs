//! Command implementations.

pub mod config;
pub mod products;
pub mod seed;
pub mod slides;

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use personalistar_admin::db::SnapshotRepository;
use personalistar_admin::{AdminConfig, AdminConsole, AppState};
use personalistar_core::{CatalogStore, ConfigStore};
use secrecy::{ExposeSecret, SecretString};

/// Where the snapshot lives and who is acting.
#[derive(Debug, Clone)]
pub struct Context {
    data_path: PathBuf,
    username: String,
}

impl Context {
    pub const fn new(data_path: PathBuf, username: String) -> Self {
        Self {
            data_path,
            username,
        }
    }

    pub fn repository(&self) -> SnapshotRepository {
        SnapshotRepository::new(self.data_path.clone())
    }

    /// Current stores for read-only commands, without logging in.
    ///
    /// A missing snapshot reads as the seed configuration and an empty
    /// catalog.
    pub async fn read(&self) -> Result<(ConfigStore, CatalogStore), Box<dyn Error>> {
        Ok(match self.repository().load().await? {
            Some(snapshot) => (snapshot.config, snapshot.catalog),
            None => (ConfigStore::default(), CatalogStore::new()),
        })
    }

    /// Load the snapshot and log in with `PERSONALISTAR_PASSWORD`.
    pub async fn login(&self) -> Result<AdminConsole, Box<dyn Error>> {
        let mut config = AdminConfig::from_env()?;
        config.data_path.clone_from(&self.data_path);

        let password = std::env::var("PERSONALISTAR_PASSWORD")
            .map(SecretString::from)
            .map_err(|_| "PERSONALISTAR_PASSWORD not set")?;

        let state = AppState::load(config).await?;
        let console = state
            .login(&self.username, password.expose_secret())
            .map_err(|e| e.user_message())?;
        Ok(console)
    }
}

/// Write the snapshot and end the session.
pub async fn finish(console: AdminConsole) -> Result<(), Box<dyn Error>> {
    let saved_at = console.persist().await?;
    tracing::info!(saved_at = %saved_at, "Changes saved");
    console.logout();
    Ok(())
}

/// Print command output on stdout.
pub fn emit(text: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")
}
