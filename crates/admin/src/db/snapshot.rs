//! JSON snapshot of the site configuration and catalog.
//!
//! Layout on disk:
//!
//! ```json
//! { "version": 1, "savedAt": "2026-01-01T12:00:00Z", "config": { ... }, "products": [ ... ] }
//! ```
//!
//! Writes go to a sibling temp file that is then renamed over the target, so
//! a crash mid-write never leaves a truncated snapshot behind.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use personalistar_core::{CatalogStore, ConfigStore, Product, SiteConfig};

use super::RepositoryError;

/// Current on-disk format version.
pub const SNAPSHOT_VERSION: u32 = 1;

// =============================================================================
// Internal Document Types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocument {
    version: u32,
    saved_at: DateTime<Utc>,
    config: SiteConfig,
    products: Vec<Product>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocumentRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    config: &'a SiteConfig,
    products: &'a [Product],
}

/// A loaded and validated snapshot, ready to serve.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub config: ConfigStore,
    pub catalog: CatalogStore,
}

impl TryFrom<SnapshotDocument> for Snapshot {
    type Error = RepositoryError;

    fn try_from(doc: SnapshotDocument) -> Result<Self, Self::Error> {
        if doc.version != SNAPSHOT_VERSION {
            return Err(RepositoryError::UnsupportedVersion(doc.version));
        }
        doc.config.validate().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid site configuration: {e}"))
        })?;
        let catalog = CatalogStore::restore(doc.products)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid catalog: {e}")))?;

        Ok(Self {
            saved_at: doc.saved_at,
            config: ConfigStore::new(doc.config),
            catalog,
        })
    }
}

/// Reads and writes the snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    path: PathBuf,
}

impl SnapshotRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, or `None` if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be read,
    /// `RepositoryError::Serialization` if it is not a snapshot document and
    /// `RepositoryError::DataCorruption` if its content is invalid.
    pub async fn load(&self) -> Result<Option<Snapshot>, RepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No snapshot found");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let doc: SnapshotDocument = serde_json::from_slice(&bytes)?;
        let snapshot = Snapshot::try_from(doc)?;
        tracing::info!(
            path = %self.path.display(),
            products = snapshot.catalog.len(),
            saved_at = %snapshot.saved_at,
            "Snapshot loaded"
        );
        Ok(Some(snapshot))
    }

    /// Write the current state of both stores.
    ///
    /// Returns the timestamp recorded in the file.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be written.
    pub async fn save(
        &self,
        config: &ConfigStore,
        catalog: &CatalogStore,
    ) -> Result<DateTime<Utc>, RepositoryError> {
        let site = config.get();
        let products = catalog.list();
        let saved_at = Utc::now();
        let doc = SnapshotDocumentRef {
            version: SNAPSHOT_VERSION,
            saved_at,
            config: &site,
            products: &products,
        };
        let json = serde_json::to_vec_pretty(&doc)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Atomic write: tmp file + rename
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            tracing::warn!(path = %tmp_path.display(), error = %e, "Failed to rename tmp snapshot");
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        tracing::info!(
            path = %self.path.display(),
            products = products.len(),
            "Snapshot saved"
        );
        Ok(saved_at)
    }
}
