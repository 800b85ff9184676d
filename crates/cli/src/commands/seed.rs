//! Seed the snapshot with the default site configuration.
//!
//! Seeding needs no login: it only bootstraps a data file that does not
//! exist yet, or replaces one when `--force` is given.

use std::error::Error;

use personalistar_core::{CatalogStore, ConfigStore};
use tracing::{info, warn};

/// Write the seed configuration and an empty catalog.
///
/// # Errors
///
/// Returns an error if a snapshot already exists and `force` is not set, or
/// if the file cannot be written.
pub async fn run(ctx: &super::Context, force: bool) -> Result<(), Box<dyn Error>> {
    let repository = ctx.repository();
    let path = repository.path().display().to_string();

    if tokio::fs::try_exists(repository.path()).await? {
        if !force {
            return Err(format!("Snapshot already exists at {path}; pass --force to replace it").into());
        }
        warn!(path = %path, "Replacing existing snapshot with seed data");
    }

    let saved_at = repository
        .save(&ConfigStore::default(), &CatalogStore::new())
        .await?;
    info!(path = %path, saved_at = %saved_at, "Seed snapshot written");
    Ok(())
}
