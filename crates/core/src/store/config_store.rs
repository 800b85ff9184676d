use std::sync::{Arc, PoisonError, RwLock};

use crate::models::SiteConfig;
use crate::validation::ValidationError;

struct Current {
    config: Arc<SiteConfig>,
    revision: u64,
}

/// Owner of the singleton [`SiteConfig`].
///
/// Clones share the same configuration.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Current>>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("revision", &self.revision())
            .finish_non_exhaustive()
    }
}

impl ConfigStore {
    /// Create a store holding `initial`.
    ///
    /// The initial value is trusted; callers loading from disk validate first.
    #[must_use]
    pub fn new(initial: SiteConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Current {
                config: Arc::new(initial),
                revision: 0,
            })),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn get(&self) -> Arc<SiteConfig> {
        let current = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current.config)
    }

    /// Counter bumped by every successful [`replace`](Self::replace).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .revision
    }

    /// Snapshot together with the revision it belongs to.
    #[must_use]
    pub fn snapshot(&self) -> (Arc<SiteConfig>, u64) {
        let current = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        (Arc::clone(&current.config), current.revision)
    }

    /// Swap the whole configuration.
    ///
    /// Returns the new revision.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`SiteConfig::validate`]; the
    /// stored configuration is left untouched.
    pub fn replace(&self, config: SiteConfig) -> Result<u64, ValidationError> {
        config.validate()?;
        let config = Arc::new(config);

        let mut current = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        current.config = config;
        current.revision += 1;
        Ok(current.revision)
    }
}
