//! Integration tests for Personalistar.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p personalistar-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_scenario` - Product CRUD through the admin console, seen by the storefront
//! - `site_settings` - Configuration drafts, slides, uploads and profile changes
//! - `persistence` - Snapshot round trips between processes
//!
//! Every test builds its own [`TestSite`] over a temporary data directory,
//! so tests never share state.

use std::path::PathBuf;
use std::time::Duration;

use personalistar_admin::config::AdminCredential;
use personalistar_admin::services::{ProductEditor, VariationSlot};
use personalistar_admin::{AdminConfig, AdminConsole};
use personalistar_core::{CatalogStore, ConfigStore, Email};
use personalistar_storefront::StorefrontConfig;
use secrecy::SecretString;
use tempfile::TempDir;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "t1nta-Azul-77";

pub const TEST_EMAIL: &str = "admin@personalistar.com";

/// Admin configuration with a plain test password and a snapshot under `dir`.
///
/// # Panics
///
/// Panics if `TEST_EMAIL` stops being a valid address.
#[must_use]
#[allow(clippy::expect_used)]
pub fn admin_config(data_path: PathBuf) -> AdminConfig {
    AdminConfig {
        username: TEST_USERNAME.to_string(),
        admin_email: Email::parse(TEST_EMAIL).expect("test email"),
        credential: AdminCredential::Plain(SecretString::from(TEST_PASSWORD)),
        data_path,
        save_notice: Duration::from_secs(3),
    }
}

/// Admin and storefront wired to the same stores, as in a running site.
pub struct TestSite {
    pub dir: TempDir,
    pub admin: personalistar_admin::AppState,
    pub storefront: personalistar_storefront::AppState,
}

impl TestSite {
    /// Fresh site with the seed configuration and an empty catalog.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory or the password hash cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let site = ConfigStore::default();
        let catalog = CatalogStore::new();
        let admin = personalistar_admin::AppState::new(
            admin_config(dir.path().join("personalistar.json")),
            site.clone(),
            catalog.clone(),
        )
        .expect("build admin state");
        let storefront =
            personalistar_storefront::AppState::new(StorefrontConfig::default(), site, catalog);
        Self {
            dir,
            admin,
            storefront,
        }
    }

    /// Log in with the test credentials.
    ///
    /// # Panics
    ///
    /// Panics if the test credentials are rejected.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn login(&self) -> AdminConsole {
        self.admin
            .login(TEST_USERNAME, TEST_PASSWORD)
            .expect("test credentials accepted")
    }

    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("personalistar.json")
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete product form with one image and one variation per `(name, price)`.
///
/// # Panics
///
/// Panics if the form slots cannot be filled.
#[must_use]
#[allow(clippy::expect_used)]
pub fn product_form(
    console: &AdminConsole,
    name: &str,
    image_url: &str,
    variations: &[(&str, &str)],
) -> ProductEditor {
    let mut editor = console.new_product();
    editor.name = name.to_string();
    editor.code = format!("{}-01", name.to_uppercase());
    editor.description = format!("{name} personalizado");
    editor.set_image_url(0, image_url).expect("image slot");
    for (index, (variation, price)) in variations.iter().enumerate() {
        if index > 0 {
            editor.add_slot(personalistar_admin::services::SlotGroup::Variations);
        }
        editor
            .set_variation(
                index,
                VariationSlot {
                    name: (*variation).to_string(),
                    price: (*price).to_string(),
                    discount_price: String::new(),
                },
            )
            .expect("variation slot");
    }
    editor
}
