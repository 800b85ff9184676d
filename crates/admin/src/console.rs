//! The logged-in admin console.
//!
//! An [`AdminConsole`] only exists after a successful
//! [`AppState::login`](crate::state::AppState::login), so holding one is the
//! proof that admin operations are allowed.

use chrono::{DateTime, Utc};

use personalistar_core::{Product, ProductId};

use crate::components::{DataTableConfig, ProductRow, products_table_config};
use crate::db::RepositoryError;
use crate::error::AppError;
use crate::models::AdminProfile;
use crate::services::config_editor::ConfigEditor;
use crate::services::image::DataUrlEncoder;
use crate::services::product_editor::ProductEditor;
use crate::services::profile::ProfileEditor;
use crate::state::AppState;

/// Admin session over the shared state.
#[derive(Debug, Clone)]
pub struct AdminConsole {
    state: AppState,
    username: String,
}

impl AdminConsole {
    pub(crate) const fn new(state: AppState, username: String) -> Self {
        Self { state, username }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    // =========================================================================
    // Site configuration
    // =========================================================================

    /// Open a configuration draft.
    #[must_use]
    pub fn config_editor(&self) -> ConfigEditor {
        ConfigEditor::new(self.state.site().clone(), self.state.config().save_notice)
    }

    /// Encoder for image uploads.
    #[must_use]
    pub fn image_encoder(&self) -> &DataUrlEncoder {
        self.state.encoder()
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Blank product form.
    #[must_use]
    pub fn new_product(&self) -> ProductEditor {
        ProductEditor::new()
    }

    /// Product form pre-filled for editing.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has `id`.
    pub fn edit_product(&self, id: ProductId) -> Result<ProductEditor, AppError> {
        self.state
            .catalog()
            .get(id)
            .map(|product| ProductEditor::edit(&product))
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))
    }

    /// Submit a product form to the catalog.
    ///
    /// Returns `Ok(None)` when the product being edited was deleted in the
    /// meantime.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the form is invalid.
    pub fn submit_product(&self, editor: &ProductEditor) -> Result<Option<Product>, AppError> {
        Ok(editor.submit(self.state.catalog())?)
    }

    /// Delete a product. Deleting an unknown id is a no-op.
    pub fn delete_product(&self, id: ProductId) -> bool {
        let removed = self.state.catalog().delete(id);
        if removed {
            tracing::info!(product_id = %id, admin = %self.username, "Product deleted");
        } else {
            tracing::debug!(product_id = %id, "Delete of unknown product ignored");
        }
        removed
    }

    /// Rows of the product table, in catalog order.
    #[must_use]
    pub fn product_rows(&self) -> Vec<ProductRow> {
        self.state
            .catalog()
            .list()
            .iter()
            .map(ProductRow::from)
            .collect()
    }

    #[must_use]
    pub fn product_table(&self) -> DataTableConfig {
        products_table_config()
    }

    // =========================================================================
    // Profile
    // =========================================================================

    #[must_use]
    pub fn profile_editor(&self) -> ProfileEditor {
        ProfileEditor::new(self.state.profile())
    }

    /// Save the profile form, including a password change if one is staged.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Profile` if the form is rejected; nothing is saved.
    pub fn save_profile(&self, editor: &mut ProfileEditor) -> Result<AdminProfile, AppError> {
        let profile = editor.save(self.state.authenticator())?;
        self.state.set_profile(profile.clone());
        Ok(profile)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Write the current site and catalog to disk.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the snapshot cannot be written.
    pub async fn persist(&self) -> Result<DateTime<Utc>, RepositoryError> {
        self.state.persist().await
    }

    /// End the session.
    pub fn logout(self) {
        tracing::info!(admin = %self.username, "Admin logged out");
    }
}
