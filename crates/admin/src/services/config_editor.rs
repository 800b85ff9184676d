//! Draft/commit editing of the site configuration.
//!
//! The editor keeps a private copy of the configuration. Edits only touch
//! that copy; [`ConfigEditor::commit`] hands the whole draft to the store in
//! one `replace`, so the storefront never renders a half-edited config.

use std::path::Path;
use std::time::Duration;

use tokio::time::Instant;

use personalistar_core::{
    BannerSlide, ConfigField, ConfigStore, SiteConfig, SlideField, ValidationError,
};

use crate::error::AppError;
use crate::services::image::{ImageEncoder, encode_file};

/// Text of the transient notice raised by a successful commit.
pub const SAVE_NOTICE: &str = "Alterações salvas com sucesso!";

/// Staging area for configuration edits.
#[derive(Debug)]
pub struct ConfigEditor {
    store: ConfigStore,
    draft: SiteConfig,
    base_revision: u64,
    dirty: bool,
    notice_ttl: Duration,
    notice_until: Option<Instant>,
}

impl ConfigEditor {
    /// Start editing from the store's current snapshot.
    #[must_use]
    pub fn new(store: ConfigStore, notice_ttl: Duration) -> Self {
        let (config, revision) = store.snapshot();
        Self {
            store,
            draft: (*config).clone(),
            base_revision: revision,
            dirty: false,
            notice_ttl,
            notice_until: None,
        }
    }

    /// Pick up a newer store snapshot unless there are unsaved edits.
    ///
    /// Returns `true` when the draft was reloaded.
    pub fn sync(&mut self) -> bool {
        if self.dirty || self.store.revision() == self.base_revision {
            return false;
        }
        self.reload();
        true
    }

    /// The draft as it would be committed.
    pub fn draft(&mut self) -> &SiteConfig {
        self.sync();
        &self.draft
    }

    /// Whether the draft has edits the store has not seen.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set one leaf addressed by a dotted path, e.g. `theme.primaryColor`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownPath` for a path that names no leaf,
    /// or the error from [`ConfigField::apply`]. The draft is unchanged on
    /// error.
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<(), ValidationError> {
        let field: ConfigField = path.parse()?;
        self.set(field, value)
    }

    /// Set one typed leaf.
    ///
    /// # Errors
    ///
    /// See [`ConfigField::apply`].
    pub fn set(&mut self, field: ConfigField, value: &str) -> Result<(), ValidationError> {
        self.sync();
        field.apply(&mut self.draft, value)?;
        self.dirty = true;
        tracing::debug!(field = %field, "Config draft field set");
        Ok(())
    }

    /// Append an empty banner slide and return its index.
    pub fn add_slide(&mut self) -> usize {
        self.sync();
        let slides = &mut self.draft.content.home.banner_slides;
        slides.push(BannerSlide::default());
        self.dirty = true;
        slides.len() - 1
    }

    /// Remove the slide at `index`; later slides shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::SlideOutOfRange` if there is no such slide.
    pub fn remove_slide(&mut self, index: usize) -> Result<BannerSlide, ValidationError> {
        self.sync();
        let slides = &mut self.draft.content.home.banner_slides;
        if index >= slides.len() {
            return Err(ValidationError::SlideOutOfRange { index });
        }
        let removed = slides.remove(index);
        self.dirty = true;
        Ok(removed)
    }

    /// Set one field of one slide.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::SlideOutOfRange` if there is no such slide.
    pub fn update_slide_field(
        &mut self,
        index: usize,
        field: SlideField,
        value: &str,
    ) -> Result<(), ValidationError> {
        self.set(ConfigField::Slide { index, field }, value)
    }

    /// Encode an uploaded file and store it in an image leaf.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an unknown or non-image path and
    /// `AppError::Image` when the upload cannot be encoded. Nothing is
    /// written to the draft on error.
    pub fn set_image<E: ImageEncoder + ?Sized>(
        &mut self,
        path: &str,
        encoder: &E,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), AppError> {
        let field = image_field(path, file_name)?;
        let url = encoder.encode(file_name, bytes)?;
        self.set(field, &url)?;
        Ok(())
    }

    /// Read an image file from disk and store it in an image leaf.
    ///
    /// # Errors
    ///
    /// Same as [`set_image`](Self::set_image), plus `ImageError::Io` when the
    /// file cannot be read.
    pub async fn set_image_file<E: ImageEncoder>(
        &mut self,
        path: &str,
        encoder: &E,
        file: &Path,
    ) -> Result<(), AppError> {
        let field = image_field(path, &file.display().to_string())?;
        let url = encode_file(encoder, file).await?;
        self.set(field, &url)?;
        Ok(())
    }

    /// Publish the draft to the store.
    ///
    /// On success the editor is clean and the save notice is raised for the
    /// configured duration. Returns the new store revision.
    ///
    /// # Errors
    ///
    /// Returns the store's `ValidationError`; the draft and the store are
    /// both left as they were.
    pub fn commit(&mut self) -> Result<u64, ValidationError> {
        self.sync();
        let revision = self.store.replace(self.draft.clone())?;
        self.base_revision = revision;
        self.dirty = false;
        self.notice_until = Some(Instant::now() + self.notice_ttl);
        tracing::info!(revision, "Site configuration saved");
        Ok(revision)
    }

    /// Throw away unsaved edits and reload from the store.
    pub fn cancel(&mut self) {
        if self.dirty {
            tracing::debug!("Config draft discarded");
        }
        self.reload();
    }

    /// The save notice, while it is still showing.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice_until
            .filter(|until| Instant::now() < *until)
            .map(|_| SAVE_NOTICE)
    }

    fn reload(&mut self) {
        let (config, revision) = self.store.snapshot();
        self.draft = (*config).clone();
        self.base_revision = revision;
        self.dirty = false;
    }
}

fn image_field(path: &str, upload: &str) -> Result<ConfigField, ValidationError> {
    let field: ConfigField = path.parse()?;
    if field.is_image() {
        Ok(field)
    } else {
        Err(ValidationError::InvalidValue {
            path: path.to_string(),
            value: upload.to_string(),
        })
    }
}
