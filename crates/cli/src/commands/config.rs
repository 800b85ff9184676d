//! Site configuration commands.

use std::error::Error;
use std::path::Path;

use tracing::info;

use super::{Context, emit, finish};

/// Print the current configuration as pretty JSON.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read.
pub async fn show(ctx: &Context) -> Result<(), Box<dyn Error>> {
    let (site, _) = ctx.read().await?;
    let config = site.get();
    emit(&serde_json::to_string_pretty(&*config)?)?;
    Ok(())
}

/// Set one field by dotted path and commit.
///
/// # Errors
///
/// Returns an error if login fails, the path does not resolve, the new
/// configuration is invalid, or the snapshot cannot be written.
pub async fn set(ctx: &Context, path: &str, value: &str) -> Result<(), Box<dyn Error>> {
    let console = ctx.login().await?;
    let mut editor = console.config_editor();
    editor.set_field(path, value)?;
    let revision = editor.commit()?;
    info!(path, revision, "Configuration field updated");
    finish(console).await
}

/// Encode an image file into an image field and commit.
///
/// # Errors
///
/// Returns an error if login fails, `path` is not an image field, the file
/// is not a readable image, or the snapshot cannot be written.
pub async fn image(ctx: &Context, path: &str, file: &Path) -> Result<(), Box<dyn Error>> {
    let console = ctx.login().await?;
    let mut editor = console.config_editor();
    editor
        .set_image_file(path, console.image_encoder(), file)
        .await?;
    let revision = editor.commit()?;
    info!(path, file = %file.display(), revision, "Image field updated");
    finish(console).await
}
