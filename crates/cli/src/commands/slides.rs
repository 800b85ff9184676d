//! Banner slide commands.

use std::error::Error;

use personalistar_core::SlideField;
use tracing::info;

use super::{Context, emit, finish};

/// Initial field values for a new slide; unset fields stay empty.
#[derive(Debug, Default)]
pub struct SlideArgs {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}

impl SlideArgs {
    fn into_fields(self) -> impl Iterator<Item = (SlideField, String)> {
        [
            (SlideField::ImageUrl, self.image_url),
            (SlideField::Title, self.title),
            (SlideField::Subtitle, self.subtitle),
            (SlideField::ButtonText, self.button_text),
            (SlideField::ButtonLink, self.button_link),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Append a slide and commit.
///
/// # Errors
///
/// Returns an error if login fails or the snapshot cannot be written.
pub async fn add(ctx: &Context, args: SlideArgs) -> Result<(), Box<dyn Error>> {
    let console = ctx.login().await?;
    let mut editor = console.config_editor();
    let index = editor.add_slide();
    for (field, value) in args.into_fields() {
        editor.update_slide_field(index, field, &value)?;
    }
    editor.commit()?;
    info!(index, "Banner slide added");
    emit(&index.to_string())?;
    finish(console).await
}

/// Remove the slide at `index` and commit.
///
/// # Errors
///
/// Returns an error if login fails, there is no such slide, or the snapshot
/// cannot be written.
pub async fn remove(ctx: &Context, index: usize) -> Result<(), Box<dyn Error>> {
    let console = ctx.login().await?;
    let mut editor = console.config_editor();
    let removed = editor.remove_slide(index)?;
    editor.commit()?;
    info!(index, title = %removed.title, "Banner slide removed");
    finish(console).await
}
