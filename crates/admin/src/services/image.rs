//! Image uploads turned into self-contained data URLs.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Errors that can occur while encoding an uploaded image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The upload had no bytes.
    #[error("image file {0} is empty")]
    Empty(String),

    /// The file extension maps to no known MIME type.
    #[error("cannot determine the type of {0}")]
    UnknownType(String),

    /// The file is not an image.
    #[error("{file_name} is {mime}, not an image")]
    NotAnImage {
        /// Uploaded file name.
        file_name: String,
        /// Detected MIME type.
        mime: String,
    },

    /// Reading the file failed.
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageError {
    /// Message shown next to the upload control.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Empty(_) => "O arquivo enviado está vazio.".to_string(),
            Self::UnknownType(_) | Self::NotAnImage { .. } => {
                "Envie um arquivo de imagem (PNG, JPG, SVG, WebP ou ICO).".to_string()
            }
            Self::Io(_) => "Não foi possível ler o arquivo.".to_string(),
        }
    }
}

/// Converts an uploaded file into a reference the site can store and render.
pub trait ImageEncoder: Send + Sync {
    /// Encode `bytes` uploaded under `file_name`.
    ///
    /// # Errors
    ///
    /// Returns `ImageError` when the upload cannot be used as an image.
    fn encode(&self, file_name: &str, bytes: &[u8]) -> Result<String, ImageError>;
}

/// Encodes uploads as `data:<mime>;base64,<payload>` URLs.
///
/// The MIME type comes from the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlEncoder;

impl ImageEncoder for DataUrlEncoder {
    fn encode(&self, file_name: &str, bytes: &[u8]) -> Result<String, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty(file_name.to_string()));
        }

        let mime = mime_guess::from_path(file_name)
            .first()
            .ok_or_else(|| ImageError::UnknownType(file_name.to_string()))?;
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(ImageError::NotAnImage {
                file_name: file_name.to_string(),
                mime: mime.essence_str().to_string(),
            });
        }

        Ok(format!(
            "data:{};base64,{}",
            mime.essence_str(),
            STANDARD.encode(bytes)
        ))
    }
}

/// Read an image from disk and encode it.
///
/// # Errors
///
/// Returns `ImageError::Io` if the file cannot be read, or any error from the
/// encoder.
pub async fn encode_file<E: ImageEncoder>(encoder: &E, path: &Path) -> Result<String, ImageError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!(file = %file_name, size = bytes.len(), "Encoding image");
    encoder.encode(&file_name, &bytes)
}
