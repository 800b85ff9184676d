//! Validation failures shared by the stores and the admin editors.
//!
//! A `ValidationError` always means the operation was aborted before any
//! state changed.

use thiserror::Error;

use crate::types::ProductId;

/// Errors reported when a draft, a path or a stored entity is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Every image URL slot was blank.
    #[error("at least one image URL is required")]
    NoImageProvided,

    /// No variation survived with a name and a positive price.
    #[error("at least one variation with a name and a positive price is required")]
    NoValidVariation,

    /// A required text field is blank.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// `imageUrl` does not match the first gallery entry.
    #[error("primary image must be the first gallery image")]
    PrimaryImageMismatch,

    /// A dotted configuration path does not name a known leaf.
    #[error("unknown configuration path: {0}")]
    UnknownPath(String),

    /// A banner slide index is past the end of the slide list.
    #[error("banner slide {index} does not exist")]
    SlideOutOfRange {
        /// Requested slide position.
        index: usize,
    },

    /// A typed leaf was given a value it cannot hold.
    #[error("invalid value for {path}: {value:?}")]
    InvalidValue {
        /// Dotted path of the leaf.
        path: String,
        /// Rejected input.
        value: String,
    },

    /// A theme color is not a `#rrggbb` hex value.
    #[error("{field} must be a #rrggbb color (got {value:?})")]
    InvalidColor {
        /// Theme field name.
        field: &'static str,
        /// Rejected input.
        value: String,
    },

    /// An editor slot index is past the end of its group.
    #[error("{group} slot {index} does not exist")]
    SlotOutOfRange {
        /// Repeated group name.
        group: &'static str,
        /// Requested slot position.
        index: usize,
    },

    /// Removing the slot would leave a group that needs one slot empty.
    #[error("{group} must keep at least one slot")]
    LastSlot {
        /// Repeated group name.
        group: &'static str,
    },

    /// Two products in a restored catalog share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

impl ValidationError {
    /// Inline message shown to the admin next to the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoImageProvided => "Adicione pelo menos uma URL de imagem.".to_owned(),
            Self::NoValidVariation => {
                "Adicione pelo menos uma variação com nome e preço válido.".to_owned()
            }
            Self::EmptyField { field } => format!("Preencha o campo obrigatório: {field}."),
            Self::PrimaryImageMismatch => {
                "A imagem principal deve ser a primeira da galeria.".to_owned()
            }
            Self::UnknownPath(path) => format!("Campo de configuração desconhecido: {path}."),
            Self::SlideOutOfRange { index } => format!("O slide {} não existe.", index + 1),
            Self::InvalidValue { path, .. } => format!("Valor inválido para {path}."),
            Self::InvalidColor { field, .. } => format!("Cor inválida em {field}."),
            Self::SlotOutOfRange { .. } => "Item inexistente.".to_owned(),
            Self::LastSlot { .. } => "É necessário manter pelo menos um item.".to_owned(),
            Self::DuplicateId(id) => format!("Produto duplicado: {id}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_english_and_message_is_portuguese() {
        let err = ValidationError::NoImageProvided;
        assert_eq!(err.to_string(), "at least one image URL is required");
        assert_eq!(err.user_message(), "Adicione pelo menos uma URL de imagem.");
    }

    #[test]
    fn test_slide_message_is_one_based() {
        let err = ValidationError::SlideOutOfRange { index: 0 };
        assert_eq!(err.user_message(), "O slide 1 não existe.");
    }
}
