//! Personalistar Core - Shared domain types and content stores.
//!
//! This crate provides the content model used by every Personalistar component:
//! - `storefront` - Public catalog pages and banner carousel (read-only)
//! - `admin` - Admin console that edits the catalog and site configuration
//! - `cli` - Command-line tools operating on a persisted snapshot
//!
//! # Architecture
//!
//! The core crate contains types, validation and the in-memory stores - no
//! file access, no HTTP clients. Stores are cheap cloneable handles that are
//! passed explicitly to whoever needs them; there is no global instance.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails and enumerations
//! - [`models`] - `Product` and `SiteConfig` entities
//! - [`path`] - Typed resolver for dotted configuration paths
//! - [`store`] - `ConfigStore` and `CatalogStore`
//! - [`validation`] - The shared `ValidationError`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod path;
pub mod store;
pub mod types;
pub mod validation;

pub use models::*;
pub use path::{ConfigField, SlideField};
pub use store::{CatalogStore, ConfigStore};
pub use types::*;
pub use validation::ValidationError;
