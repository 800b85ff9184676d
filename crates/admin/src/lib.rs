//! Personalistar Admin library.
//!
//! The admin console behind a login gate: configuration drafts, the product
//! form, the admin profile and snapshot persistence. Every mutation goes
//! through the stores from `personalistar-core`, which the storefront reads.
//!
//! # Usage
//!
//! ```rust,ignore
//! let state = AppState::load(AdminConfig::from_env()?).await?;
//! let console = state.login("admin", &password)?;
//!
//! let mut editor = console.config_editor();
//! editor.set_field("theme.primaryColor", "#123456")?;
//! editor.commit()?;
//! console.persist().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use config::AdminConfig;
pub use console::AdminConsole;
pub use error::AppError;
pub use state::AppState;
