//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Argon2 password gate for the single admin account
//! - `config_editor` - Draft/commit editing of the site configuration
//! - `image` - Upload encoding into data URLs
//! - `product_editor` - Product form with repeated slot groups
//! - `profile` - Admin profile and password change

pub mod auth;
pub mod config_editor;
pub mod image;
pub mod product_editor;
pub mod profile;

pub use auth::{AuthError, Authenticator, PasswordAuthenticator};
pub use config_editor::{ConfigEditor, SAVE_NOTICE};
pub use image::{DataUrlEncoder, ImageEncoder, ImageError, encode_file};
pub use product_editor::{ProductEditor, SlotGroup, VariationSlot};
pub use profile::{ProfileEditor, ProfileError};
