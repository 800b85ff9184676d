//! In-memory content stores.
//!
//! Both stores are cheap cloneable handles over shared state. Readers get an
//! `Arc` snapshot that never changes under them; writers build the next state
//! off to the side and swap it in under the write lock, so a reader sees a
//! mutation either fully or not at all.

mod catalog_store;
mod config_store;

pub use catalog_store::CatalogStore;
pub use config_store::ConfigStore;
