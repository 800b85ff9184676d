//! Page view models.
//!
//! Each page is built from a snapshot of the stores and holds plain strings
//! ready for a template. Nothing here mutates content.

pub mod home;
pub mod layout;
pub mod products;

use serde::Serialize;

pub use home::HomePage;
pub use layout::{Layout, Visitor};
pub use products::{DetailSelection, ProductCard, ProductDetailView, ProductPage, ProductsPage};

/// A page body wrapped in the shared layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub layout: Layout,
    pub body: T,
}
