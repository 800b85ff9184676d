//! Personalistar Storefront library.
//!
//! Read-only renderers over the content stores: page view models for the
//! public site, price formatting, theme variables and the banner carousel.
//! The storefront never mutates a store; it takes a fresh snapshot on every
//! render, so admin commits show up on the next page view.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod config;
pub mod filters;
pub mod pages;
pub mod state;

pub use carousel::{Carousel, CarouselTimer, CarouselView};
pub use config::StorefrontConfig;
pub use pages::{Page, Visitor};
pub use state::AppState;
