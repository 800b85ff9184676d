//! Home page: banner carousel, featured products and contact section.

use personalistar_core::{Product, SiteConfig};
use serde::Serialize;

use crate::carousel::CarouselView;
use crate::config::StorefrontConfig;
use crate::pages::layout::ContactView;
use crate::pages::products::ProductCard;

/// Short opening hours shown in the contact section.
pub const HOURS_SUMMARY: [&str; 2] = ["Seg-Sex: 08h-19h", "Sáb: 08h-18h | Dom: 08:30h-15:30h"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub hero_title: String,
    pub hero_subtitle: String,
    /// `None` when no banner slides are configured.
    pub carousel: Option<CarouselView>,
    /// "Nossos Destaques": the first products of the catalog.
    pub featured: Vec<ProductCard>,
    pub contact: ContactView,
    pub hours: &'static [&'static str],
}

impl HomePage {
    /// Render the home page with slide `slide_index` on screen.
    #[must_use]
    pub fn new(
        config: &SiteConfig,
        products: &[Product],
        storefront: &StorefrontConfig,
        slide_index: usize,
    ) -> Self {
        let home = &config.content.home;
        Self {
            hero_title: home.hero_title.clone(),
            hero_subtitle: home.hero_subtitle.clone(),
            carousel: CarouselView::new(config.banner_slides(), slide_index),
            featured: products
                .iter()
                .take(storefront.featured_count)
                .map(ProductCard::from)
                .collect(),
            contact: ContactView::new(config, storefront),
            hours: &HOURS_SUMMARY,
        }
    }
}
