//! Content entities: catalog products and the site configuration.

pub mod product;
pub mod site_config;

pub use product::{Product, ProductInput, ProductVariation};
pub use site_config::{
    BannerSlide, CompanyInfo, HomePageContent, SiteAssets, SiteConfig, SiteContent,
    ThemeSettings,
};
