//! The singleton site configuration edited from the admin console.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::ThemeMode;
use crate::validation::ValidationError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Invalid regex"));

/// Contact details shown in the footer and the contact section.
///
/// Free text; phone formats are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub address: String,
    pub phone1: String,
    /// WhatsApp number.
    pub phone2: String,
    /// Instagram handle without the leading `@`.
    pub instagram_user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub primary_color: String,
    pub secondary_color: String,
}

/// Branding images. An empty string means the asset is not set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAssets {
    pub logo_url: String,
    pub favicon_url: String,
}

/// One page of the home banner carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSlide {
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    /// Rendered in carousel order.
    pub banner_slides: Vec<BannerSlide>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub home: HomePageContent,
}

/// Site-wide configuration. Exactly one exists per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub company_info: CompanyInfo,
    pub theme: ThemeSettings,
    pub assets: SiteAssets,
    pub content: SiteContent,
}

impl SiteConfig {
    /// Check the parts of the configuration renderers depend on.
    ///
    /// Text fields are free-form; only theme colors are constrained, since
    /// they are injected as CSS custom properties.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidColor`] when a theme color is not a
    /// `#rrggbb` value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_color("theme.primaryColor", &self.theme.primary_color)?;
        validate_color("theme.secondaryColor", &self.theme.secondary_color)?;
        Ok(())
    }

    /// Slides shown by the home carousel.
    #[must_use]
    pub fn banner_slides(&self) -> &[BannerSlide] {
        &self.content.home.banner_slides
    }
}

fn validate_color(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if HEX_COLOR.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor {
            field,
            value: value.to_owned(),
        })
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            primary_color: "#8b5cf6".to_owned(),
            secondary_color: "#ec4899".to_owned(),
        }
    }
}

/// Seed configuration used on first start.
impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_info: CompanyInfo {
                address: "Rua das Gráficas, 123 - Centro, São Paulo - SP".to_owned(),
                phone1: "(11) 3333-4444".to_owned(),
                phone2: "(11) 98888-7777".to_owned(),
                instagram_user: "graficapersonalistar".to_owned(),
            },
            theme: ThemeSettings::default(),
            assets: SiteAssets::default(),
            content: SiteContent {
                home: HomePageContent {
                    hero_title: "Gráfica Personalistar".to_owned(),
                    hero_subtitle: "Sua parceira em impressão e personalização.".to_owned(),
                    banner_slides: vec![
                        BannerSlide {
                            image_url: "https://picsum.photos/seed/grafica1/1600/900".to_owned(),
                            title: "Impressão Profissional".to_owned(),
                            subtitle: "Cartões, panfletos e adesivos com qualidade".to_owned(),
                            button_text: "Ver Produtos".to_owned(),
                            button_link: "/products".to_owned(),
                        },
                        BannerSlide {
                            image_url: "https://picsum.photos/seed/grafica2/1600/900".to_owned(),
                            title: "Personalize Tudo".to_owned(),
                            subtitle: "Canecas, camisetas e brindes para sua marca".to_owned(),
                            button_text: "Faça seu Pedido".to_owned(),
                            button_link: "/products".to_owned(),
                        },
                    ],
                },
            },
        }
    }
}
