//! Typed resolver for dotted configuration paths.
//!
//! The admin console addresses configuration leaves with dotted paths such as
//! `theme.primaryColor` or `content.home.bannerSlides.0.title`. Parsing a
//! path into a [`ConfigField`] happens once; after that every read and write
//! goes through an exhaustive match, so a renamed field is a compile error
//! instead of a silently ignored string.

use std::fmt;
use std::str::FromStr;

use crate::models::{BannerSlide, SiteConfig};
use crate::validation::ValidationError;

/// One text field of a [`BannerSlide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideField {
    ImageUrl,
    Title,
    Subtitle,
    ButtonText,
    ButtonLink,
}

impl SlideField {
    pub const ALL: [Self; 5] = [
        Self::ImageUrl,
        Self::Title,
        Self::Subtitle,
        Self::ButtonText,
        Self::ButtonLink,
    ];

    /// Path segment naming this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ImageUrl => "imageUrl",
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::ButtonText => "buttonText",
            Self::ButtonLink => "buttonLink",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    #[must_use]
    pub fn get(self, slide: &BannerSlide) -> &str {
        match self {
            Self::ImageUrl => &slide.image_url,
            Self::Title => &slide.title,
            Self::Subtitle => &slide.subtitle,
            Self::ButtonText => &slide.button_text,
            Self::ButtonLink => &slide.button_link,
        }
    }

    pub fn get_mut(self, slide: &mut BannerSlide) -> &mut String {
        match self {
            Self::ImageUrl => &mut slide.image_url,
            Self::Title => &mut slide.title,
            Self::Subtitle => &mut slide.subtitle,
            Self::ButtonText => &mut slide.button_text,
            Self::ButtonLink => &mut slide.button_link,
        }
    }
}

impl fmt::Display for SlideField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A scalar leaf of [`SiteConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    CompanyAddress,
    CompanyPhone1,
    CompanyPhone2,
    CompanyInstagramUser,
    ThemeMode,
    ThemePrimaryColor,
    ThemeSecondaryColor,
    AssetsLogoUrl,
    AssetsFaviconUrl,
    HomeHeroTitle,
    HomeHeroSubtitle,
    /// A field of the banner slide at `index`.
    Slide { index: usize, field: SlideField },
}

impl ConfigField {
    /// Read the current value of this leaf.
    ///
    /// Returns `None` only for a slide index past the end of the list.
    #[must_use]
    pub fn get(self, config: &SiteConfig) -> Option<String> {
        let value = match self {
            Self::CompanyAddress => config.company_info.address.clone(),
            Self::CompanyPhone1 => config.company_info.phone1.clone(),
            Self::CompanyPhone2 => config.company_info.phone2.clone(),
            Self::CompanyInstagramUser => config.company_info.instagram_user.clone(),
            Self::ThemeMode => config.theme.mode.to_string(),
            Self::ThemePrimaryColor => config.theme.primary_color.clone(),
            Self::ThemeSecondaryColor => config.theme.secondary_color.clone(),
            Self::AssetsLogoUrl => config.assets.logo_url.clone(),
            Self::AssetsFaviconUrl => config.assets.favicon_url.clone(),
            Self::HomeHeroTitle => config.content.home.hero_title.clone(),
            Self::HomeHeroSubtitle => config.content.home.hero_subtitle.clone(),
            Self::Slide { index, field } => {
                let slide = config.content.home.banner_slides.get(index)?;
                field.get(slide).to_owned()
            }
        };
        Some(value)
    }

    /// Overwrite this leaf, leaving every other field untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SlideOutOfRange`] when the slide does not
    /// exist and [`ValidationError::InvalidValue`] when `theme.mode` is given
    /// something other than `dark` or `light`. On error `config` is unchanged.
    pub fn apply(self, config: &mut SiteConfig, value: &str) -> Result<(), ValidationError> {
        let slot = match self {
            Self::CompanyAddress => &mut config.company_info.address,
            Self::CompanyPhone1 => &mut config.company_info.phone1,
            Self::CompanyPhone2 => &mut config.company_info.phone2,
            Self::CompanyInstagramUser => &mut config.company_info.instagram_user,
            Self::ThemeMode => {
                config.theme.mode = value.parse().map_err(|_| ValidationError::InvalidValue {
                    path: self.to_string(),
                    value: value.to_owned(),
                })?;
                return Ok(());
            }
            Self::ThemePrimaryColor => &mut config.theme.primary_color,
            Self::ThemeSecondaryColor => &mut config.theme.secondary_color,
            Self::AssetsLogoUrl => &mut config.assets.logo_url,
            Self::AssetsFaviconUrl => &mut config.assets.favicon_url,
            Self::HomeHeroTitle => &mut config.content.home.hero_title,
            Self::HomeHeroSubtitle => &mut config.content.home.hero_subtitle,
            Self::Slide { index, field } => {
                let slide = config
                    .content
                    .home
                    .banner_slides
                    .get_mut(index)
                    .ok_or(ValidationError::SlideOutOfRange { index })?;
                field.get_mut(slide)
            }
        };
        value.clone_into(slot);
        Ok(())
    }

    /// Whether this leaf holds an image reference.
    #[must_use]
    pub const fn is_image(self) -> bool {
        matches!(
            self,
            Self::AssetsLogoUrl
                | Self::AssetsFaviconUrl
                | Self::Slide {
                    field: SlideField::ImageUrl,
                    ..
                }
        )
    }
}

impl FromStr for ConfigField {
    type Err = ValidationError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path.trim().split('.').collect();
        let field = match segments.as_slice() {
            ["companyInfo", "address"] => Self::CompanyAddress,
            ["companyInfo", "phone1"] => Self::CompanyPhone1,
            ["companyInfo", "phone2"] => Self::CompanyPhone2,
            ["companyInfo", "instagramUser"] => Self::CompanyInstagramUser,
            ["theme", "mode"] => Self::ThemeMode,
            ["theme", "primaryColor"] => Self::ThemePrimaryColor,
            ["theme", "secondaryColor"] => Self::ThemeSecondaryColor,
            ["assets", "logoUrl"] => Self::AssetsLogoUrl,
            ["assets", "faviconUrl"] => Self::AssetsFaviconUrl,
            ["content", "home", "heroTitle"] => Self::HomeHeroTitle,
            ["content", "home", "heroSubtitle"] => Self::HomeHeroSubtitle,
            ["content", "home", "bannerSlides", index, key] => {
                let index = index
                    .parse::<usize>()
                    .map_err(|_| ValidationError::UnknownPath(path.to_owned()))?;
                let field = SlideField::from_key(key)
                    .ok_or_else(|| ValidationError::UnknownPath(path.to_owned()))?;
                Self::Slide { index, field }
            }
            _ => return Err(ValidationError::UnknownPath(path.to_owned())),
        };
        Ok(field)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompanyAddress => f.write_str("companyInfo.address"),
            Self::CompanyPhone1 => f.write_str("companyInfo.phone1"),
            Self::CompanyPhone2 => f.write_str("companyInfo.phone2"),
            Self::CompanyInstagramUser => f.write_str("companyInfo.instagramUser"),
            Self::ThemeMode => f.write_str("theme.mode"),
            Self::ThemePrimaryColor => f.write_str("theme.primaryColor"),
            Self::ThemeSecondaryColor => f.write_str("theme.secondaryColor"),
            Self::AssetsLogoUrl => f.write_str("assets.logoUrl"),
            Self::AssetsFaviconUrl => f.write_str("assets.faviconUrl"),
            Self::HomeHeroTitle => f.write_str("content.home.heroTitle"),
            Self::HomeHeroSubtitle => f.write_str("content.home.heroSubtitle"),
            Self::Slide { index, field } => {
                write!(f, "content.home.bannerSlides.{index}.{field}")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ThemeMode;

    #[test]
    fn test_parse_and_display_roundtrip() {
        for path in [
            "companyInfo.instagramUser",
            "theme.primaryColor",
            "assets.faviconUrl",
            "content.home.heroTitle",
            "content.home.bannerSlides.1.buttonLink",
        ] {
            let field: ConfigField = path.parse().unwrap();
            assert_eq!(field.to_string(), path);
        }
    }

    #[test]
    fn test_unknown_paths_rejected() {
        for path in [
            "",
            "theme",
            "theme.accentColor",
            "companyInfo.address.street",
            "content.home.bannerSlides.x.title",
            "content.home.bannerSlides.0.color",
            "content.home.bannerSlides.0",
        ] {
            assert_eq!(
                path.parse::<ConfigField>(),
                Err(ValidationError::UnknownPath(path.to_owned())),
                "{path}"
            );
        }
    }

    #[test]
    fn test_apply_touches_only_target() {
        let before = SiteConfig::default();
        let mut config = before.clone();
        ConfigField::ThemePrimaryColor
            .apply(&mut config, "#123456")
            .unwrap();

        assert_eq!(config.theme.primary_color, "#123456");
        config.theme.primary_color.clone_from(&before.theme.primary_color);
        assert_eq!(config, before);
    }

    #[test]
    fn test_apply_slide_field() {
        let mut config = SiteConfig::default();
        let field: ConfigField = "content.home.bannerSlides.1.title".parse().unwrap();
        field.apply(&mut config, "Novo título").unwrap();
        assert_eq!(config.content.home.banner_slides[1].title, "Novo título");
        assert_eq!(field.get(&config).as_deref(), Some("Novo título"));
    }

    #[test]
    fn test_apply_out_of_range_slide_leaves_config() {
        let before = SiteConfig::default();
        let mut config = before.clone();
        let field: ConfigField = "content.home.bannerSlides.7.title".parse().unwrap();
        assert_eq!(
            field.apply(&mut config, "x"),
            Err(ValidationError::SlideOutOfRange { index: 7 })
        );
        assert_eq!(field.get(&config), None);
        assert_eq!(config, before);
    }

    #[test]
    fn test_theme_mode_is_typed() {
        let mut config = SiteConfig::default();
        ConfigField::ThemeMode.apply(&mut config, "light").unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Light);

        assert!(matches!(
            ConfigField::ThemeMode.apply(&mut config, "sepia"),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert_eq!(config.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn test_image_leaves() {
        assert!(ConfigField::AssetsLogoUrl.is_image());
        assert!("content.home.bannerSlides.0.imageUrl"
            .parse::<ConfigField>()
            .unwrap()
            .is_image());
        assert!(!ConfigField::HomeHeroTitle.is_image());
    }
}
