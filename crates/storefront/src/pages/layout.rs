//! Header, footer and theme shared by every page.

use personalistar_core::{SiteConfig, ThemeMode};
use serde::Serialize;

use crate::config::StorefrontConfig;
use crate::filters;

/// Shown in place of the logo when none is configured.
pub const WORDMARK: &str = "Personalistar";

const COMPANY_NAME: &str = "Gráfica Personalistar";

/// Primary navigation, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("PÁGINA INICIAL", "/"),
    ("PEDIDO PERSONALIZADO", "/pedido-personalizado"),
    ("BALCÕES DE RETIRADA", "/balcoes-de-retirada"),
    ("CONTATO", "/contato"),
    ("PRODUTOS", "/products"),
];

/// Weekly opening hours listed in the footer.
pub const OPENING_HOURS: [OpeningHours; 7] = [
    OpeningHours::new("Segunda-feira", "08:00–19:00"),
    OpeningHours::new("Terça-feira", "08:00–19:00"),
    OpeningHours::new("Quarta-feira", "08:00–19:00"),
    OpeningHours::new("Quinta-feira", "08:00–19:00"),
    OpeningHours::new("Sexta-feira", "08:00–19:00"),
    OpeningHours::new("Sábado", "08:00–18:00"),
    OpeningHours::new("Domingo", "08:30–15:30"),
];

/// Who is looking at the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visitor {
    #[default]
    Anonymous,
    /// An admin session is open; the header offers "Admin" and "Sair".
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpeningHours {
    pub day: &'static str,
    pub time: &'static str,
}

impl OpeningHours {
    const fn new(day: &'static str, time: &'static str) -> Self {
        Self { day, time }
    }
}

/// A link with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Colors and favicon applied to the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeView {
    pub dark: bool,
    pub primary_color: String,
    pub secondary_color: String,
    pub favicon_url: Option<String>,
}

impl ThemeView {
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            dark: config.theme.mode == ThemeMode::Dark,
            primary_color: config.theme.primary_color.clone(),
            secondary_color: config.theme.secondary_color.clone(),
            favicon_url: non_empty(&config.assets.favicon_url),
        }
    }

    /// Class for the root element: `dark` or nothing.
    #[must_use]
    pub const fn root_class(&self) -> &'static str {
        if self.dark { "dark" } else { "" }
    }

    /// Inline style declaring the theme custom properties.
    #[must_use]
    pub fn css_variables(&self) -> String {
        format!(
            "--color-primary: {}; --color-secondary: {};",
            self.primary_color, self.secondary_color
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub link: Link,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    /// Logo image, or `None` to show [`WORDMARK`].
    pub logo_url: Option<String>,
    pub nav: Vec<NavItem>,
    /// "Admin" and "Sair" for an admin, "Login" otherwise.
    pub session_links: Vec<Link>,
}

impl HeaderView {
    #[must_use]
    pub fn new(config: &SiteConfig, visitor: Visitor, current_path: &str) -> Self {
        let nav = NAV_LINKS
            .iter()
            .map(|&(label, href)| NavItem {
                link: Link::new(label, href),
                active: href == current_path,
            })
            .collect();
        let session_links = match visitor {
            Visitor::Admin => vec![Link::new("Admin", "/admin"), Link::new("Sair", "/logout")],
            Visitor::Anonymous => vec![Link::new("Login", "/login")],
        };

        Self {
            logo_url: non_empty(&config.assets.logo_url),
            nav,
            session_links,
        }
    }
}

/// Address and phones, shared by the footer and the home contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub address: String,
    pub phone: Link,
    /// `None` when the `WhatsApp` number has no digits.
    pub whatsapp: Option<Link>,
}

impl ContactView {
    #[must_use]
    pub fn new(config: &SiteConfig, storefront: &StorefrontConfig) -> Self {
        let info = &config.company_info;
        Self {
            address: info.address.clone(),
            phone: Link::new(info.phone1.clone(), filters::tel_link(&info.phone1)),
            whatsapp: filters::whatsapp_link(&storefront.whatsapp_country_code, &info.phone2)
                .map(|href| Link::new(info.phone2.clone(), href)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub logo_url: Option<String>,
    pub tagline: &'static str,
    pub contact: ContactView,
    pub hours: &'static [OpeningHours],
    /// Profile link labelled with the `@handle`.
    pub instagram: Link,
    pub copyright: String,
}

impl FooterView {
    #[must_use]
    pub fn new(config: &SiteConfig, storefront: &StorefrontConfig, year: i32) -> Self {
        let (href, handle) = filters::instagram(&config.company_info.instagram_user);
        Self {
            logo_url: non_empty(&config.assets.logo_url),
            tagline: "Sua parceira em impressão e personalização. Qualidade e criatividade em cada detalhe.",
            contact: ContactView::new(config, storefront),
            hours: &OPENING_HOURS,
            instagram: Link::new(handle, href),
            copyright: format!("© {year} {COMPANY_NAME}. Todos os direitos reservados."),
        }
    }
}

/// Everything around the page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub theme: ThemeView,
    pub header: HeaderView,
    pub footer: FooterView,
    /// Target of the floating `WhatsApp` button; absent without a number.
    pub floating_whatsapp: Option<String>,
}

impl Layout {
    #[must_use]
    pub fn new(
        config: &SiteConfig,
        storefront: &StorefrontConfig,
        visitor: Visitor,
        current_path: &str,
    ) -> Self {
        let footer = FooterView::new(config, storefront, filters::current_year());
        Self {
            theme: ThemeView::new(config),
            header: HeaderView::new(config, visitor, current_path),
            floating_whatsapp: footer.contact.whatsapp.as_ref().map(|l| l.href.clone()),
            footer,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_default_config() {
        let theme = ThemeView::new(&SiteConfig::default());
        assert_eq!(theme.root_class(), "dark");
        assert_eq!(
            theme.css_variables(),
            "--color-primary: #8b5cf6; --color-secondary: #ec4899;"
        );
        assert_eq!(theme.favicon_url, None);
    }

    #[test]
    fn test_light_theme_has_no_root_class() {
        let mut config = SiteConfig::default();
        config.theme.mode = ThemeMode::Light;
        config.assets.favicon_url = "data:image/png;base64,AA==".to_string();
        let theme = ThemeView::new(&config);
        assert_eq!(theme.root_class(), "");
        assert_eq!(theme.favicon_url.as_deref(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn test_header_session_links() {
        let config = SiteConfig::default();
        let header = HeaderView::new(&config, Visitor::Anonymous, "/products");
        let labels: Vec<&str> = header.session_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Login"]);
        assert!(header.logo_url.is_none());

        let active: Vec<&str> = header
            .nav
            .iter()
            .filter(|item| item.active)
            .map(|item| item.link.label.as_str())
            .collect();
        assert_eq!(active, ["PRODUTOS"]);

        let header = HeaderView::new(&config, Visitor::Admin, "/");
        let labels: Vec<&str> = header.session_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Admin", "Sair"]);
    }

    #[test]
    fn test_footer_links() {
        let footer = FooterView::new(&SiteConfig::default(), &StorefrontConfig::default(), 2026);
        assert_eq!(footer.contact.phone.href, "tel:(11) 3333-4444");
        assert_eq!(
            footer.contact.whatsapp.unwrap().href,
            "https://wa.me/5511988887777"
        );
        assert_eq!(footer.instagram.label, "@graficapersonalistar");
        assert_eq!(footer.hours.len(), 7);
        assert!(footer.copyright.starts_with("© 2026 Gráfica Personalistar"));
    }

    #[test]
    fn test_floating_whatsapp_needs_digits() {
        let storefront = StorefrontConfig::default();
        let mut config = SiteConfig::default();
        let layout = Layout::new(&config, &storefront, Visitor::Anonymous, "/");
        assert!(layout.floating_whatsapp.is_some());

        config.company_info.phone2 = "em breve".to_string();
        let layout = Layout::new(&config, &storefront, Visitor::Anonymous, "/");
        assert!(layout.floating_whatsapp.is_none());
        assert!(layout.footer.contact.whatsapp.is_none());
    }
}
