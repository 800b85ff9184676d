//! Closed enumerations used by the catalog and the site theme.

use serde::{Deserialize, Serialize};

/// How shipping is charged for a product.
///
/// Accepts the storefront labels as serde aliases so hand-written product
/// files can use either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingOption {
    #[serde(alias = "Frete Grátis")]
    FreeShipping,
    #[serde(alias = "Frete a Calcular")]
    PaidShipping,
    /// Arranged with the customer; the default for new products.
    #[default]
    #[serde(alias = "A Combinar")]
    Negotiate,
}

impl ShippingOption {
    /// All options in display order.
    pub const ALL: [Self; 3] = [Self::FreeShipping, Self::PaidShipping, Self::Negotiate];

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeShipping => "Frete Grátis",
            Self::PaidShipping => "Frete a Calcular",
            Self::Negotiate => "A Combinar",
        }
    }

    /// Machine-readable code, as serialized.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FreeShipping => "free_shipping",
            Self::PaidShipping => "paid_shipping",
            Self::Negotiate => "negotiate",
        }
    }
}

impl std::fmt::Display for ShippingOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ShippingOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.code() == s || option.label() == s)
            .ok_or_else(|| format!("invalid shipping option: {s}"))
    }
}

/// Site color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("invalid theme mode: {other}")),
        }
    }
}
