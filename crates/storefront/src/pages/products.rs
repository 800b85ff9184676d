//! Product cards, the catalog listing and the product detail page.

use personalistar_core::{Product, ProductVariation};
use serde::Serialize;

use crate::filters;

/// Summary tile linking to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub href: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Lowest variation price, labelled "A partir de".
    pub starting_price: String,
    pub shipping: &'static str,
}

impl ProductCard {
    pub const PRICE_LABEL: &'static str = "A partir de";
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            href: product_href(product),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            starting_price: filters::format_brl_compact(product.starting_price()),
            shipping: product.shipping.label(),
        }
    }
}

/// Path of a product's detail page.
#[must_use]
pub fn product_href(product: &Product) -> String {
    format!("/product/{}", product.id)
}

/// "Todos os Nossos Produtos": every card in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsPage {
    pub title: &'static str,
    pub cards: Vec<ProductCard>,
}

impl ProductsPage {
    #[must_use]
    pub fn new(products: &[Product]) -> Self {
        Self {
            title: "Todos os Nossos Produtos",
            cards: products.iter().map(ProductCard::from).collect(),
        }
    }
}

// =============================================================================
// Detail page
// =============================================================================

/// What the visitor picked on the detail page.
///
/// Unknown values fall back to the defaults: the primary image and the first
/// variation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelection {
    pub image: Option<String>,
    pub variation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
    pub selected: bool,
}

/// A detail line split at its first colon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub label: String,
    pub value: String,
}

impl DetailLine {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let (label, value) = line.split_once(':').unwrap_or((line, ""));
        Self {
            label: label.trim().to_string(),
            value: value.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationOption {
    pub name: String,
    pub selected: bool,
}

/// Price box for the selected variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingView {
    /// "R$ 25,50"
    pub price: String,
    /// Alternate payment lines, present only with a discount price.
    pub alternatives: Vec<String>,
}

impl From<&ProductVariation> for PricingView {
    fn from(variation: &ProductVariation) -> Self {
        let alternatives = variation
            .discount_price
            .map(|discount| {
                let discount = filters::format_brl(discount);
                vec![
                    format!("ou {discount} integral via Depósito/Transferência"),
                    format!("ou {discount} Pagando à vista via PIX"),
                ]
            })
            .unwrap_or_default();
        Self {
            price: filters::format_brl(variation.price),
            alternatives,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetailView {
    pub name: String,
    pub code: String,
    pub description: String,
    /// Home link then the product name.
    pub breadcrumb: Vec<String>,
    pub main_image: String,
    pub gallery: Vec<GalleryImage>,
    pub details: Vec<DetailLine>,
    pub variations: Vec<VariationOption>,
    /// `None` only for a product without variations.
    pub pricing: Option<PricingView>,
}

impl ProductDetailView {
    #[must_use]
    pub fn new(product: &Product, selection: &DetailSelection) -> Self {
        let main_image = selection
            .image
            .as_ref()
            .filter(|url| product.image_gallery.contains(url))
            .unwrap_or(&product.image_url)
            .clone();

        let selected = selection
            .variation
            .as_deref()
            .and_then(|name| product.variation(name))
            .or_else(|| product.variations.first());

        let gallery = product
            .image_gallery
            .iter()
            .enumerate()
            .map(|(i, url)| GalleryImage {
                url: url.clone(),
                alt: format!("{} - view {}", product.name, i + 1),
                selected: *url == main_image,
            })
            .collect();

        let variations = product
            .variations
            .iter()
            .map(|v| VariationOption {
                name: v.name.clone(),
                selected: selected.is_some_and(|s| s.name == v.name),
            })
            .collect();

        Self {
            name: product.name.clone(),
            code: product.code.clone(),
            description: product.description.clone(),
            breadcrumb: vec!["INÍCIO".to_string(), product.name.to_uppercase()],
            main_image,
            gallery,
            details: product.details.iter().map(|d| DetailLine::parse(d)).collect(),
            variations,
            pricing: selected.map(PricingView::from),
        }
    }
}

/// Result of a detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductPage {
    Found(Box<ProductDetailView>),
    NotFound {
        message: &'static str,
        back_label: &'static str,
        back_href: &'static str,
    },
}

impl ProductPage {
    /// Detail view for `product`, or the "not found" page.
    #[must_use]
    pub fn new(product: Option<&Product>, selection: &DetailSelection) -> Self {
        product.map_or_else(Self::not_found, |product| {
            Self::Found(Box::new(ProductDetailView::new(product, selection)))
        })
    }

    #[must_use]
    pub const fn not_found() -> Self {
        Self::NotFound {
            message: "Produto não encontrado",
            back_label: "Voltar para a lista de produtos",
            back_href: "/products",
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
