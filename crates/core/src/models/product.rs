//! Catalog entities.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, ShippingOption};
use crate::validation::ValidationError;

/// A purchasable price tier of a product, e.g. a quantity bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariation {
    /// Tier label, e.g. "1000 Unidades".
    pub name: String,
    /// Standard price.
    pub price: Price,
    /// Alternate price for up-front payment (PIX or bank transfer).
    ///
    /// Expected to be at most `price`, but this is not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Price>,
}

/// Everything needed to create or replace a product, minus its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    /// Ordered images; the first one becomes the primary image.
    pub image_gallery: Vec<String>,
    #[serde(default)]
    pub shipping: ShippingOption,
    pub variations: Vec<ProductVariation>,
}

impl ProductInput {
    /// Check the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: blank name, code or
    /// description, no gallery image, or no variation. Variations must
    /// have a non-blank name; prices are positive by construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("code", &self.code)?;
        require_text("description", &self.description)?;

        if self.image_gallery.iter().all(|url| url.trim().is_empty()) {
            return Err(ValidationError::NoImageProvided);
        }
        if self.image_gallery.iter().any(|url| url.trim().is_empty()) {
            return Err(ValidationError::EmptyField {
                field: "imageGallery",
            });
        }

        if self.variations.is_empty() {
            return Err(ValidationError::NoValidVariation);
        }
        for variation in &self.variations {
            require_text("variations.name", &variation.name)?;
        }

        Ok(())
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

/// A catalog entry as stored and rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub description: String,
    pub details: Vec<String>,
    /// Always equal to `image_gallery[0]`.
    pub image_url: String,
    pub image_gallery: Vec<String>,
    pub shipping: ShippingOption,
    pub variations: Vec<ProductVariation>,
}

impl Product {
    /// Build a product from already validated input.
    pub(crate) fn from_input(id: ProductId, input: ProductInput) -> Self {
        let image_url = input.image_gallery.first().cloned().unwrap_or_default();
        Self {
            id,
            name: input.name,
            code: input.code,
            description: input.description,
            details: input.details,
            image_url,
            image_gallery: input.image_gallery,
            shipping: input.shipping,
            variations: input.variations,
        }
    }

    /// Check the invariants of a product loaded from outside the store.
    ///
    /// # Errors
    ///
    /// Same as [`ProductInput::validate`], plus
    /// [`ValidationError::PrimaryImageMismatch`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_input().validate()?;
        if self.image_gallery.first() != Some(&self.image_url) {
            return Err(ValidationError::PrimaryImageMismatch);
        }
        Ok(())
    }

    /// The editable part of this product.
    #[must_use]
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            details: self.details.clone(),
            image_gallery: self.image_gallery.clone(),
            shipping: self.shipping,
            variations: self.variations.clone(),
        }
    }

    /// Lowest standard price across variations.
    #[must_use]
    pub fn starting_price(&self) -> Option<Price> {
        self.variations.iter().map(|v| v.price).min()
    }

    /// Find a variation by its label.
    #[must_use]
    pub fn variation(&self, name: &str) -> Option<&ProductVariation> {
        self.variations.iter().find(|v| v.name == name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn variation(name: &str, cents: i64) -> ProductVariation {
        ProductVariation {
            name: name.to_owned(),
            price: Price::from_cents(cents).unwrap(),
            discount_price: None,
        }
    }

    fn input() -> ProductInput {
        ProductInput {
            name: "Cartão de Visita".to_owned(),
            code: "CV-01".to_owned(),
            description: "Couché 300g".to_owned(),
            details: vec!["Formato: 9x5cm".to_owned()],
            image_gallery: vec!["a.jpg".to_owned(), "b.jpg".to_owned()],
            shipping: ShippingOption::FreeShipping,
            variations: vec![variation("1000 Unidades", 9900), variation("500 Unidades", 6500)],
        }
    }

    #[test]
    fn test_valid_input() {
        assert_eq!(input().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut blank_name = input();
        blank_name.name = "  ".to_owned();
        assert_eq!(
            blank_name.validate(),
            Err(ValidationError::EmptyField { field: "name" })
        );

        let mut blank_code = input();
        blank_code.code = String::new();
        assert_eq!(
            blank_code.validate(),
            Err(ValidationError::EmptyField { field: "code" })
        );
    }

    #[test]
    fn test_gallery_and_variations_required() {
        let mut no_images = input();
        no_images.image_gallery.clear();
        assert_eq!(no_images.validate(), Err(ValidationError::NoImageProvided));

        let mut no_variations = input();
        no_variations.variations.clear();
        assert_eq!(
            no_variations.validate(),
            Err(ValidationError::NoValidVariation)
        );
    }

    #[test]
    fn test_from_input_sets_primary_image() {
        let product = Product::from_input(ProductId::generate(), input());
        assert_eq!(product.image_url, "a.jpg");
        assert_eq!(product.validate(), Ok(()));
    }

    #[test]
    fn test_primary_image_mismatch_detected() {
        let mut product = Product::from_input(ProductId::generate(), input());
        product.image_url = "b.jpg".to_owned();
        assert_eq!(
            product.validate(),
            Err(ValidationError::PrimaryImageMismatch)
        );
    }

    #[test]
    fn test_starting_price_is_minimum() {
        let product = Product::from_input(ProductId::generate(), input());
        assert_eq!(product.starting_price(), Some(Price::from_cents(6500).unwrap()));
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let product = Product::from_input(ProductId::generate(), input());
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("imageGallery").is_some());
        assert!(json["variations"][0].get("discountPrice").is_none());
    }
}
