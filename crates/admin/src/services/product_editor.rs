//! Product form with growable repeated fields.
//!
//! The form mirrors what the admin types: every slot is raw text. Blank
//! slots and variations whose price does not parse are dropped when the form
//! is turned into a [`ProductInput`]; what survives goes through the
//! catalog's own validation.

use personalistar_core::{
    CatalogStore, Price, Product, ProductId, ProductInput, ProductVariation, ShippingOption,
    ValidationError,
};

/// A repeated field group of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotGroup {
    ImageUrls,
    Details,
    Variations,
}

impl SlotGroup {
    const fn name(self) -> &'static str {
        match self {
            Self::ImageUrls => "imageUrls",
            Self::Details => "details",
            Self::Variations => "variations",
        }
    }

    /// Groups that must keep at least one slot on screen.
    #[must_use]
    pub const fn keeps_one(self) -> bool {
        matches!(self, Self::ImageUrls | Self::Variations)
    }
}

/// One variation row as typed. Prices are text, e.g. `"25,50"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationSlot {
    pub name: String,
    pub price: String,
    pub discount_price: String,
}

impl VariationSlot {
    fn from_variation(variation: &ProductVariation) -> Self {
        Self {
            name: variation.name.clone(),
            price: variation.price.amount().to_string(),
            discount_price: variation
                .discount_price
                .map(|p| p.amount().to_string())
                .unwrap_or_default(),
        }
    }

    /// The variation this row describes, if it has a name and a positive price.
    fn parse(&self) -> Option<ProductVariation> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let price = match Price::parse_form(&self.price) {
            Ok(price) => price,
            Err(e) => {
                tracing::debug!(variation = %name, error = %e, "Dropping variation without a valid price");
                return None;
            }
        };
        let discount_price = if self.discount_price.trim().is_empty() {
            None
        } else {
            Price::parse_form(&self.discount_price).ok()
        };
        Some(ProductVariation {
            name: name.to_string(),
            price,
            discount_price,
        })
    }
}

/// Draft of a new product, or of changes to an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductEditor {
    editing: Option<ProductId>,
    pub name: String,
    pub code: String,
    pub description: String,
    pub shipping: ShippingOption,
    image_urls: Vec<String>,
    details: Vec<String>,
    variations: Vec<VariationSlot>,
}

impl Default for ProductEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductEditor {
    /// Empty form: one blank slot per group, shipping to be arranged.
    #[must_use]
    pub fn new() -> Self {
        Self {
            editing: None,
            name: String::new(),
            code: String::new(),
            description: String::new(),
            shipping: ShippingOption::Negotiate,
            image_urls: vec![String::new()],
            details: vec![String::new()],
            variations: vec![VariationSlot::default()],
        }
    }

    /// Form pre-filled from an existing product; submitting updates it.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        let mut details = product.details.clone();
        if details.is_empty() {
            details.push(String::new());
        }
        Self {
            editing: Some(product.id),
            name: product.name.clone(),
            code: product.code.clone(),
            description: product.description.clone(),
            shipping: product.shipping,
            image_urls: product.image_gallery.clone(),
            details,
            variations: product
                .variations
                .iter()
                .map(VariationSlot::from_variation)
                .collect(),
        }
    }

    /// Product being edited, `None` for a new product.
    #[must_use]
    pub const fn editing(&self) -> Option<ProductId> {
        self.editing
    }

    #[must_use]
    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    #[must_use]
    pub fn variations(&self) -> &[VariationSlot] {
        &self.variations
    }

    /// Number of slots in `group`.
    #[must_use]
    pub fn slot_count(&self, group: SlotGroup) -> usize {
        match group {
            SlotGroup::ImageUrls => self.image_urls.len(),
            SlotGroup::Details => self.details.len(),
            SlotGroup::Variations => self.variations.len(),
        }
    }

    /// Append a blank slot to `group` and return its index.
    pub fn add_slot(&mut self, group: SlotGroup) -> usize {
        match group {
            SlotGroup::ImageUrls => self.image_urls.push(String::new()),
            SlotGroup::Details => self.details.push(String::new()),
            SlotGroup::Variations => self.variations.push(VariationSlot::default()),
        }
        self.slot_count(group) - 1
    }

    /// Remove slot `index` from `group`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::SlotOutOfRange` for a missing slot and
    /// `ValidationError::LastSlot` when the slot is the last image URL or the
    /// last variation.
    pub fn remove_slot(&mut self, group: SlotGroup, index: usize) -> Result<(), ValidationError> {
        let len = self.slot_count(group);
        if index >= len {
            return Err(ValidationError::SlotOutOfRange {
                group: group.name(),
                index,
            });
        }
        if group.keeps_one() && len == 1 {
            return Err(ValidationError::LastSlot {
                group: group.name(),
            });
        }
        match group {
            SlotGroup::ImageUrls => {
                self.image_urls.remove(index);
            }
            SlotGroup::Details => {
                self.details.remove(index);
            }
            SlotGroup::Variations => {
                self.variations.remove(index);
            }
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError::SlotOutOfRange` for a missing slot.
    pub fn set_image_url(&mut self, index: usize, url: &str) -> Result<(), ValidationError> {
        let slot = self
            .image_urls
            .get_mut(index)
            .ok_or(ValidationError::SlotOutOfRange {
                group: SlotGroup::ImageUrls.name(),
                index,
            })?;
        url.clone_into(slot);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError::SlotOutOfRange` for a missing slot.
    pub fn set_detail(&mut self, index: usize, line: &str) -> Result<(), ValidationError> {
        let slot = self
            .details
            .get_mut(index)
            .ok_or(ValidationError::SlotOutOfRange {
                group: SlotGroup::Details.name(),
                index,
            })?;
        line.clone_into(slot);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError::SlotOutOfRange` for a missing slot.
    pub fn set_variation(
        &mut self,
        index: usize,
        variation: VariationSlot,
    ) -> Result<(), ValidationError> {
        let slot = self
            .variations
            .get_mut(index)
            .ok_or(ValidationError::SlotOutOfRange {
                group: SlotGroup::Variations.name(),
                index,
            })?;
        *slot = variation;
        Ok(())
    }

    /// Filter the form into catalog input.
    ///
    /// Blank image URLs and details are dropped. A variation survives only
    /// with a non-blank name and a positive price; a discount that does not
    /// parse is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoImageProvided` when every image slot is
    /// blank and `ValidationError::NoValidVariation` when no variation
    /// survives.
    pub fn build_input(&self) -> Result<ProductInput, ValidationError> {
        let image_gallery: Vec<String> = non_blank(&self.image_urls);
        if image_gallery.is_empty() {
            return Err(ValidationError::NoImageProvided);
        }

        let details = non_blank(&self.details);

        let variations: Vec<ProductVariation> =
            self.variations.iter().filter_map(VariationSlot::parse).collect();
        if variations.is_empty() {
            return Err(ValidationError::NoValidVariation);
        }

        Ok(ProductInput {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            description: self.description.trim().to_string(),
            details,
            image_gallery,
            shipping: self.shipping,
            variations,
        })
    }

    /// Validate the form and write it to the catalog.
    ///
    /// Creates a product for a new form and updates the product being edited
    /// otherwise. Returns `Ok(None)` if the edited product no longer exists.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` from [`build_input`](Self::build_input)
    /// or from the catalog. The catalog is unchanged on error.
    pub fn submit(&self, catalog: &CatalogStore) -> Result<Option<Product>, ValidationError> {
        let input = self.build_input()?;
        match self.editing {
            None => {
                let product = catalog.create(input)?;
                tracing::info!(product_id = %product.id, name = %product.name, "Product created");
                Ok(Some(product))
            }
            Some(id) => {
                let updated = catalog.update(id, input)?;
                match &updated {
                    Some(product) => {
                        tracing::info!(product_id = %id, name = %product.name, "Product updated");
                    }
                    None => tracing::warn!(product_id = %id, "Edited product no longer exists"),
                }
                Ok(updated)
            }
        }
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> ProductEditor {
        let mut editor = ProductEditor::new();
        editor.name = "Caixa Kraft".to_string();
        editor.code = "CX-100".to_string();
        editor.description = "Caixa personalizada".to_string();
        editor.set_image_url(0, "https://img/caixa.jpg").unwrap();
        editor
            .set_variation(
                0,
                VariationSlot {
                    name: "Caixa 100un".to_string(),
                    price: "25.50".to_string(),
                    discount_price: String::new(),
                },
            )
            .unwrap();
        editor
    }

    #[test]
    fn test_new_form_has_one_slot_each() {
        let editor = ProductEditor::new();
        assert_eq!(editor.slot_count(SlotGroup::ImageUrls), 1);
        assert_eq!(editor.slot_count(SlotGroup::Details), 1);
        assert_eq!(editor.slot_count(SlotGroup::Variations), 1);
        assert_eq!(editor.shipping, ShippingOption::Negotiate);
    }

    #[test]
    fn test_blank_images_rejected_without_touching_catalog() {
        let catalog = CatalogStore::new();
        let mut editor = filled();
        editor.set_image_url(0, "   ").unwrap();
        editor.add_slot(SlotGroup::ImageUrls);

        assert_eq!(
            editor.submit(&catalog),
            Err(ValidationError::NoImageProvided)
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_blank_variation_slot_dropped() {
        let catalog = CatalogStore::new();
        let mut editor = filled();
        editor.add_slot(SlotGroup::Variations);

        let product = editor.submit(&catalog).unwrap().unwrap();
        assert_eq!(product.variations.len(), 1);
        assert_eq!(product.variations[0].price, Price::from_cents(2550).unwrap());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_malformed_and_zero_prices_dropped() {
        let mut editor = filled();
        let second = editor.add_slot(SlotGroup::Variations);
        editor
            .set_variation(
                second,
                VariationSlot {
                    name: "Caixa 500un".to_string(),
                    price: "abc".to_string(),
                    discount_price: String::new(),
                },
            )
            .unwrap();
        let third = editor.add_slot(SlotGroup::Variations);
        editor
            .set_variation(
                third,
                VariationSlot {
                    name: "Grátis".to_string(),
                    price: "0".to_string(),
                    discount_price: String::new(),
                },
            )
            .unwrap();

        let input = editor.build_input().unwrap();
        assert_eq!(input.variations.len(), 1);
        assert_eq!(input.variations[0].name, "Caixa 100un");
    }

    #[test]
    fn test_no_surviving_variation_rejected() {
        let mut editor = filled();
        editor.set_variation(0, VariationSlot::default()).unwrap();
        assert_eq!(editor.build_input(), Err(ValidationError::NoValidVariation));
    }

    #[test]
    fn test_comma_price_and_discount() {
        let mut editor = filled();
        editor
            .set_variation(
                0,
                VariationSlot {
                    name: "Caixa 100un".to_string(),
                    price: "25,50".to_string(),
                    discount_price: " 23,90 ".to_string(),
                },
            )
            .unwrap();

        let variation = &editor.build_input().unwrap().variations[0];
        assert_eq!(variation.price, Price::from_cents(2550).unwrap());
        assert_eq!(variation.discount_price, Some(Price::from_cents(2390).unwrap()));
    }

    #[test]
    fn test_invalid_discount_ignored() {
        let mut editor = filled();
        editor
            .set_variation(
                0,
                VariationSlot {
                    name: "Caixa 100un".to_string(),
                    price: "25.50".to_string(),
                    discount_price: "-1".to_string(),
                },
            )
            .unwrap();

        let variation = &editor.build_input().unwrap().variations[0];
        assert_eq!(variation.discount_price, None);
    }

    #[test]
    fn test_details_filtered_and_gallery_ordered() {
        let mut editor = filled();
        editor.set_detail(0, "Material: Kraft").unwrap();
        editor.add_slot(SlotGroup::Details);
        let second = editor.add_slot(SlotGroup::ImageUrls);
        editor.set_image_url(second, "https://img/verso.jpg").unwrap();

        let input = editor.build_input().unwrap();
        assert_eq!(input.details, ["Material: Kraft"]);
        assert_eq!(
            input.image_gallery,
            ["https://img/caixa.jpg", "https://img/verso.jpg"]
        );
    }

    #[test]
    fn test_last_required_slot_cannot_be_removed() {
        let mut editor = ProductEditor::new();
        assert_eq!(
            editor.remove_slot(SlotGroup::ImageUrls, 0),
            Err(ValidationError::LastSlot { group: "imageUrls" })
        );
        assert_eq!(
            editor.remove_slot(SlotGroup::Variations, 0),
            Err(ValidationError::LastSlot { group: "variations" })
        );
        editor.remove_slot(SlotGroup::Details, 0).unwrap();
        assert_eq!(editor.slot_count(SlotGroup::Details), 0);

        assert!(matches!(
            editor.remove_slot(SlotGroup::Details, 0),
            Err(ValidationError::SlotOutOfRange { .. })
        ));
    }

    #[test]
    fn test_remove_slot_shifts_later_slots() {
        let mut editor = filled();
        let second = editor.add_slot(SlotGroup::ImageUrls);
        editor.set_image_url(second, "b.jpg").unwrap();
        editor.remove_slot(SlotGroup::ImageUrls, 0).unwrap();
        assert_eq!(editor.image_urls(), ["b.jpg"]);
    }

    #[test]
    fn test_edit_updates_in_place() {
        let catalog = CatalogStore::new();
        let original = filled().submit(&catalog).unwrap().unwrap();
        let other = filled().submit(&catalog).unwrap().unwrap();

        let mut editor = ProductEditor::edit(&original);
        assert_eq!(editor.editing(), Some(original.id));
        assert_eq!(editor.variations()[0].price, "25.50");
        editor.name = "Caixa Kraft Premium".to_string();

        let updated = editor.submit(&catalog).unwrap().unwrap();
        assert_eq!(updated.id, original.id);
        let list = catalog.list();
        assert_eq!(list[0].name, "Caixa Kraft Premium");
        assert_eq!(list[1], other);
    }

    #[test]
    fn test_edit_of_deleted_product_is_noop() {
        let catalog = CatalogStore::new();
        let product = filled().submit(&catalog).unwrap().unwrap();
        let editor = ProductEditor::edit(&product);
        catalog.delete(product.id);

        assert_eq!(editor.submit(&catalog), Ok(None));
        assert!(catalog.is_empty());
    }
}
