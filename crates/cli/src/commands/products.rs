//! Catalog commands.
//!
//! Products are described by a YAML form that fills the same editor the
//! admin console uses, so blank slots and unparseable prices are dropped the
//! same way:
//!
//! ```yaml
//! name: Cartão de Visita
//! code: CV-001
//! description: Couchê 300g com verniz localizado
//! shipping: free_shipping        # or "Frete Grátis"
//! imageUrls:
//!   - https://example.com/cartao.png
//! details:
//!   - "Papel: Couchê 300g"
//! variations:
//!   - name: 1000 Unidades
//!     price: "80,00"
//!     discountPrice: 76
//! ```
//!
//! When editing, omitted keys keep the product's current values.

use std::error::Error;
use std::path::Path;

use personalistar_admin::components::ProductRow;
use personalistar_admin::services::{ProductEditor, SlotGroup, VariationSlot};
use personalistar_core::{ProductId, ShippingOption, ValidationError};
use serde::Deserialize;
use tracing::info;

use super::{Context, emit, finish};

/// A price as written in YAML: `"25,50"`, `"25.50"` or `25.5`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceText {
    Text(String),
    Number(serde_yaml::Number),
}

impl std::fmt::Display for PriceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationForm {
    pub name: String,
    pub price: PriceText,
    #[serde(default)]
    pub discount_price: Option<PriceText>,
}

impl From<VariationForm> for VariationSlot {
    fn from(form: VariationForm) -> Self {
        Self {
            name: form.name,
            price: form.price.to_string(),
            discount_price: form
                .discount_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Product form read from a YAML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductForm {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub shipping: Option<ShippingOption>,
    pub image_urls: Option<Vec<String>>,
    pub details: Option<Vec<String>>,
    pub variations: Option<Vec<VariationForm>>,
}

impl ProductForm {
    /// Parse a form from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the YAML error for malformed text or unknown keys.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Copy every given key into `editor`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the editor rejects a slot change.
    pub fn apply(self, editor: &mut ProductEditor) -> Result<(), ValidationError> {
        if let Some(name) = self.name {
            editor.name = name;
        }
        if let Some(code) = self.code {
            editor.code = code;
        }
        if let Some(description) = self.description {
            editor.description = description;
        }
        if let Some(shipping) = self.shipping {
            editor.shipping = shipping;
        }

        if let Some(urls) = self.image_urls {
            let slots = resize(editor, SlotGroup::ImageUrls, urls.len())?;
            for index in 0..slots {
                editor.set_image_url(index, urls.get(index).map_or("", String::as_str))?;
            }
        }
        if let Some(details) = self.details {
            let slots = resize(editor, SlotGroup::Details, details.len())?;
            for index in 0..slots {
                editor.set_detail(index, details.get(index).map_or("", String::as_str))?;
            }
        }
        if let Some(variations) = self.variations {
            let slots = resize(editor, SlotGroup::Variations, variations.len())?;
            let mut variations = variations.into_iter().map(VariationSlot::from);
            for index in 0..slots {
                editor.set_variation(index, variations.next().unwrap_or_default())?;
            }
        }
        Ok(())
    }
}

/// Grow or shrink `group` to `len` slots, keeping the groups that need one
/// at a single slot minimum. Returns the resulting slot count.
fn resize(
    editor: &mut ProductEditor,
    group: SlotGroup,
    len: usize,
) -> Result<usize, ValidationError> {
    let target = len.max(usize::from(group.keeps_one()));
    while editor.slot_count(group) > target {
        editor.remove_slot(group, editor.slot_count(group) - 1)?;
    }
    while editor.slot_count(group) < target {
        editor.add_slot(group);
    }
    Ok(target)
}

async fn read_form(file: &Path) -> Result<ProductForm, Box<dyn Error>> {
    if !tokio::fs::try_exists(file).await? {
        return Err(format!("File not found: {}", file.display()).into());
    }
    info!(path = %file.display(), "Loading product form");
    let content = tokio::fs::read_to_string(file).await?;
    Ok(ProductForm::from_yaml(&content)?)
}

fn parse_id(id: &str) -> Result<ProductId, Box<dyn Error>> {
    id.parse()
        .map_err(|_| format!("Invalid product id: {id}").into())
}

/// Print the product table, tab separated, in catalog order.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read.
pub async fn list(ctx: &Context) -> Result<(), Box<dyn Error>> {
    let (_, catalog) = ctx.read().await?;
    let table = personalistar_admin::components::products_table_config();
    let products = catalog.list();

    if products.is_empty() {
        emit(&table.empty_title)?;
        return Ok(());
    }

    let header: Vec<&str> = table.columns.iter().map(|c| c.label.as_str()).collect();
    emit(&header.join("\t"))?;
    for product in products.iter() {
        let row = ProductRow::from(product);
        let cells: Vec<String> = table
            .columns
            .iter()
            .map(|c| row.cell(&c.key).unwrap_or_default())
            .collect();
        emit(&cells.join("\t"))?;
    }
    Ok(())
}

/// Create a product from a YAML form and print its id.
///
/// # Errors
///
/// Returns an error if login fails, the form is invalid, or the snapshot
/// cannot be written.
pub async fn add(ctx: &Context, file: &Path) -> Result<(), Box<dyn Error>> {
    let form = read_form(file).await?;
    let console = ctx.login().await?;

    let mut editor = console.new_product();
    form.apply(&mut editor)?;
    let product = console
        .submit_product(&editor)?
        .ok_or("Product was not created")?;

    emit(&product.id.to_string())?;
    finish(console).await
}

/// Apply a YAML form to an existing product.
///
/// # Errors
///
/// Returns an error if login fails, the id is unknown, the form is invalid,
/// or the snapshot cannot be written.
pub async fn edit(ctx: &Context, id: &str, file: &Path) -> Result<(), Box<dyn Error>> {
    let id = parse_id(id)?;
    let form = read_form(file).await?;
    let console = ctx.login().await?;

    let mut editor = console.edit_product(id)?;
    form.apply(&mut editor)?;
    console
        .submit_product(&editor)?
        .ok_or_else(|| format!("Product {id} no longer exists"))?;

    finish(console).await
}

/// Delete a product. An unknown id is reported but is not an error.
///
/// # Errors
///
/// Returns an error if the id does not parse, login fails, or the snapshot
/// cannot be written.
pub async fn delete(ctx: &Context, id: &str) -> Result<(), Box<dyn Error>> {
    let id = parse_id(id)?;
    let console = ctx.login().await?;

    if console.delete_product(id) {
        finish(console).await
    } else {
        info!(product_id = %id, "No product with this id; nothing to delete");
        console.logout();
        Ok(())
    }
}
