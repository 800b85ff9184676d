//! Data table component types.
//!
//! These types define the configuration and rows of the product table shown
//! in the admin console.

use serde::{Deserialize, Serialize};

use personalistar_core::{Product, ProductId};

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is visible by default.
    pub default_visible: bool,
}

impl TableColumn {
    /// Create a new visible column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            default_visible: true,
        }
    }

    /// Set whether the column is visible by default.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            empty_title: "Nenhum item encontrado".to_string(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Get default visible columns.
    #[must_use]
    pub fn default_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.default_visible)
            .map(|c| c.key.clone())
            .collect()
    }
}

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub variation_count: usize,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            code: product.code.clone(),
            variation_count: product.variations.len(),
        }
    }
}

impl ProductRow {
    /// Cell text for the column `key`, in table order.
    #[must_use]
    pub fn cell(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "code" => Some(self.code.clone()),
            "variations" => Some(self.variation_count.to_string()),
            "id" => Some(self.id.to_string()),
            _ => None,
        }
    }
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    DataTableConfig::new("products")
        .column(TableColumn::new("name", "Nome"))
        .column(TableColumn::new("code", "Código"))
        .column(TableColumn::new("variations", "Variações"))
        .column(TableColumn::new("id", "ID").visible(false))
        .empty_state(
            "Nenhum produto cadastrado",
            Some("Adicione o primeiro produto para exibi-lo na loja."),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_products_table_columns() {
        let config = products_table_config();
        assert_eq!(config.table_id, "products");
        assert_eq!(config.default_columns(), ["name", "code", "variations"]);
        assert_eq!(config.columns[1].label, "Código");
    }

    #[test]
    fn test_row_cells() {
        let row = ProductRow {
            id: ProductId::generate(),
            name: "Caneca".to_string(),
            code: "CN-01".to_string(),
            variation_count: 2,
        };
        assert_eq!(row.cell("variations").as_deref(), Some("2"));
        assert_eq!(row.cell("name").as_deref(), Some("Caneca"));
        assert_eq!(row.cell("preço"), None);
    }
}
