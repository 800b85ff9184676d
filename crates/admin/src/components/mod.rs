//! View-model components for the admin console.

pub mod data_table;

pub use data_table::{DataTableConfig, ProductRow, TableColumn, products_table_config};
