use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{Product, ProductInput};
use crate::types::ProductId;
use crate::validation::ValidationError;

/// Owner of the ordered product collection.
///
/// Products are kept in insertion order. Every mutation builds a new vector
/// and swaps it in, so snapshots handed out by [`list`](Self::list) are
/// immutable.
#[derive(Clone, Default)]
pub struct CatalogStore {
    products: Arc<RwLock<Arc<Vec<Product>>>>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted products.
    ///
    /// # Errors
    ///
    /// Returns the first product that fails [`Product::validate`], or
    /// [`ValidationError::DuplicateId`] when two products share an id.
    pub fn restore(products: Vec<Product>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(ValidationError::DuplicateId(product.id));
            }
        }
        Ok(Self {
            products: Arc::new(RwLock::new(Arc::new(products))),
        })
    }

    /// All products in insertion order.
    #[must_use]
    pub fn list(&self) -> Arc<Vec<Product>> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.list().iter().find(|p| p.id == id).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Validate `input`, assign a fresh id and append the product.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`ProductInput::validate`]; the
    /// catalog is unchanged.
    pub fn create(&self, input: ProductInput) -> Result<Product, ValidationError> {
        input.validate()?;

        let mut guard = self.products.write().unwrap_or_else(PoisonError::into_inner);
        let mut id = ProductId::generate();
        while guard.iter().any(|p| p.id == id) {
            id = ProductId::generate();
        }

        let product = Product::from_input(id, input);
        let mut next = Vec::clone(&guard);
        next.push(product.clone());
        *guard = Arc::new(next);
        Ok(product)
    }

    /// Replace the editable fields of an existing product.
    ///
    /// The product keeps its id and its position. Returns `Ok(None)` when no
    /// product has `id`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] from [`ProductInput::validate`]; the
    /// catalog is unchanged.
    pub fn update(
        &self,
        id: ProductId,
        input: ProductInput,
    ) -> Result<Option<Product>, ValidationError> {
        input.validate()?;

        let mut guard = self.products.write().unwrap_or_else(PoisonError::into_inner);
        let Some(position) = guard.iter().position(|p| p.id == id) else {
            return Ok(None);
        };

        let product = Product::from_input(id, input);
        let mut next = Vec::clone(&guard);
        if let Some(slot) = next.get_mut(position) {
            *slot = product.clone();
        }
        *guard = Arc::new(next);
        Ok(Some(product))
    }

    /// Remove the product with `id`.
    ///
    /// Idempotent: returns `false` when nothing was removed.
    pub fn delete(&self, id: ProductId) -> bool {
        let mut guard = self.products.write().unwrap_or_else(PoisonError::into_inner);
        if !guard.iter().any(|p| p.id == id) {
            return false;
        }
        let next: Vec<Product> = guard.iter().filter(|p| p.id != id).cloned().collect();
        *guard = Arc::new(next);
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::ProductVariation;
    use crate::types::{Price, ShippingOption};

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_owned(),
            code: format!("{name}-01"),
            description: "Impressão colorida".to_owned(),
            details: Vec::new(),
            image_gallery: vec![format!("{name}.jpg")],
            shipping: ShippingOption::Negotiate,
            variations: vec![ProductVariation {
                name: "100 Unidades".to_owned(),
                price: Price::from_cents(2550).unwrap(),
                discount_price: None,
            }],
        }
    }

    #[test]
    fn test_create_appends_with_unique_id() {
        let store = CatalogStore::new();
        let a = store.create(input("Adesivo")).unwrap();
        let b = store.create(input("Caneca")).unwrap();

        assert_ne!(a.id, b.id);
        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], a);
        assert_eq!(list[1], b);
        assert_eq!(store.get(b.id), Some(b));
    }

    #[test]
    fn test_invalid_create_leaves_catalog() {
        let store = CatalogStore::new();
        store.create(input("Adesivo")).unwrap();

        let mut bad = input("Caneca");
        bad.image_gallery.clear();
        assert_eq!(store.create(bad), Err(ValidationError::NoImageProvided));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = CatalogStore::new();
        let a = store.create(input("Adesivo")).unwrap();
        let b = store.create(input("Caneca")).unwrap();

        assert!(store.delete(a.id));
        assert!(!store.delete(a.id));
        assert_eq!(*store.list(), vec![b]);
        assert!(!store.delete(ProductId::generate()));
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let store = CatalogStore::new();
        let a = store.create(input("Adesivo")).unwrap();
        let b = store.create(input("Caneca")).unwrap();

        let mut changed = a.to_input();
        changed.name = "Adesivo Vinil".to_owned();
        changed.image_gallery = vec!["x.jpg".to_owned(), "y.jpg".to_owned()];
        let updated = store.update(a.id, changed).unwrap().unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(updated.image_url, "x.jpg");
        let list = store.list();
        assert_eq!(list[0].name, "Adesivo Vinil");
        assert_eq!(list[1], b);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = CatalogStore::new();
        store.create(input("Adesivo")).unwrap();
        let before = store.list();

        assert_eq!(store.update(ProductId::generate(), input("Caneca")), Ok(None));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_writes() {
        let store = CatalogStore::new();
        let a = store.create(input("Adesivo")).unwrap();
        let snapshot = store.list();

        store.delete(a.id);
        assert_eq!(snapshot.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_rejects_duplicates_and_invalid() {
        let store = CatalogStore::new();
        let a = store.create(input("Adesivo")).unwrap();

        assert_eq!(
            CatalogStore::restore(vec![a.clone(), a.clone()]).unwrap_err(),
            ValidationError::DuplicateId(a.id)
        );

        let mut broken = a.clone();
        broken.image_url = "other.jpg".to_owned();
        assert_eq!(
            CatalogStore::restore(vec![broken]).unwrap_err(),
            ValidationError::PrimaryImageMismatch
        );

        let restored = CatalogStore::restore(vec![a.clone()]).unwrap();
        assert_eq!(restored.get(a.id), Some(a));
    }
}
