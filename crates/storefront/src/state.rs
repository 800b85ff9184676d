//! Application state shared across page renders.

use std::sync::Arc;

use personalistar_core::{CatalogStore, ConfigStore, ProductId, SiteConfig};

use crate::carousel::CarouselTimer;
use crate::config::StorefrontConfig;
use crate::pages::{DetailSelection, HomePage, Layout, Page, ProductPage, ProductsPage, Visitor};

/// Read-only handle on the content stores.
///
/// This struct is cheaply cloneable via `Arc`. Every render takes one
/// snapshot of each store, so a page never mixes two configurations.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    site: ConfigStore,
    catalog: CatalogStore,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("products", &self.inner.catalog.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create a new application state over shared stores.
    #[must_use]
    pub fn new(config: StorefrontConfig, site: ConfigStore, catalog: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                site,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    fn wrap<T>(&self, site: &SiteConfig, visitor: Visitor, path: &str, body: T) -> Page<T> {
        Page {
            layout: Layout::new(site, &self.inner.config, visitor, path),
            body,
        }
    }

    /// Render `/` with banner `slide_index` on screen.
    #[must_use]
    pub fn home(&self, visitor: Visitor, slide_index: usize) -> Page<HomePage> {
        let site = self.inner.site.get();
        let products = self.inner.catalog.list();
        let body = HomePage::new(&site, &products, &self.inner.config, slide_index);
        self.wrap(&site, visitor, "/", body)
    }

    /// Render `/products`.
    #[must_use]
    pub fn products(&self, visitor: Visitor) -> Page<ProductsPage> {
        let site = self.inner.site.get();
        let body = ProductsPage::new(&self.inner.catalog.list());
        self.wrap(&site, visitor, "/products", body)
    }

    /// Render `/product/<id>`.
    ///
    /// An id that does not parse or names no product yields the
    /// "not found" page.
    #[must_use]
    pub fn product(
        &self,
        visitor: Visitor,
        id: &str,
        selection: &DetailSelection,
    ) -> Page<ProductPage> {
        let site = self.inner.site.get();
        let product = id
            .parse::<ProductId>()
            .ok()
            .and_then(|id| self.inner.catalog.get(id));
        if product.is_none() {
            tracing::debug!(id, "Product page requested for unknown id");
        }
        let body = ProductPage::new(product.as_ref(), selection);
        self.wrap(&site, visitor, &format!("/product/{id}"), body)
    }

    /// Start a carousel timer over the banner slides.
    ///
    /// The timer follows slide changes committed while it runs. Drop it
    /// when the home page is no longer displayed.
    #[must_use]
    pub fn carousel_timer(&self) -> CarouselTimer {
        let site = self.inner.site.clone();
        CarouselTimer::spawn_with(
            Arc::new(move || site.get().banner_slides().len()),
            self.inner.config.carousel_interval,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use personalistar_core::{
        BannerSlide, Price, ProductInput, ProductVariation, ShippingOption,
    };

    use super::*;

    fn state() -> AppState {
        AppState::new(
            StorefrontConfig::default(),
            ConfigStore::default(),
            CatalogStore::new(),
        )
    }

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            code: "X-1".to_string(),
            description: "Descrição".to_string(),
            details: Vec::new(),
            image_gallery: vec!["x.png".to_string()],
            shipping: ShippingOption::PaidShipping,
            variations: vec![ProductVariation {
                name: "100 Unidades".to_string(),
                price: Price::from_cents(4990).unwrap(),
                discount_price: None,
            }],
        }
    }

    #[test]
    fn test_unknown_or_malformed_id_not_found() {
        let state = state();
        let selection = DetailSelection::default();
        let page = state.product(Visitor::Anonymous, "nope", &selection);
        assert!(!page.body.is_found());

        let missing = ProductId::generate().to_string();
        let page = state.product(Visitor::Anonymous, &missing, &selection);
        assert!(!page.body.is_found());
    }

    #[test]
    fn test_pages_reflect_store_changes() {
        let site = ConfigStore::default();
        let catalog = CatalogStore::new();
        let state = AppState::new(StorefrontConfig::default(), site.clone(), catalog.clone());

        let product = catalog.create(input("Adesivo")).unwrap();
        let page = state.product(
            Visitor::Admin,
            &product.id.to_string(),
            &DetailSelection::default(),
        );
        assert!(page.body.is_found());
        assert_eq!(page.layout.header.session_links.len(), 2);

        let mut config = (*site.get()).clone();
        config.theme.primary_color = "#000000".to_string();
        site.replace(config).unwrap();
        let page = state.products(Visitor::Anonymous);
        assert_eq!(page.layout.theme.primary_color, "#000000");
        assert_eq!(page.body.cards.len(), 1);

        catalog.delete(product.id);
        assert!(state.products(Visitor::Anonymous).body.cards.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousel_timer_uses_configured_interval() {
        let state = state();
        let timer = state.carousel_timer();
        let mut position = timer.subscribe();
        let start = tokio::time::Instant::now();
        position.changed().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(5));
        let home = state.home(Visitor::Anonymous, timer.current());
        assert_eq!(home.body.carousel.unwrap().current.headline, "Personalize");
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousel_timer_reaches_slide_added_while_running() {
        let site = ConfigStore::default();
        let state = AppState::new(StorefrontConfig::default(), site.clone(), CatalogStore::new());
        let timer = state.carousel_timer();
        let mut position = timer.subscribe();

        let mut config = (*site.get()).clone();
        config.content.home.banner_slides.push(BannerSlide {
            title: "Terceiro Banner".to_string(),
            ..BannerSlide::default()
        });
        site.replace(config).unwrap();

        let mut shown = Vec::new();
        for _ in 0..3 {
            position.changed().await.unwrap();
            shown.push(*position.borrow_and_update());
        }
        assert_eq!(shown, [1, 2, 0]);

        assert!(timer.go_to(2));
        position.changed().await.unwrap();
        let home = state.home(Visitor::Anonymous, *position.borrow_and_update());
        assert_eq!(home.body.carousel.unwrap().current.headline, "Terceiro");
    }
}
