pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    cart::{Cart, CartEntry},
    order::{CheckoutReceipt, CheckoutReport, OrderLine},
    product::{CatalogSortOrder, Product},
    settings::Settings,
    summary::CartSummary,
};
use providers::traits::StoreBackend;
use services::{
    cart_service::CartService, catalog_service::CatalogService,
    checkout_service::CheckoutService,
};

use errors::StoreError;

/// Main entry point for the Storefront core library.
/// Holds the cached catalog, the cart, and the services that operate on
/// them; a frontend keeps one instance per page/session.
///
/// Every mutation requires `&mut self`, including the async ones, so
/// operations are serialized by the borrow itself: a second add/update
/// cannot start while a network-bound add still holds the exclusive
/// borrow across its await.
#[must_use]
pub struct Storefront {
    catalog: Vec<Product>,
    cart: Cart,
    wishlist: Vec<Product>,
    settings: Settings,
    cart_service: CartService,
    catalog_service: CatalogService,
    checkout_service: CheckoutService,
    backend: Box<dyn StoreBackend>,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("backend", &self.backend.name())
            .field("catalog", &self.catalog.len())
            .field("cart_lines", &self.cart.len())
            .field("wishlist", &self.wishlist.len())
            .field("tax_rate", &self.settings.tax_rate)
            .finish()
    }
}

impl Storefront {
    /// Create a storefront with an empty cart and catalog, using the
    /// default settings (18% GST).
    pub fn new(backend: Box<dyn StoreBackend>) -> Self {
        Self::with_settings(backend, Settings::default())
    }

    /// Create a storefront with explicit settings (e.g., a tax-free
    /// variant).
    pub fn with_settings(backend: Box<dyn StoreBackend>, settings: Settings) -> Self {
        Self {
            catalog: Vec::new(),
            cart: Cart::new(),
            wishlist: Vec::new(),
            settings,
            cart_service: CartService::new(),
            catalog_service: CatalogService::new(),
            checkout_service: CheckoutService::new(),
            backend,
        }
    }

    // ── Catalog ─────────────────────────────────────────────────────

    /// Fetch the catalog from the backend and replace the local cache.
    /// Returns the number of products fetched.
    ///
    /// The cache is the sole source of truth for price and stock until
    /// the next refresh. Cart entries keep the snapshot they were added
    /// with; a refresh does not rewrite them.
    pub async fn refresh_catalog(&mut self) -> Result<usize, StoreError> {
        let fetched = self.backend.fetch_products().await?;
        let catalog = self.catalog_service.normalize(fetched)?;
        tracing::debug!(
            backend = self.backend.name(),
            products = catalog.len(),
            "catalog refreshed"
        );
        self.catalog = catalog;
        Ok(self.catalog.len())
    }

    /// The cached catalog, in backend order.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Look up a cached product by id.
    #[must_use]
    pub fn product(&self, product_id: u32) -> Option<&Product> {
        self.catalog_service.find(&self.catalog, product_id)
    }

    /// Products matching a name/category substring (case-insensitive).
    #[must_use]
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        self.catalog_service.search(&self.catalog, query)
    }

    /// The full catalog in a given sort order.
    #[must_use]
    pub fn products_sorted(&self, order: &CatalogSortOrder) -> Vec<&Product> {
        let all = self.catalog.iter().collect();
        self.catalog_service.sorted(all, order)
    }

    /// Search and sort combined, the way the product grid displays.
    #[must_use]
    pub fn filter_products(&self, query: &str, order: &CatalogSortOrder) -> Vec<&Product> {
        let matches = self.catalog_service.search(&self.catalog, query);
        self.catalog_service.sorted(matches, order)
    }

    // ── Cart ────────────────────────────────────────────────────────

    /// Add `quantity` units of a product to the cart, combining with an
    /// existing entry for the same product. Fails without touching the
    /// cart if the product is unknown, the quantity is zero, or the
    /// combined quantity would exceed the cached stock.
    pub fn add_item(&mut self, product_id: u32, quantity: u32) -> Result<CartSummary, StoreError> {
        self.cart_service
            .add_item(&mut self.cart, &self.catalog, product_id, quantity)?;
        Ok(self.summary())
    }

    /// Like [`add_item`](Self::add_item), but confirms availability with
    /// the server before committing. Local validation runs first; the
    /// cart is only touched after the server accepts the quantity, so a
    /// rejection of either kind leaves it unchanged.
    pub async fn add_item_verified(
        &mut self,
        product_id: u32,
        quantity: u32,
    ) -> Result<CartSummary, StoreError> {
        self.cart_service
            .validate_add(&self.cart, &self.catalog, product_id, quantity)?;

        let line = OrderLine::new(product_id, quantity);
        self.checkout_service
            .verify_stock(self.backend.as_ref(), &line)
            .await?;

        self.cart_service
            .add_item(&mut self.cart, &self.catalog, product_id, quantity)?;
        Ok(self.summary())
    }

    /// Replace a cart entry's quantity. Zero removes the entry; a value
    /// above the cached stock is rejected with the entry unchanged.
    pub fn update_quantity(
        &mut self,
        product_id: u32,
        new_quantity: u32,
    ) -> Result<CartSummary, StoreError> {
        self.cart_service
            .update_quantity(&mut self.cart, &self.catalog, product_id, new_quantity)?;
        Ok(self.summary())
    }

    /// Remove a product's entry unconditionally. Idempotent: removing
    /// an absent product is a no-op. Returns `true` if an entry was
    /// removed.
    pub fn remove_item(&mut self, product_id: u32) -> bool {
        self.cart_service.remove_item(&mut self.cart, product_id)
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn cart_entries(&self) -> &[CartEntry] {
        &self.cart.entries
    }

    #[must_use]
    pub fn cart_is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Subtotal, tax, total, and item count for the current cart.
    /// Idempotent read: repeated calls without a mutation in between
    /// yield identical results.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart_service.summary(&self.cart, self.settings.tax_rate)
    }

    /// The order-submission payload: one record per cart line, in cart
    /// order.
    #[must_use]
    pub fn serialize_for_checkout(&self) -> Vec<OrderLine> {
        self.cart_service.serialize_for_checkout(&self.cart)
    }

    // ── Checkout ────────────────────────────────────────────────────

    /// Submit the whole cart in a single call so the backend can apply
    /// it atomically. On success the cart is cleared and the catalog is
    /// refreshed to pick up the decremented stock; a refresh failure is
    /// logged rather than surfaced, since the order already went
    /// through.
    pub async fn checkout(&mut self) -> Result<CheckoutReceipt, StoreError> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let lines = self.cart_service.serialize_for_checkout(&self.cart);
        let receipt = self
            .checkout_service
            .submit_batch(self.backend.as_ref(), &lines)
            .await?;

        self.cart.clear();
        if let Err(err) = self.refresh_catalog().await {
            tracing::warn!(error = %err, "catalog refresh after checkout failed");
        }
        Ok(receipt)
    }

    /// Submit the cart one line at a time, each call awaiting the prior
    /// response. Best-effort and non-atomic: a mid-loop failure leaves
    /// earlier submissions applied on the server. Lines that did reach
    /// the server are dropped from the local cart so a retry cannot
    /// double-submit them; the report says exactly what happened to
    /// every line.
    pub async fn checkout_sequential(&mut self) -> Result<CheckoutReport, StoreError> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let lines = self.cart_service.serialize_for_checkout(&self.cart);
        let report = self
            .checkout_service
            .submit_sequential(self.backend.as_ref(), &lines)
            .await;

        for line in &report.submitted {
            self.cart_service.remove_item(&mut self.cart, line.product_id);
        }

        if report.is_complete() {
            if let Err(err) = self.refresh_catalog().await {
                tracing::warn!(error = %err, "catalog refresh after checkout failed");
            }
        }
        Ok(report)
    }

    // ── Wishlist ────────────────────────────────────────────────────

    /// Toggle a product on or off the wishlist. Returns `true` when the
    /// product was added, `false` when it was removed.
    pub fn toggle_wishlist(&mut self, product_id: u32) -> Result<bool, StoreError> {
        if let Some(idx) = self.wishlist.iter().position(|p| p.id == product_id) {
            self.wishlist.remove(idx);
            return Ok(false);
        }

        let product = self
            .catalog_service
            .find(&self.catalog, product_id)
            .ok_or(StoreError::UnknownProduct { id: product_id })?;
        self.wishlist.push(product.clone());
        Ok(true)
    }

    /// Wishlisted products, in toggle order.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Set the tax rate applied to the cart subtotal (a fraction, e.g.
    /// 0.18 for 18% GST). Must be finite and non-negative.
    pub fn set_tax_rate(&mut self, rate: f64) -> Result<(), StoreError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(StoreError::InvalidTaxRate(format!(
                "{rate} — must be a finite, non-negative fraction"
            )));
        }
        self.settings.tax_rate = rate;
        Ok(())
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
