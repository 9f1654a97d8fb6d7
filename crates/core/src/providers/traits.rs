use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::order::OrderLine;
use crate::models::product::Product;

/// Trait abstraction over the storefront backend API.
///
/// The lab backends expose slightly different REST surfaces; everything
/// behind this trait is replaceable without touching cart or checkout
/// logic, and tests drive the library against an in-memory impl.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait StoreBackend: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the full product catalog. The sole source of truth for
    /// price and stock at the time of the fetch.
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Ask the server whether `line.quantity` units of the product are
    /// still available. Errors with the server's own message when not.
    async fn check_stock(&self, line: &OrderLine) -> Result<(), StoreError>;

    /// Submit a single order line.
    async fn submit_order(&self, line: &OrderLine) -> Result<(), StoreError>;

    /// Submit the whole cart in one call, letting the server apply it
    /// atomically.
    async fn submit_cart(&self, lines: &[OrderLine]) -> Result<(), StoreError>;
}
