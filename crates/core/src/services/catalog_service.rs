use crate::errors::StoreError;
use crate::models::product::{CatalogSortOrder, Product};

/// Read-side catalog operations: normalization at the fetch boundary,
/// lookup, search, and sorting.
///
/// Pure business logic over the cached product list — no I/O.
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a freshly fetched catalog before it replaces the cache.
    ///
    /// Field casing is already normalized by deserialization; this
    /// checks the values: every price must be finite and non-negative.
    pub fn normalize(&self, products: Vec<Product>) -> Result<Vec<Product>, StoreError> {
        for product in &products {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(StoreError::Deserialization(format!(
                    "Invalid price {} for product {} ({})",
                    product.price, product.id, product.name
                )));
            }
        }
        Ok(products)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find<'a>(&self, catalog: &'a [Product], product_id: u32) -> Option<&'a Product> {
        catalog.iter().find(|p| p.id == product_id)
    }

    /// Products whose name or category contains the query
    /// (case-insensitive). An empty query matches everything.
    #[must_use]
    pub fn search<'a>(&self, catalog: &'a [Product], query: &str) -> Vec<&'a Product> {
        let q = query.to_lowercase();
        catalog
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&q) || p.category.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Sort a product listing for display. `Default` keeps catalog order.
    #[must_use]
    pub fn sorted<'a>(
        &self,
        products: Vec<&'a Product>,
        order: &CatalogSortOrder,
    ) -> Vec<&'a Product> {
        let mut products = products;
        match order {
            CatalogSortOrder::Default => {}
            CatalogSortOrder::PriceAsc => products.sort_by(|a, b| {
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            CatalogSortOrder::PriceDesc => products.sort_by(|a, b| {
                b.price
                    .partial_cmp(&a.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            CatalogSortOrder::Category => {
                products.sort_by(|a, b| a.category.cmp(&b.category));
            }
        }
        products
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
