use serde::{Deserialize, Serialize};

/// Sort order for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSortOrder {
    /// Catalog order as returned by the backend (default for display)
    Default,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Alphabetical by category label
    Category,
}

/// A catalog product as reported by the storefront backend.
///
/// This is the canonical record: the backend variants disagree on field
/// casing (`id` vs Go-exported `ID`), so deserialization accepts both via
/// aliases and everything past this boundary uses the lowercase names.
///
/// **Equality and hashing** are based solely on `id`. Two snapshots of the
/// same product taken before and after a stock change still compare equal,
/// which is what cart and wishlist lookups rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    #[serde(alias = "ID")]
    pub id: u32,

    /// Display name (e.g., "Wireless Mouse")
    #[serde(alias = "Name")]
    pub name: String,

    /// Category label (e.g., "Electronics", "Grocery", "Fashion")
    #[serde(alias = "Category")]
    pub category: String,

    /// Unit price, non-negative
    #[serde(alias = "Price")]
    pub price: f64,

    /// Units available according to the last server snapshot
    #[serde(alias = "Stock")]
    pub stock: u32,
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl std::hash::Hash for Product {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }

    /// Whether at least one unit can currently be added to a cart.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
