use serde::{Deserialize, Serialize};

use super::product::Product;

/// One (product, quantity) pairing held client-side pending checkout.
///
/// The product is a snapshot taken from the cached catalog at add time.
/// Its `stock` field is authoritative only until the next server round
/// trip; the backend revalidates at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,

    /// Always positive; an entry that would drop to zero is removed instead.
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The client-side cart: an ordered collection of entries, unique by
/// product id. Created empty, mutated only through explicit operations,
/// cleared wholesale on successful checkout. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub entries: Vec<CartEntry>,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct cart lines (not the summed quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn get(&self, product_id: u32) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    pub(crate) fn get_mut(&mut self, product_id: u32) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product.id == product_id)
    }

    #[must_use]
    pub fn position(&self, product_id: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.product.id == product_id)
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
