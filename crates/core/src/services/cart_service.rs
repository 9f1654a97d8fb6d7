use crate::errors::StoreError;
use crate::models::cart::{Cart, CartEntry};
use crate::models::order::OrderLine;
use crate::models::product::Product;
use crate::models::summary::{round_cents, CartSummary};

/// Manages the cart: add/update/remove entries, totals, and the
/// checkout payload.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        Self
    }

    /// Check whether `quantity` units of a product could be added to the
    /// cart right now, without mutating anything.
    ///
    /// Rules:
    /// - Quantity must be positive
    /// - The product must exist in the cached catalog
    /// - The resulting line quantity (new or combined with an existing
    ///   entry) must not exceed the product's current stock
    ///
    /// Returns the resolved product on success so callers can reuse the
    /// snapshot.
    pub fn validate_add<'a>(
        &self,
        cart: &Cart,
        catalog: &'a [Product],
        product_id: u32,
        quantity: u32,
    ) -> Result<&'a Product, StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }

        let product = catalog
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(StoreError::UnknownProduct { id: product_id })?;

        let already_in_cart = cart.get(product_id).map_or(0, |e| e.quantity);
        let requested = already_in_cart.saturating_add(quantity);
        if requested > product.stock {
            return Err(StoreError::StockExceeded {
                id: product_id,
                requested,
                available: product.stock,
            });
        }

        Ok(product)
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// An entry for the product already present has its quantity
    /// increased instead of a second entry being inserted; the entry's
    /// product snapshot is refreshed from the catalog at the same time.
    /// Any validation failure leaves the cart unchanged.
    pub fn add_item(
        &self,
        cart: &mut Cart,
        catalog: &[Product],
        product_id: u32,
        quantity: u32,
    ) -> Result<(), StoreError> {
        let product = self
            .validate_add(cart, catalog, product_id, quantity)?
            .clone();

        match cart.get_mut(product_id) {
            Some(entry) => {
                entry.quantity += quantity;
                entry.product = product;
            }
            None => cart.entries.push(CartEntry::new(product, quantity)),
        }
        Ok(())
    }

    /// Replace an entry's quantity in place.
    ///
    /// `new_quantity` of zero removes the entry (same as
    /// [`remove_item`](Self::remove_item)). A quantity above the
    /// product's current stock is rejected with the entry unchanged.
    pub fn update_quantity(
        &self,
        cart: &mut Cart,
        catalog: &[Product],
        product_id: u32,
        new_quantity: u32,
    ) -> Result<(), StoreError> {
        if new_quantity == 0 {
            self.remove_item(cart, product_id);
            return Ok(());
        }

        let product = catalog
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(StoreError::UnknownProduct { id: product_id })?;

        let entry = cart
            .get_mut(product_id)
            .ok_or(StoreError::UnknownProduct { id: product_id })?;

        if new_quantity > product.stock {
            return Err(StoreError::StockExceeded {
                id: product_id,
                requested: new_quantity,
                available: product.stock,
            });
        }

        entry.quantity = new_quantity;
        entry.product = product.clone();
        Ok(())
    }

    /// Remove the entry for a product unconditionally.
    /// Removing an absent product is a no-op, not an error.
    /// Returns `true` if an entry was removed.
    pub fn remove_item(&self, cart: &mut Cart, product_id: u32) -> bool {
        match cart.position(product_id) {
            Some(idx) => {
                cart.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Compute subtotal, tax, total, and item count for the cart.
    ///
    /// Deterministic and side-effect-free: repeated calls without a
    /// mutation in between yield identical results. Prices come from
    /// each entry's product snapshot.
    #[must_use]
    pub fn summary(&self, cart: &Cart, tax_rate: f64) -> CartSummary {
        let mut subtotal = 0.0;
        let mut item_count: u32 = 0;

        for entry in &cart.entries {
            subtotal += entry.line_total();
            item_count += entry.quantity;
        }

        let subtotal = round_cents(subtotal);
        let tax = round_cents(subtotal * tax_rate);
        let total = round_cents(subtotal + tax);

        CartSummary {
            subtotal,
            tax,
            total,
            item_count,
        }
    }

    /// The order-submission payload: one `{productId, quantity}` record
    /// per cart line, in cart order.
    #[must_use]
    pub fn serialize_for_checkout(&self, cart: &Cart) -> Vec<OrderLine> {
        cart.entries
            .iter()
            .map(|e| OrderLine::new(e.product.id, e.quantity))
            .collect()
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
