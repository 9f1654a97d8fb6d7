use serde::{Deserialize, Serialize};

/// Totals for the current cart contents.
///
/// All monetary values are rounded to cents. Computing a summary has no
/// side effects: the same cart and tax rate always produce the same
/// summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Σ(quantity × unit price) over all entries
    pub subtotal: f64,

    /// subtotal × tax rate
    pub tax: f64,

    /// subtotal + tax
    pub total: f64,

    /// Σ(quantity) over all entries
    pub item_count: u32,
}

impl CartSummary {
    /// Summary of an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
            item_count: 0,
        }
    }
}

/// Round a monetary amount to two decimal places.
#[must_use]
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
