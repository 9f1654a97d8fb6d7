use serde::{Deserialize, Serialize};

/// GST rate applied to the cart subtotal. A configuration constant, not
/// derived: earlier storefront variants ran tax-free, the full variant
/// charges 18%.
pub const DEFAULT_TAX_RATE: f64 = 0.18;

/// Client-side configuration for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Fraction of the subtotal added as tax (e.g., 0.18 for 18% GST).
    pub tax_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl Settings {
    /// Settings for the tax-free storefront variants.
    #[must_use]
    pub fn tax_free() -> Self {
        Self { tax_rate: 0.0 }
    }
}
