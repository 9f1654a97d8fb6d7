use thiserror::Error;

/// Unified error type for the entire storefront-core library.
/// Every fallible public function returns `Result<T, StoreError>`.
#[derive(Debug, Error)]
pub enum StoreError {
    // ── Cart / Business Logic ───────────────────────────────────────
    #[error("Quantity must be a positive whole number")]
    InvalidQuantity,

    #[error("Product not found: {id}")]
    UnknownProduct { id: u32 },

    #[error("Not enough stock for product {id}: requested {requested}, only {available} available")]
    StockExceeded {
        id: u32,
        requested: u32,
        available: u32,
    },

    #[error("Cart is empty — nothing to check out")]
    EmptyCart,

    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): {message}")]
    Api { endpoint: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // session tokens passed as query strings never end up in logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        StoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Deserialization(e.to_string())
    }
}
