use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire payload for one order line, serialized as
/// `{"productId": .., "quantity": ..}` to match the backend's order
/// request shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: u32,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: u32, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Returned by a successful batch checkout.
///
/// The id is generated client-side; the backend owns order persistence
/// and does not echo an identifier back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub order_id: Uuid,
    pub lines: Vec<OrderLine>,
    pub placed_at: DateTime<Utc>,
}

/// A line that a sequential checkout could not submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedLine {
    pub line: OrderLine,
    pub reason: String,
}

/// Outcome of a sequential, best-effort checkout.
///
/// Lines are submitted one at a time; a failure stops the loop. Earlier
/// submissions stay applied on the server (non-atomic), so the report
/// names exactly which lines were submitted, which one failed, and which
/// were never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReport {
    pub submitted: Vec<OrderLine>,
    pub failed: Option<FailedLine>,
    pub unsent: Vec<OrderLine>,
}

impl CheckoutReport {
    /// `true` when every line was submitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_none() && self.unsent.is_empty()
    }
}
