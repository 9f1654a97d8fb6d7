use chrono::Utc;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::order::{CheckoutReceipt, CheckoutReport, FailedLine, OrderLine};
use crate::providers::traits::StoreBackend;

/// Drives order submission against a [`StoreBackend`].
///
/// Two strategies exist because the lab backends differ:
/// - **Batch**: the whole cart in one `submit_cart` call; the server can
///   apply it atomically.
/// - **Sequential**: one `submit_order` call per line, each awaiting the
///   previous response. Best-effort and non-atomic — a mid-loop failure
///   leaves earlier submissions applied on the server.
pub struct CheckoutService;

impl CheckoutService {
    pub fn new() -> Self {
        Self
    }

    /// Ask the server to confirm availability for a single line.
    pub async fn verify_stock(
        &self,
        backend: &dyn StoreBackend,
        line: &OrderLine,
    ) -> Result<(), StoreError> {
        backend.check_stock(line).await
    }

    /// Submit the whole cart in one call and mint a receipt.
    pub async fn submit_batch(
        &self,
        backend: &dyn StoreBackend,
        lines: &[OrderLine],
    ) -> Result<CheckoutReceipt, StoreError> {
        backend.submit_cart(lines).await?;
        Ok(CheckoutReceipt {
            order_id: Uuid::new_v4(),
            lines: lines.to_vec(),
            placed_at: Utc::now(),
        })
    }

    /// Submit lines one at a time, stopping at the first failure.
    ///
    /// Never fails as a whole: the report carries the partial outcome so
    /// the caller knows exactly which lines reached the server.
    pub async fn submit_sequential(
        &self,
        backend: &dyn StoreBackend,
        lines: &[OrderLine],
    ) -> CheckoutReport {
        let mut submitted = Vec::with_capacity(lines.len());

        for (idx, line) in lines.iter().enumerate() {
            match backend.submit_order(line).await {
                Ok(()) => submitted.push(line.clone()),
                Err(err) => {
                    tracing::warn!(
                        backend = backend.name(),
                        product_id = line.product_id,
                        submitted = submitted.len(),
                        error = %err,
                        "sequential checkout failed partway; earlier submissions are not rolled back"
                    );
                    return CheckoutReport {
                        submitted,
                        failed: Some(FailedLine {
                            line: line.clone(),
                            reason: err.to_string(),
                        }),
                        unsent: lines[idx + 1..].to_vec(),
                    };
                }
            }
        }

        CheckoutReport {
            submitted,
            failed: None,
            unsent: Vec::new(),
        }
    }
}

impl Default for CheckoutService {
    fn default() -> Self {
        Self::new()
    }
}
