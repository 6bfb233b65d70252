use std::sync::Arc;

use ordex_core::{DownstreamError, InventoryGateway, PaymentGateway};
use ordex_shared::{OrderOutcome, OrderRecord, OrderRequest, PaymentStatus};
use ordex_store::OrderStore;

/// Why an order could not be decided.
///
/// Business declines (out of stock, insufficient funds) and payment
/// processing errors are *not* errors here: they are terminal outcomes and
/// come back as an `Ok(OrderRecord)`. Only invalid input and downstream
/// failures prevent a decision.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("invalid order: {0}")]
    Validation(String),
    #[error("inventory check failed: {0}")]
    Inventory(#[source] DownstreamError),
    #[error("payment failed: {0}")]
    Payment(#[source] DownstreamError),
}

/// Drives one order through inventory and payment and records its fate.
///
/// The two downstream calls are strictly sequential: payment is only ever
/// attempted once inventory has confirmed stock, so a guaranteed-unavailable
/// item never triggers a charge. Every terminal decision, including
/// downstream failures, is persisted before this returns.
pub struct OrderOrchestrator {
    inventory: Arc<dyn InventoryGateway>,
    payment: Arc<dyn PaymentGateway>,
    store: Arc<OrderStore>,
}

impl OrderOrchestrator {
    pub fn new(
        inventory: Arc<dyn InventoryGateway>,
        payment: Arc<dyn PaymentGateway>,
        store: Arc<OrderStore>,
    ) -> Self {
        Self {
            inventory,
            payment,
            store,
        }
    }

    /// Decide one order. The caller supplies the correlation id; it is
    /// forwarded unchanged to both collaborators and never regenerated
    /// mid-flow.
    pub async fn place_order(
        &self,
        request: OrderRequest,
        trace_id: &str,
    ) -> Result<OrderRecord, OrderError> {
        validate(&request).map_err(OrderError::Validation)?;

        tracing::info!(
            trace_id,
            item_id = request.item_id,
            quantity = request.quantity,
            user_id = %request.user_id,
            "received order"
        );

        let inventory = match self.inventory.check(&request, trace_id).await {
            Ok(decision) => decision,
            Err(err) => {
                tracing::error!(trace_id, error = %err, "inventory check failed");
                self.store
                    .add(&request, OrderOutcome::Failed, "Inventory check failed");
                return Err(OrderError::Inventory(err));
            }
        };

        if !inventory.in_stock {
            let reason = inventory
                .reason
                .unwrap_or_else(|| "Out of stock".to_string());
            tracing::info!(trace_id, %reason, "order rejected by inventory");
            return Ok(self.store.add(&request, OrderOutcome::Rejected, reason));
        }

        let payment = match self.payment.charge(&request, trace_id).await {
            Ok(decision) => decision,
            Err(err) => {
                tracing::error!(trace_id, error = %err, "payment failed");
                self.store
                    .add(&request, OrderOutcome::Failed, "Payment failed");
                return Err(OrderError::Payment(err));
            }
        };

        match payment.status {
            PaymentStatus::InsufficientFunds => {
                let reason = payment
                    .reason
                    .unwrap_or_else(|| "Insufficient funds".to_string());
                tracing::info!(trace_id, %reason, "payment declined");
                Ok(self.store.add(&request, OrderOutcome::Rejected, reason))
            }
            PaymentStatus::Error => {
                tracing::error!(trace_id, "payment reported a processing error");
                Ok(self
                    .store
                    .add(&request, OrderOutcome::Failed, "Payment error"))
            }
            PaymentStatus::Success => {
                let saved = self
                    .store
                    .add(&request, OrderOutcome::Completed, "Order processed");
                tracing::info!(trace_id, order_id = %saved.id, "order completed");
                Ok(saved)
            }
        }
    }
}

fn validate(request: &OrderRequest) -> Result<(), String> {
    if request.quantity < 1 {
        return Err("quantity must be at least 1".to_string());
    }
    if request.user_id.trim().is_empty() {
        return Err("userId must not be empty".to_string());
    }
    Ok(())
}
