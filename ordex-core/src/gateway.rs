use async_trait::async_trait;
use ordex_shared::{InventoryDecision, OrderRequest, PaymentDecision};

use crate::client::DownstreamClient;
use crate::error::DownstreamError;

/// Seam for the inventory collaborator. The orchestrator only ever sees this
/// trait, so tests can substitute a scripted double.
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    async fn check(
        &self,
        order: &OrderRequest,
        trace_id: &str,
    ) -> Result<InventoryDecision, DownstreamError>;
}

/// Seam for the payment collaborator.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        order: &OrderRequest,
        trace_id: &str,
    ) -> Result<PaymentDecision, DownstreamError>;
}

pub struct HttpInventoryGateway {
    client: DownstreamClient,
}

impl HttpInventoryGateway {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InventoryGateway for HttpInventoryGateway {
    async fn check(
        &self,
        order: &OrderRequest,
        trace_id: &str,
    ) -> Result<InventoryDecision, DownstreamError> {
        self.client.call("/inventory/check", order, trace_id).await
    }
}

pub struct HttpPaymentGateway {
    client: DownstreamClient,
}

impl HttpPaymentGateway {
    pub fn new(client: DownstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn charge(
        &self,
        order: &OrderRequest,
        trace_id: &str,
    ) -> Result<PaymentDecision, DownstreamError> {
        self.client.call("/payment/charge", order, trace_id).await
    }
}
