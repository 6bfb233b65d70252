use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inbound order request, shared by the order API and both collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub item_id: i32,
    pub quantity: i32,
    pub user_id: String,
}

/// Stock decision returned by the inventory collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDecision {
    pub in_stock: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Success,
    InsufficientFunds,
    Error,
}

/// Charge decision returned by the payment collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDecision {
    pub status: PaymentStatus,
    pub reason: Option<String>,
}

/// Terminal fate of an order. Assigned exactly once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderOutcome {
    Completed,
    Rejected,
    Failed,
}

/// A decided order as persisted by the order store. Never mutated after
/// insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: Uuid,
    pub item_id: i32,
    pub quantity: i32,
    pub user_id: String,
    pub outcome: OrderOutcome,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Body returned by `POST /orders` for every decided order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub status: OrderOutcome,
    pub trace_id: String,
    pub message: String,
}

/// Health/info payload served at `GET /` by every service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
}

impl ServiceInfo {
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_uses_camel_case_fields() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"itemId":1,"quantity":2,"userId":"u-1"}"#).unwrap();
        assert_eq!(request.item_id, 1);
        assert_eq!(request.quantity, 2);
        assert_eq!(request.user_id, "u-1");
    }

    #[test]
    fn payment_status_round_trips_wire_names() {
        let decision: PaymentDecision =
            serde_json::from_str(r#"{"status":"InsufficientFunds","reason":null}"#).unwrap();
        assert_eq!(decision.status, PaymentStatus::InsufficientFunds);
        assert_eq!(
            serde_json::to_value(PaymentStatus::Success).unwrap(),
            serde_json::json!("Success")
        );
    }

    #[test]
    fn order_response_serializes_trace_id_field() {
        let response = OrderResponse {
            id: Uuid::new_v4(),
            status: OrderOutcome::Completed,
            trace_id: "abc".to_string(),
            message: "Order processed".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["traceId"], "abc");
        assert_eq!(value["status"], "Completed");
    }
}
