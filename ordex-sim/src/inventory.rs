use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ordex_shared::OrderRequest;
use serde_json::json;

use crate::scenario::{DecisionProfile, SimReply};
use crate::trace_id_from;

pub const SERVICE_NAME: &str = "inventory-service";

pub fn router(profile: Arc<DecisionProfile>) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/inventory/check", post(check))
        .with_state(profile)
}

async fn info(State(profile): State<Arc<DecisionProfile>>) -> Response {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "testScenarios": profile.entries(),
    }))
    .into_response()
}

async fn check(
    State(profile): State<Arc<DecisionProfile>>,
    headers: HeaderMap,
    Json(request): Json<OrderRequest>,
) -> Response {
    let trace_id = trace_id_from(&headers);
    let behavior = profile.inventory_behavior(request.item_id);
    tokio::time::sleep(behavior.delay).await;

    match behavior.reply {
        SimReply::Body(decision) => {
            if decision.in_stock {
                tracing::info!(
                    trace_id,
                    item_id = request.item_id,
                    quantity = request.quantity,
                    "item available"
                );
            } else {
                tracing::warn!(
                    trace_id,
                    item_id = request.item_id,
                    reason = decision.reason.as_deref().unwrap_or(""),
                    "item unavailable"
                );
            }
            Json(decision).into_response()
        }
        SimReply::InternalError => {
            tracing::error!(trace_id, item_id = request.item_id, "inventory internal error");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
