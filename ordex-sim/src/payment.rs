use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use ordex_shared::{OrderRequest, PaymentStatus};
use serde_json::json;

use crate::scenario::{DecisionProfile, SimReply};
use crate::trace_id_from;

pub const SERVICE_NAME: &str = "payment-service";

pub fn router(profile: Arc<DecisionProfile>) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/payment/charge", post(charge))
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

async fn charge(
    State(profile): State<Arc<DecisionProfile>>,
    headers: HeaderMap,
    Json(request): Json<OrderRequest>,
) -> Response {
    let trace_id = trace_id_from(&headers);
    let behavior = profile.payment_behavior(request.item_id);
    tokio::time::sleep(behavior.delay).await;

    match behavior.reply {
        SimReply::Body(decision) => {
            match decision.status {
                PaymentStatus::Success => {
                    tracing::info!(trace_id, user_id = %request.user_id, "payment approved");
                }
                _ => {
                    tracing::warn!(
                        trace_id,
                        user_id = %request.user_id,
                        reason = decision.reason.as_deref().unwrap_or(""),
                        "payment declined"
                    );
                }
            }
            Json(decision).into_response()
        }
        SimReply::InternalError => {
            tracing::error!(trace_id, user_id = %request.user_id, "external processor failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
