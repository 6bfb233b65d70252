use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use ordex_shared::{OrderRecord, OrderRequest, OrderResponse, ServiceInfo, TRACE_HEADER};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
pub async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::ok("order-api"))
}

/// POST /orders
///
/// Decides one order: inventory, then payment, then the stored record.
/// The correlation id comes from an inbound `X-Trace-Id` header when
/// present, otherwise it is minted here, once, for the whole flow.
pub async fn place_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let trace_id = headers
        .get(TRACE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    match state.orchestrator.place_order(request, &trace_id).await {
        Ok(record) => Ok(Json(OrderResponse {
            id: record.id,
            status: record.outcome,
            trace_id,
            message: record.message,
        })),
        Err(err) => Err(ApiError::from_order_error(err, trace_id)),
    }
}

/// GET /orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderRecord>, ApiError> {
    state.store.get(id).map(Json).ok_or(ApiError::NotFound)
}
