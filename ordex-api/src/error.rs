use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ordex_core::DownstreamError;
use ordex_order::OrderError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Validation { message: String, trace_id: String },
    NotFound,
    Gateway { message: String, trace_id: String },
}

impl ApiError {
    /// Map an undecided order to its HTTP shape. Business declines never
    /// reach this path; they come back as 200s with a terminal outcome.
    pub fn from_order_error(err: OrderError, trace_id: String) -> Self {
        match err {
            OrderError::Validation(message) => ApiError::Validation { message, trace_id },
            OrderError::Inventory(DownstreamError::Unavailable(_)) => ApiError::Gateway {
                message: "Inventory service unavailable".to_string(),
                trace_id,
            },
            OrderError::Inventory(_) => ApiError::Gateway {
                message: "Inventory check failed".to_string(),
                trace_id,
            },
            OrderError::Payment(DownstreamError::Unavailable(_)) => ApiError::Gateway {
                message: "Payment service unavailable".to_string(),
                trace_id,
            },
            OrderError::Payment(_) => ApiError::Gateway {
                message: "Payment failed".to_string(),
                trace_id,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { message, trace_id } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "traceId": trace_id }),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Order not found" }),
            ),
            ApiError::Gateway { message, trace_id } => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": message, "traceId": trace_id }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
