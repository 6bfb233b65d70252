pub mod inventory;
pub mod payment;
pub mod scenario;

pub use scenario::{DecisionProfile, RandomProfile, Scenario, ScenarioTable};

use axum::http::HeaderMap;
use ordex_shared::TRACE_HEADER;

/// Correlation id from the request headers; collaborators only use it for
/// logging, so a missing header degrades to "unknown".
pub(crate) fn trace_id_from(headers: &HeaderMap) -> &str {
    headers
        .get(TRACE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}
