pub mod models;

pub use models::*;

/// Header carrying the correlation id across service boundaries.
pub const TRACE_HEADER: &str = "X-Trace-Id";
