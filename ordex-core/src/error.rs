/// How a single downstream call went wrong. One attempt only; there is no
/// retry path that would need to distinguish transient from permanent.
#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    /// Transport-level failure: connection refused, DNS, or the fixed
    /// request timeout elapsed.
    #[error("service unreachable: {0}")]
    Unavailable(String),

    /// An HTTP response arrived but its status was outside the 2xx range.
    #[error("non-success status {0}")]
    NonSuccessStatus(u16),

    /// A 2xx response whose body did not parse into the expected shape.
    #[error("malformed response body")]
    MalformedBody,
}
