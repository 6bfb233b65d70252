use std::time::Duration;

use ordex_shared::TRACE_HEADER;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DownstreamError;

/// One-shot JSON POST client for a single collaborator base address.
///
/// Every call carries the correlation id as an `X-Trace-Id` header and is
/// bounded by a fixed timeout. There are no retries: a failed call surfaces
/// immediately as a [`DownstreamError`].
#[derive(Clone)]
pub struct DownstreamClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl DownstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single `POST {base_url}{path}` and parse the JSON reply.
    pub async fn call<Req, Resp>(
        &self,
        path: &str,
        payload: &Req,
        trace_id: &str,
    ) -> Result<Resp, DownstreamError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(trace_id, %url, "calling collaborator");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header(TRACE_HEADER, trace_id)
            .json(payload)
            .send()
            .await
            .map_err(|err| DownstreamError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownstreamError::NonSuccessStatus(status.as_u16()));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|_| DownstreamError::MalformedBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = DownstreamClient::new("http://localhost:8081/", Duration::from_secs(10));
        assert_eq!(client.base_url(), "http://localhost:8081");
    }
}
