use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::ForwardError;

/// The external QuickFIX order engine. Fixed local address, not configurable.
pub const ENGINE_URL: &str = "http://localhost:8080/api/order";

/// Thin HTTP client for the engine. One instance lives in the app state and
/// is cloned into each request.
#[derive(Clone)]
pub struct EngineClient {
    client: Client,
    url: String,
}

impl EngineClient {
    pub fn new() -> Self {
        Self::with_endpoint(ENGINE_URL)
    }

    /// Point at a different endpoint; tests script their own engine.
    pub fn with_endpoint(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// POST one order body to the engine and parse the reply as JSON.
    ///
    /// The engine's HTTP status code is deliberately not inspected: any reply
    /// whose body parses as JSON is relayed as-is, and callers read the body's
    /// `status` field to learn the outcome.
    pub async fn submit(&self, order: &Value) -> Result<Value, ForwardError> {
        debug!(url = %self.url, "forwarding_order");
        let resp = self
            .client
            .post(&self.url)
            .json(order)
            .send()
            .await
            .map_err(ForwardError::UpstreamUnreachable)?;
        resp.json().await.map_err(ForwardError::UpstreamBadResponse)
    }
}

impl Default for EngineClient {
    fn default() -> Self {
        Self::new()
    }
}
