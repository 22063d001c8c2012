use crate::core::errors::ComagicError;
use crate::core::kernel::envelope::RpcRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{instrument, trace};

/// Transport seam for posting envelopes.
///
/// Implementations return the parsed response body; they never interpret
/// `result`/`error`. Every failure to obtain a JSON body is reported as a
/// 502 protocol error.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// POST one envelope to `url` and parse the body as JSON
    async fn post(&self, url: &str, request: &RpcRequest) -> Result<Value, ComagicError>;
}

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("comagic-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RestClientConfig {
    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating transport instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<ReqwestTransport, ComagicError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| ComagicError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(ReqwestTransport {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RpcTransport` using reqwest
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
    config: RestClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: RestClientConfig) -> Result<Self, ComagicError> {
        RestClientBuilder::new(config).build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }
}

#[async_trait]
impl RpcTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, id = %request.id))]
    async fn post(&self, url: &str, request: &RpcRequest) -> Result<Value, ComagicError> {
        let body = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        trace!(%status, "Response body: {}", response_text);

        // The API reports failures inside the envelope, often with a non-2xx
        // status; only the body decides.
        Ok(serde_json::from_str(&response_text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_setup_failure_is_a_transport_error() {
        let config = RestClientConfig::default().with_user_agent("bad\nagent".to_string());
        let err = RestClientBuilder::new(config).build().unwrap_err();
        assert_eq!(err.code(), Some(502));
    }

    #[test]
    fn default_config_builds() {
        let transport = ReqwestTransport::new(RestClientConfig::default().with_timeout(5)).unwrap();
        assert_eq!(transport.config().timeout_seconds, 5);
    }
}
