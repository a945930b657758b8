//! Remote line data client.
//!
//! Fetches the line-name → stop-sequence document from an HTTP endpoint.
//! Used once at startup; a fetch failure is fatal to serving.

use super::error::RegistryError;
use super::lines::LineRegistry;

/// Configuration for the line data client.
#[derive(Debug, Clone)]
pub struct LineClientConfig {
    /// URL of the line data document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl LineClientConfig {
    /// Create a new config fetching from the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for fetching line data over HTTP.
#[derive(Debug, Clone)]
pub struct LineClient {
    http: reqwest::Client,
    url: String,
}

impl LineClient {
    /// Create a new client.
    pub fn new(config: LineClientConfig) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and parse the full line registry.
    pub async fn fetch_all(&self) -> Result<LineRegistry, RegistryError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistryError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        LineRegistry::from_json_str(&body)
    }
}
