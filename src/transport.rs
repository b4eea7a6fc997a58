use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::constants::USER_AGENT;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Fetch-bytes collaborator the catalog client talks through.
///
/// Blocking in spirit: one call, the full response body or an error. No
/// streaming, no partial reads. Timeouts and cancellation live behind the
/// implementation, not in the client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Creates a transport with a 30-second timeout.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be built (e.g., due to system TLS
    /// configuration issues). This is a programming error or critical system
    /// issue that should not be caught.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
            .expect("Failed to create HttpTransport with default timeout")
    }

    /// Creates a transport with a custom timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self { client })
    }

    /// Creates a transport using a shared HTTP client, allowing connection
    /// pooling and reuse across multiple clients.
    #[must_use]
    pub const fn with_shared_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
