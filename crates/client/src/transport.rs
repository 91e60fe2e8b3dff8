//! HTTP transport seam
//!
//! The client delegates all network I/O to a [`Transport`]. The default
//! implementation wraps a pooled `reqwest` client; tests substitute their
//! own to observe or fake traffic.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Request, Response};
use tracing::debug;

use crate::errors::DripError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Abstract HTTP executor.
///
/// Receives a fully-formed request (method, URL, headers, body) and returns
/// the raw response or a transport failure. Implementations must be safe for
/// concurrent reuse; the client shares one instance across all operations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a single request/response round trip.
    ///
    /// No retries are attempted here; any retry policy is layered by the
    /// caller of the client.
    async fn execute(&self, request: Request) -> Result<Response, DripError>;
}

/// Default transport backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    /// Start building a transport with custom configuration.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Convenience constructor with default configuration.
    ///
    /// # Errors
    /// Returns [`DripError::Config`] if the underlying client cannot be
    /// constructed.
    pub fn new() -> Result<Self, DripError> {
        Self::builder().build()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, DripError> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(DripError::Transport)?;

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");
        Ok(response)
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug)]
pub struct HttpTransportBuilder {
    timeout: Duration,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpTransportBuilder {
    /// Total-request timeout applied to every call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns [`DripError::Config`] if the underlying client cannot be
    /// constructed.
    pub fn build(self) -> Result<HttpTransport, DripError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| DripError::Config(format!("failed to build HTTP transport: {err}")))?;

        Ok(HttpTransport { client })
    }
}
