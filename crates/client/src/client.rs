//! Client handle, configuration, and the request/response pipeline
//!
//! Every operation follows the same path: build an authenticated request,
//! execute it through the transport, stamp the transport status onto the
//! envelope, decode the body. Transport failures short-circuit before
//! decoding, so a caller that receives `Err(_)` has no envelope to inspect.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use drip_domain::{ApiResponse, SubscribersResponse};

use crate::errors::DripError;
use crate::transport::{HttpTransport, Transport};

/// Production endpoint for version 2 of the Drip REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.getdrip.com/v2";

/// JSON media type the Drip API expects on every request.
const MEDIA_TYPE: &str = "application/vnd.api+json";

/// Configuration for [`DripClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API. Override to point at a mock server.
    pub base_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("drip-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Client handle for the Drip REST API.
///
/// Holds immutable credentials and a shared transport. Cloning is cheap and
/// concurrent use is safe; no operation observes another's in-flight state.
/// Construction performs no network I/O.
#[derive(Clone)]
pub struct DripClient {
    api_key: String,
    account_id: String,
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl DripClient {
    /// Create a client with the default transport and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DripError::BadApiKey`] or [`DripError::BadAccountId`] when
    /// either credential is empty, or [`DripError::Config`] if the default
    /// transport cannot be constructed.
    pub fn new(
        api_key: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Result<Self, DripError> {
        Self::builder()
            .api_key(api_key)
            .account_id(account_id)
            .build()
    }

    /// Start building a client with custom configuration or transport.
    pub fn builder() -> DripClientBuilder {
        DripClientBuilder::default()
    }

    /// Assemble a resource URL from the base endpoint, the account id, and
    /// the given path segments.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.account_id
        );
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    /// Build a transport-ready request: JSON-encoded body, basic auth with
    /// the API key as username and an empty password, user agent, and the
    /// vendor media type.
    pub(crate) fn build_request<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Request, DripError> {
        let parsed = Url::parse(url)
            .map_err(|err| DripError::InvalidRequest(format!("invalid URL {url}: {err}")))?;
        let mut request = Request::new(method, parsed);

        let credentials = BASE64.encode(format!("{}:", self.api_key));
        let authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|err| DripError::InvalidRequest(format!("invalid authorization: {err}")))?;
        let user_agent = HeaderValue::from_str(&self.config.user_agent)
            .map_err(|err| DripError::InvalidRequest(format!("invalid user agent: {err}")))?;

        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(USER_AGENT, user_agent);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE));

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(DripError::Serialization)?;
            *request.body_mut() = Some(bytes.into());
        }

        Ok(request)
    }

    /// Run one operation end to end: build, execute, stamp status, decode.
    pub(crate) async fn round_trip<B, T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, DripError>
    where
        B: Serialize,
        T: DeserializeOwned + Default + StatusStamped,
    {
        let request = self.build_request(method, url, body)?;
        let response = self.transport.execute(request).await?;
        let status = response.status().as_u16();

        let mut envelope: T = decode_response(response).await?;
        envelope.set_status_code(status);
        Ok(envelope)
    }
}

/// Response envelopes that carry the numeric transport status.
///
/// Decoding never surfaces the status on success paths, so the pipeline
/// stamps it after the body is decoded.
pub(crate) trait StatusStamped {
    fn set_status_code(&mut self, status_code: u16);
}

impl StatusStamped for SubscribersResponse {
    fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }
}

impl StatusStamped for ApiResponse {
    fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }
}

/// Decode a transport response into `T` following the service's content-type
/// rules.
///
/// A 204 decodes to `T::default()` regardless of declared content type.
/// Non-JSON responses (HTML error pages, rate-limit pages) surface as
/// [`DripError::UnexpectedResponse`] with the raw body preserved. A decoded
/// envelope with an empty entity list or a non-empty error list is a
/// successful decode; the caller inspects both channels.
pub(crate) async fn decode_response<T>(response: Response) -> Result<T, DripError>
where
    T: DeserializeOwned + Default,
{
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(T::default());
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if !content_type.contains("json") {
        let body = response.text().await.unwrap_or_default();
        return Err(DripError::UnexpectedResponse {
            status: status.as_u16(),
            body,
        });
    }

    response.json().await.map_err(DripError::Decode)
}

/// Builder for [`DripClient`].
#[derive(Default)]
pub struct DripClientBuilder {
    api_key: Option<String>,
    account_id: Option<String>,
    config: Option<ClientConfig>,
    transport: Option<Arc<dyn Transport>>,
}

impl DripClientBuilder {
    /// Set the API key used as the basic-auth username.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the account identifier that scopes every resource URL.
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Override the default configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject a custom transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`DripError::BadApiKey`] when the API key is missing or
    /// empty, [`DripError::BadAccountId`] when the account id is missing or
    /// empty, or [`DripError::Config`] if the default transport cannot be
    /// constructed.
    pub fn build(self) -> Result<DripClient, DripError> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.is_empty() {
            return Err(DripError::BadApiKey);
        }

        let account_id = self.account_id.unwrap_or_default();
        if account_id.is_empty() {
            return Err(DripError::BadAccountId);
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?),
        };

        Ok(DripClient {
            api_key,
            account_id,
            config: self.config.unwrap_or_default(),
            transport,
        })
    }
}
