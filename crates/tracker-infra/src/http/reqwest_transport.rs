//! `reqwest`-backed HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use tracker_core::ports::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

/// Default API address for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Transport configuration.
#[derive(Debug, Clone)]
pub struct ReqwestConfig {
    /// Base address every endpoint is resolved against.
    pub base_url: String,
    /// Per-request timeout. `None` waits as long as the server does.
    pub timeout: Option<Duration>,
}

impl Default for ReqwestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ReqwestConfig {
    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// `API_BASE_URL` defaults to [`DEFAULT_BASE_URL`]. `HTTP_TIMEOUT_SECS`
    /// must be a positive whole number of seconds; anything else means no
    /// timeout.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("API_BASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// HTTP transport over a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: ReqwestConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        tracing::debug!(base_url = %config.base_url, "HTTP transport ready");

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }
}

/// Resolve `endpoint` against `base`, with exactly one slash at the seam.
///
/// Absolute endpoints are returned unchanged.
pub fn join_url(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    if endpoint.is_empty() {
        return base.to_string();
    }

    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_builder() {
        TransportError::InvalidRequest(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(&request.endpoint);

        let mut builder = self.client.request(to_reqwest_method(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_error)?;

        tracing::trace!(method = %request.method, url = %url, status, "HTTP exchange complete");

        Ok(HttpResponse::new(status, parse_body(&bytes)))
    }
}
