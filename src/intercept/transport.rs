//! Outbound call transport
//!
//! `CallTransport` is the seam the interceptor wraps. `HttpTransport` is the
//! real implementation on top of reqwest; tests plug in scripted transports.

use super::url::BaseUrl;
use crate::error::{InspectorError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::warn;

// =============================================================================
// Request / response
// =============================================================================

/// One outbound API call
#[derive(Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub method: String,
    /// Absolute URL, or a path resolved against the base URL
    pub url: String,
    /// JSON body
    pub body: Option<Value>,
}

impl CallRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Parse a request line of the form `METHOD PATH [JSON]`
    pub fn parse(line: &str) -> Result<Self> {
        let invalid = |reason: &str| InspectorError::InvalidRequest {
            reason: reason.to_string(),
        };

        let line = line.trim();
        let (method, rest) = line.split_once(char::is_whitespace).ok_or_else(|| {
            invalid("expected METHOD PATH [JSON]")
        })?;
        if !method.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("method must be alphabetic"));
        }

        let rest = rest.trim_start();
        let (url, body) = match rest.split_once(char::is_whitespace) {
            Some((url, body)) => (url, body.trim()),
            None => (rest, ""),
        };
        if url.is_empty() {
            return Err(invalid("missing path"));
        }

        let request = Self::new(method.to_uppercase(), url);
        if body.is_empty() {
            return Ok(request);
        }
        let body = serde_json::from_str(body).map_err(|e| InspectorError::InvalidRequest {
            reason: format!("body is not JSON: {}", e),
        })?;
        Ok(request.with_body(body))
    }
}

/// Response as seen by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct CallResponse {
    pub status: u16,
    pub body: Bytes,
}

impl CallResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON, `None` when empty or not JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Call failed before any HTTP response arrived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}

// =============================================================================
// Transport trait
// =============================================================================

/// Anything able to perform an API call
#[async_trait]
pub trait CallTransport: Send + Sync {
    async fn send(&self, request: &CallRequest) -> std::result::Result<CallResponse, TransportError>;
}

// =============================================================================
// HTTP
// =============================================================================

/// reqwest-backed transport with a session cookie jar
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: BaseUrl,
    origin: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: BaseUrl, origin: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|source| InspectorError::HttpClient { source })?;
        Ok(Self {
            client,
            base_url,
            origin,
        })
    }

    /// Absolute URL for `url`: kept as-is when absolute, else joined to base URL or origin
    fn resolve(&self, url: &str) -> std::result::Result<String, TransportError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_string());
        }
        let base = self.base_url.get();
        let prefix = if base.is_empty() {
            self.origin.clone().unwrap_or_default()
        } else {
            base
        };
        if prefix.is_empty() {
            return Err(TransportError::new(format!(
                "cannot resolve '{}' without a base URL",
                url
            )));
        }
        Ok(join(&prefix, url))
    }
}

fn join(prefix: &str, path: &str) -> String {
    match (prefix.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", prefix, &path[1..]),
        (false, false) => format!("{}/{}", prefix, path),
        _ => format!("{}{}", prefix, path),
    }
}

#[async_trait]
impl CallTransport for HttpTransport {
    async fn send(&self, request: &CallRequest) -> std::result::Result<CallResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.to_uppercase().as_bytes())
            .map_err(|e| TransportError::new(e.to_string()))?;
        let url = self.resolve(&request.url)?;

        let mut builder = self.client.request(method, &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = body_or_empty(&url, response.bytes().await);
        Ok(CallResponse { status, body })
    }
}

/// A response whose body cannot be read keeps its status with an empty body
fn body_or_empty<E: fmt::Display>(url: &str, read: std::result::Result<Bytes, E>) -> Bytes {
    read.unwrap_or_else(|e| {
        warn!("Failed to read body of {}: {}", url, e);
        Bytes::new()
    })
}
