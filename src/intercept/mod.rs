//! Call interception
//!
//! `Interceptor` decorates a [`CallTransport`]: every call passes through
//! unchanged, and once it settles a [`LogEntry`] is emitted on a channel for
//! the console to pick up. The caller always gets back exactly what the inner
//! transport produced, including its error.
//!
//! # Example
//!
//! ```ignore
//! let (interceptor, mut entries) = Interceptor::new(transport, normalizer);
//! let response = interceptor.call(&CallRequest::new("GET", "/users/me")).await?;
//! let entry = entries.recv().await;
//! ```

pub mod id;
pub mod transport;
pub mod url;

pub use id::IdGenerator;
pub use transport::{CallRequest, CallResponse, CallTransport, HttpTransport, TransportError};
pub use url::{BaseUrl, UrlNormalizer};

use crate::history::{CallStatus, LogEntry, SettledCall};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Transport decorator recording every settled call
pub struct Interceptor<T> {
    inner: T,
    normalizer: UrlNormalizer,
    ids: Mutex<IdGenerator>,
    events: mpsc::UnboundedSender<LogEntry>,
}

impl<T: CallTransport> Interceptor<T> {
    /// Wrap `inner`; entries arrive on the returned receiver in settlement order
    pub fn new(inner: T, normalizer: UrlNormalizer) -> (Self, mpsc::UnboundedReceiver<LogEntry>) {
        let (events, rx) = mpsc::unbounded_channel();
        let interceptor = Self {
            inner,
            normalizer,
            ids: Mutex::new(IdGenerator::new()),
            events,
        };
        (interceptor, rx)
    }

    /// Perform the call and record it
    pub async fn call(&self, request: &CallRequest) -> Result<CallResponse, TransportError> {
        let method = request.method.to_uppercase();
        let url = self.normalizer.relative(&request.url);

        let result = self.inner.send(request).await;

        let settled = match &result {
            Ok(response) => SettledCall {
                method,
                url,
                status: CallStatus::Code(response.status),
                is_success: response.is_success(),
                data: response.json(),
            },
            Err(e) => {
                warn!("{} {} failed: {}", method, url, e);
                SettledCall {
                    method,
                    url,
                    status: CallStatus::network(),
                    is_success: false,
                    data: Some(json!({ "error": e.message })),
                }
            }
        };
        self.record(settled);

        result
    }

    fn record(&self, settled: SettledCall) {
        let id = self.ids.lock().next_id();
        let entry = LogEntry::from_settled(id, settled);
        debug!("Recorded {}", entry.summary());
        if self.events.send(entry).is_err() {
            debug!("No console attached, entry dropped");
        }
    }
}

#[async_trait]
impl<T: CallTransport> CallTransport for Interceptor<T> {
    async fn send(&self, request: &CallRequest) -> Result<CallResponse, TransportError> {
        self.call(request).await
    }
}
