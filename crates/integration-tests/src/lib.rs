//! Integration test support for `OrderFlow`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p orderflow-integration-tests
//! ```
//!
//! No external services are needed: [`FakeWebhook`] binds an axum server on
//! an ephemeral localhost port, records every request it receives, and
//! answers with whatever the test's responder returns.
//!
//! # Test Categories
//!
//! - `webhook_remote` - wire format of the remote source
//! - `facade_dispatch` - mode dispatch and mock/remote parity
//! - `api_routes` - the dashboard JSON API

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use orderflow_core::{AnalyticsQuery, OrderListQuery, OrderLookup, PrintOrdersQuery};
use orderflow_dashboard::{DataError, MockSource, WebhookConfig};
use serde_json::Value;
use tokio::task::JoinHandle;

/// One request as seen by the fake webhook.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HeaderMap,
    /// Parsed JSON body, or `Value::Null` if the body was not JSON.
    pub body: Value,
}

impl RecordedRequest {
    /// Header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// What the fake webhook sends back.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

impl Reply {
    /// 200 with a JSON body.
    #[must_use]
    pub fn json(value: &Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: value.to_string(),
            delay: None,
        }
    }

    /// 200 with a body serialized from any serializable value.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be serialized.
    #[must_use]
    pub fn of<T: serde::Serialize>(value: &T) -> Self {
        Self::raw(serde_json::to_string(value).expect("reply body serializes"))
    }

    /// 200 with an arbitrary body (used for malformed responses).
    #[must_use]
    pub fn raw(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
            delay: None,
        }
    }

    /// Empty body with the given status.
    #[must_use]
    pub const fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
            delay: None,
        }
    }

    /// Hold the reply back for `delay`.
    #[must_use]
    pub const fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Responder = dyn Fn(&RecordedRequest) -> Reply + Send + Sync;

struct Shared {
    responder: Box<Responder>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

/// Ephemeral HTTP server standing in for the order webhook.
///
/// The server task is aborted when the value is dropped.
pub struct FakeWebhook {
    addr: SocketAddr,
    shared: Arc<Shared>,
    task: JoinHandle<()>,
}

impl FakeWebhook {
    /// Start a server that answers every request through `responder`.
    ///
    /// # Panics
    ///
    /// Panics if no localhost port can be bound.
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> Reply + Send + Sync + 'static,
    {
        let shared = Arc::new(Shared {
            responder: Box::new(responder),
            recorded: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&shared));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake webhook");
        let addr = listener.local_addr().expect("Failed to read local address");

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, shared, task }
    }

    /// Start a server that answers the four operations from `mock`, the way a
    /// webhook backed by the same data would.
    pub async fn mirroring(mock: MockSource) -> Self {
        Self::start(move |request| mirror_reply(&mock, request)).await
    }

    /// Base URL to configure the remote source with.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/webhook", self.addr)
    }

    /// Webhook config pointing at this server.
    ///
    /// # Panics
    ///
    /// Panics if the base URL is rejected, which would be a bug here.
    #[must_use]
    pub fn config(&self) -> WebhookConfig {
        WebhookConfig::for_base_url(&self.base_url()).expect("fake webhook URL is valid")
    }

    /// Every request received so far, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if a handler panicked while holding the log.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared
            .recorded
            .lock()
            .expect("request log poisoned")
            .clone()
    }
}

impl Drop for FakeWebhook {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        path: uri.path().to_string(),
        headers,
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };

    let reply = (shared.responder)(&request);
    shared
        .recorded
        .lock()
        .expect("request log poisoned")
        .push(request);

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

/// Answer one webhook call from a mock collection.
///
/// Useful inside custom responders that only want to change timing.
#[must_use]
pub fn mirror_reply(mock: &MockSource, request: &RecordedRequest) -> Reply {
    let body = request.body.clone();
    let path = request
        .path
        .strip_prefix("/webhook")
        .unwrap_or(&request.path);

    match path {
        "/get-orders" => match serde_json::from_value::<OrderListQuery>(body) {
            Ok(query) => Reply::of(&mock.list(&query)),
            Err(_) => Reply::status(StatusCode::BAD_REQUEST),
        },
        "/get-order" => match serde_json::from_value::<OrderLookup>(body) {
            Ok(lookup) => match mock.find(&lookup.order_id) {
                Ok(order) => Reply::of(&order),
                Err(DataError::NotFound(_)) => Reply::status(StatusCode::NOT_FOUND),
                Err(_) => Reply::status(StatusCode::INTERNAL_SERVER_ERROR),
            },
            Err(_) => Reply::status(StatusCode::BAD_REQUEST),
        },
        "/get-analytics" => match serde_json::from_value::<AnalyticsQuery>(body) {
            Ok(query) => Reply::of(&mock.summarize(&query)),
            Err(_) => Reply::status(StatusCode::BAD_REQUEST),
        },
        "/get-print-orders" => match serde_json::from_value::<PrintOrdersQuery>(body) {
            Ok(query) => Reply::of(&mock.printable(&query)),
            Err(_) => Reply::status(StatusCode::BAD_REQUEST),
        },
        _ => Reply::status(StatusCode::NOT_FOUND),
    }
}
