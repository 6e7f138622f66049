//! Remote order source backed by a JSON webhook.
//!
//! Every query is one `POST {base_url}{path}` whose body is the serialized
//! query. A 2xx response body is decoded into the result type; anything else
//! becomes a [`DataError`] naming the operation.
//!
//! # Headers
//!
//! - `Content-Type: application/json` on every request
//! - `CF-Access-Client-Id` / `CF-Access-Client-Secret` when access
//!   credentials are configured

use std::sync::Arc;

use orderflow_core::{
    AnalyticsQuery, AnalyticsReport, Order, OrderId, OrderListQuery, OrderListing, OrderLookup,
    PrintListing, PrintOrdersQuery,
};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::{DataError, Operation, OrderSource};
use crate::config::WebhookConfig;

const ACCESS_CLIENT_ID_HEADER: &str = "cf-access-client-id";
const ACCESS_CLIENT_SECRET_HEADER: &str = "cf-access-client-secret";

/// HTTP client for the order webhook.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct WebhookClient {
    inner: Arc<WebhookClientInner>,
}

struct WebhookClientInner {
    client: reqwest::Client,
    base_url: String,
    authenticated: bool,
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("base_url", &self.inner.base_url)
            .field("authenticated", &self.inner.authenticated)
            .finish_non_exhaustive()
    }
}

impl WebhookClient {
    /// Create a new webhook client.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Client` if a credential is not a valid header value
    /// or the HTTP client fails to build.
    pub fn new(config: &WebhookConfig) -> Result<Self, DataError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(access) = &config.access {
            let client_id = HeaderValue::from_str(&access.client_id)
                .map_err(|e| DataError::Client(format!("Invalid access client id: {e}")))?;
            let mut client_secret = HeaderValue::from_str(access.client_secret.expose_secret())
                .map_err(|e| DataError::Client(format!("Invalid access client secret: {e}")))?;
            client_secret.set_sensitive(true);

            headers.insert(ACCESS_CLIENT_ID_HEADER, client_id);
            headers.insert(ACCESS_CLIENT_SECRET_HEADER, client_secret);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| DataError::Client(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(WebhookClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                authenticated: config.access.is_some(),
            }),
        })
    }

    /// Base endpoint the operation paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Full URL for one operation.
    #[must_use]
    pub fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.inner.base_url, operation.path())
    }

    /// POST `body` to the operation's endpoint and decode the reply.
    #[instrument(skip_all, fields(operation = %operation))]
    async fn post<B, T>(&self, operation: Operation, body: &B) -> Result<T, DataError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(operation);
        debug!(url = %url, "Calling order webhook");

        let response = self
            .inner
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| DataError::Transport { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Order webhook returned non-success status");
            return Err(DataError::Status {
                operation,
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| DataError::Transport { operation, source })?;

        serde_json::from_slice(&bytes).map_err(|source| DataError::Decode { operation, source })
    }
}

impl OrderSource for WebhookClient {
    async fn list_orders(&self, query: &OrderListQuery) -> Result<OrderListing, DataError> {
        self.post(Operation::ListOrders, query).await
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order, DataError> {
        let body = OrderLookup {
            order_id: id.clone(),
        };
        self.post(Operation::GetOrder, &body).await
    }

    async fn analytics(&self, query: &AnalyticsQuery) -> Result<AnalyticsReport, DataError> {
        self.post(Operation::Analytics, query).await
    }

    async fn print_orders(&self, query: &PrintOrdersQuery) -> Result<PrintListing, DataError> {
        self.post(Operation::PrintOrders, query).await
    }
}
