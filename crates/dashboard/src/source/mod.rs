//! Order data sources.
//!
//! Two implementations of [`OrderSource`] answer the same four queries:
//!
//! - [`MockSource`] - a fixed in-memory seed collection, evaluated locally
//! - [`WebhookClient`] - forwards each query as a JSON POST to a remote
//!   webhook endpoint and returns the parsed body
//!
//! UI code does not pick a source itself; it goes through
//! [`DataService`](crate::service::DataService), which selects one per call.

pub mod mock;
pub mod webhook;

pub use mock::MockSource;
pub use webhook::WebhookClient;

use std::fmt;
use std::future::Future;

use orderflow_core::{
    AnalyticsQuery, AnalyticsReport, Order, OrderId, OrderListQuery, OrderListing,
    PrintListing, PrintOrdersQuery,
};
use thiserror::Error;

/// One of the four data operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListOrders,
    GetOrder,
    Analytics,
    PrintOrders,
}

impl Operation {
    /// Path segment appended to the webhook base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::ListOrders => "/get-orders",
            Self::GetOrder => "/get-order",
            Self::Analytics => "/get-analytics",
            Self::PrintOrders => "/get-print-orders",
        }
    }

    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::ListOrders => "fetch orders",
            Self::GetOrder => "fetch order",
            Self::Analytics => "fetch analytics",
            Self::PrintOrders => "fetch print orders",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Errors surfaced by the data layer.
///
/// Every failure is scoped to the one query that produced it; nothing here is
/// retried or recovered.
#[derive(Debug, Error)]
pub enum DataError {
    /// Lookup by id found no order.
    #[error("Order {0} not found")]
    NotFound(OrderId),

    /// Connection, DNS or timeout failure talking to the webhook.
    #[error("Failed to {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The webhook answered with a non-success status.
    #[error("Failed to {operation}: {status_text}")]
    Status {
        operation: Operation,
        status: u16,
        status_text: String,
    },

    /// The webhook body did not match the expected shape.
    #[error("Failed to {operation}: invalid response body: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be built from configuration.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Seed orders for the mock source are unusable.
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

impl DataError {
    /// Whether the failure came from the remote side of the boundary.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}

/// The query surface shared by the mock and remote sources.
pub trait OrderSource {
    /// Orders matching the query, plus category totals.
    fn list_orders(
        &self,
        query: &OrderListQuery,
    ) -> impl Future<Output = Result<OrderListing, DataError>> + Send;

    /// One order by id.
    fn get_order(&self, id: &OrderId) -> impl Future<Output = Result<Order, DataError>> + Send;

    /// Aggregate figures for the analytics view.
    fn analytics(
        &self,
        query: &AnalyticsQuery,
    ) -> impl Future<Output = Result<AnalyticsReport, DataError>> + Send;

    /// Reduced projections of the orders eligible for printing.
    fn print_orders(
        &self,
        query: &PrintOrdersQuery,
    ) -> impl Future<Output = Result<PrintListing, DataError>> + Send;
}
