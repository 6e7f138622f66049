//! Facade over the two order sources.
//!
//! [`DataService`] exposes the four queries with the same signatures whatever
//! the mode. Callers pass the [`DataMode`] explicitly, typically read from a
//! [`ModeSwitch`](crate::mode::ModeSwitch) at the moment the query starts, so
//! a mode flip never changes the source of a query already in flight.

use orderflow_core::{
    AnalyticsQuery, AnalyticsReport, Order, OrderId, OrderListQuery, OrderListing,
    PrintListing, PrintOrdersQuery,
};
use tracing::instrument;

use crate::config::WebhookConfig;
use crate::mode::DataMode;
use crate::source::{DataError, MockSource, OrderSource, WebhookClient};

/// Dispatches each query to the mock or remote source.
#[derive(Debug, Clone)]
pub struct DataService {
    mock: MockSource,
    remote: WebhookClient,
}

/// Borrowed view of whichever source a mode selects.
enum SelectedSource<'a> {
    Mock(&'a MockSource),
    Real(&'a WebhookClient),
}

impl OrderSource for SelectedSource<'_> {
    async fn list_orders(&self, query: &OrderListQuery) -> Result<OrderListing, DataError> {
        match self {
            Self::Mock(source) => source.list_orders(query).await,
            Self::Real(source) => source.list_orders(query).await,
        }
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order, DataError> {
        match self {
            Self::Mock(source) => source.get_order(id).await,
            Self::Real(source) => source.get_order(id).await,
        }
    }

    async fn analytics(&self, query: &AnalyticsQuery) -> Result<AnalyticsReport, DataError> {
        match self {
            Self::Mock(source) => source.analytics(query).await,
            Self::Real(source) => source.analytics(query).await,
        }
    }

    async fn print_orders(&self, query: &PrintOrdersQuery) -> Result<PrintListing, DataError> {
        match self {
            Self::Mock(source) => source.print_orders(query).await,
            Self::Real(source) => source.print_orders(query).await,
        }
    }
}

impl DataService {
    #[must_use]
    pub const fn new(mock: MockSource, remote: WebhookClient) -> Self {
        Self { mock, remote }
    }

    /// Seeded mock source plus a webhook client built from `config`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Client` if the webhook client cannot be built.
    pub fn from_config(config: &WebhookConfig) -> Result<Self, DataError> {
        Ok(Self::new(MockSource::seeded(), WebhookClient::new(config)?))
    }

    #[must_use]
    pub const fn mock(&self) -> &MockSource {
        &self.mock
    }

    #[must_use]
    pub const fn remote(&self) -> &WebhookClient {
        &self.remote
    }

    const fn source(&self, mode: DataMode) -> SelectedSource<'_> {
        match mode {
            DataMode::Mock => SelectedSource::Mock(&self.mock),
            DataMode::Real => SelectedSource::Real(&self.remote),
        }
    }

    /// Orders matching `query`, with category totals.
    ///
    /// # Errors
    ///
    /// In real mode, any transport, status or decode failure of the webhook.
    #[instrument(skip_all, fields(mode = %mode))]
    pub async fn list_orders(
        &self,
        mode: DataMode,
        query: &OrderListQuery,
    ) -> Result<OrderListing, DataError> {
        self.source(mode).list_orders(query).await
    }

    /// One order by id.
    ///
    /// # Errors
    ///
    /// `DataError::NotFound` in mock mode when no order has the id; remote
    /// failures in real mode.
    #[instrument(skip_all, fields(mode = %mode, order_id = %id))]
    pub async fn get_order(&self, mode: DataMode, id: &OrderId) -> Result<Order, DataError> {
        self.source(mode).get_order(id).await
    }

    /// Aggregate figures for the analytics view.
    ///
    /// # Errors
    ///
    /// In real mode, any transport, status or decode failure of the webhook.
    #[instrument(skip_all, fields(mode = %mode))]
    pub async fn analytics(
        &self,
        mode: DataMode,
        query: &AnalyticsQuery,
    ) -> Result<AnalyticsReport, DataError> {
        self.source(mode).analytics(query).await
    }

    /// Projections of the orders eligible for printing.
    ///
    /// # Errors
    ///
    /// In real mode, any transport, status or decode failure of the webhook.
    #[instrument(skip_all, fields(mode = %mode))]
    pub async fn print_orders(
        &self,
        mode: DataMode,
        query: &PrintOrdersQuery,
    ) -> Result<PrintListing, DataError> {
        self.source(mode).print_orders(query).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use orderflow_core::{OrderStatus, Station};

    use super::*;

    fn service() -> DataService {
        // Nothing listens on the discard port, so real mode fails fast.
        let config = WebhookConfig::for_base_url("http://127.0.0.1:9/webhook").unwrap();
        DataService::from_config(&config).unwrap()
    }

    fn seed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    #[tokio::test]
    async fn test_mock_mode_lists_seed() {
        let listing = service()
            .list_orders(DataMode::Mock, &OrderListQuery::default().on(seed_date()))
            .await
            .unwrap();
        assert_eq!(listing.orders.len(), 6);
        assert_eq!(listing.totals.total, 6);
    }

    #[tokio::test]
    async fn test_mock_mode_matches_source_directly() {
        let service = service();
        let query = AnalyticsQuery::on(seed_date());
        let via_facade = service.analytics(DataMode::Mock, &query).await.unwrap();
        assert_eq!(via_facade, service.mock().summarize(&query));
    }

    #[tokio::test]
    async fn test_mock_mode_missing_order() {
        let err = service()
            .get_order(DataMode::Mock, &OrderId::new("ORD-9999"))
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_real_mode_goes_to_remote() {
        let query = PrintOrdersQuery::new(seed_date(), seed_date(), Station::Both)
            .with_status(OrderStatus::Pending);
        let err = service()
            .print_orders(DataMode::Real, &query)
            .await
            .unwrap_err();
        assert!(err.is_remote());
    }
}
