//! In-memory order source backed by a fixed seed collection.
//!
//! All evaluation is synchronous and deterministic. The [`OrderSource`]
//! implementation wraps the synchronous methods and never suspends.

mod seed;

use std::collections::BTreeMap;
use std::sync::Arc;

use orderflow_core::{
    AnalyticsQuery, AnalyticsReport, CategoryTotals, Order, OrderId, OrderListQuery,
    OrderListing, PrintListing, PrintOrderLine, PrintOrdersQuery, PriorityDistribution,
    StatusDistribution,
};
use tracing::debug;

use super::{DataError, OrderSource};

/// Read-only order collection answering queries locally.
///
/// Cloning is cheap; clones share the same collection.
#[derive(Debug, Clone)]
pub struct MockSource {
    orders: Arc<[Order]>,
}

impl MockSource {
    /// Build a source over the given orders, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidSeed` if two orders share an id.
    pub fn from_orders(orders: Vec<Order>) -> Result<Self, DataError> {
        seed::validate(&orders)?;
        Ok(Self {
            orders: orders.into(),
        })
    }

    /// Source over the bundled demo orders.
    ///
    /// # Panics
    ///
    /// Panics if the bundled seed file is invalid. The file is compiled into
    /// the binary and checked by unit tests.
    #[must_use]
    pub fn seeded() -> Self {
        let orders = seed::bundled().expect("bundled seed orders are valid");
        Self {
            orders: orders.into(),
        }
    }

    /// The full, unfiltered collection in insertion order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Filter by date, then status, then priority, then free-text search.
    /// Insertion order is preserved.
    #[must_use]
    pub fn list(&self, query: &OrderListQuery) -> OrderListing {
        let orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| query.date_matches(o))
            .filter(|o| query.status_matches(o))
            .filter(|o| query.priority_matches(o))
            .filter(|o| query.search_matches(o))
            .cloned()
            .collect();

        let totals = CategoryTotals::partition(orders.len());
        debug!(count = orders.len(), "Mock orders listed");

        OrderListing { orders, totals }
    }

    /// Exact lookup by order id.
    ///
    /// # Errors
    ///
    /// Returns `DataError::NotFound` if no order has this id.
    pub fn find(&self, id: &OrderId) -> Result<Order, DataError> {
        self.orders
            .iter()
            .find(|o| &o.order_id == id)
            .cloned()
            .ok_or_else(|| DataError::NotFound(id.clone()))
    }

    /// Date-scoped counts plus global courier stats.
    ///
    /// Totals, urgency, status and priority counts use only the orders on
    /// `query.date` (all orders when unset). Courier stats always cover the
    /// whole collection.
    #[must_use]
    pub fn summarize(&self, query: &AnalyticsQuery) -> AnalyticsReport {
        let scoped: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| query.date_matches(o))
            .collect();

        let mut status_distribution = StatusDistribution::default();
        let mut priority_distribution = PriorityDistribution::default();
        for order in &scoped {
            status_distribution.record(order.status);
            priority_distribution.record(order.priority);
        }

        let urgent_orders = scoped.iter().filter(|o| o.is_urgent()).count();

        let mut courier_stats: BTreeMap<String, usize> = BTreeMap::new();
        for order in &*self.orders {
            *courier_stats.entry(order.courier.clone()).or_insert(0) += 1;
        }

        AnalyticsReport {
            total_orders: scoped.len(),
            urgent_orders,
            status_distribution,
            priority_distribution,
            courier_stats,
            average_days_to_pack: average_days_to_pack(&scoped),
        }
    }

    /// Orders in the inclusive date range, optionally by status, projected
    /// to print lines. `query.station` is not applied: orders carry no
    /// station.
    #[must_use]
    pub fn printable(&self, query: &PrintOrdersQuery) -> PrintListing {
        let orders: Vec<PrintOrderLine> = self
            .orders
            .iter()
            .filter(|o| query.in_range(o))
            .filter(|o| query.status_matches(o))
            .map(PrintOrderLine::from)
            .collect();

        debug!(count = orders.len(), station = %query.station, "Mock print orders listed");

        PrintListing { orders }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::seeded()
    }
}

// Precision loss from usize/u32 -> f64 is acceptable for a display average.
#[allow(clippy::cast_precision_loss)]
fn average_days_to_pack(orders: &[&Order]) -> Option<f64> {
    if orders.is_empty() {
        return None;
    }
    let sum: u64 = orders.iter().map(|o| u64::from(o.days_left_to_pack)).sum();
    Some(sum as f64 / orders.len() as f64)
}

impl OrderSource for MockSource {
    async fn list_orders(&self, query: &OrderListQuery) -> Result<OrderListing, DataError> {
        Ok(self.list(query))
    }

    async fn get_order(&self, id: &OrderId) -> Result<Order, DataError> {
        self.find(id)
    }

    async fn analytics(&self, query: &AnalyticsQuery) -> Result<AnalyticsReport, DataError> {
        Ok(self.summarize(query))
    }

    async fn print_orders(&self, query: &PrintOrdersQuery) -> Result<PrintListing, DataError> {
        Ok(self.printable(query))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;
    use orderflow_core::{Filter, OrderStatus, Priority, Station};

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    /// Seed orders with a few dates and statuses moved around so that date
    /// and status filters actually narrow the set.
    fn spread() -> MockSource {
        let mut orders = MockSource::seeded().orders().to_vec();
        let dates = [
            "2025-07-31",
            "2025-08-01",
            "2025-08-01",
            "2025-08-02",
            "2025-08-03",
            "2025-08-04",
        ];
        for (order, d) in orders.iter_mut().zip(dates) {
            order.order_date = date(d);
        }
        if let Some(order) = orders.get_mut(4) {
            order.status = OrderStatus::Delivered;
        }
        MockSource::from_orders(orders).unwrap()
    }

    #[test]
    fn test_list_by_date_returns_all_six_with_totals() {
        let listing = MockSource::seeded().list(&OrderListQuery::default().on(date("2025-08-01")));
        assert_eq!(listing.orders.len(), 6);
        assert_eq!(
            listing.totals,
            CategoryTotals {
                total: 6,
                termo: 1,
                dn: 1,
                dachowki: 1,
                mixed: 3,
            }
        );
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let listing = MockSource::seeded().list(&OrderListQuery::default());
        let ids: Vec<&str> = listing.orders.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "ORD-2024-001",
                "ORD-2024-002",
                "ORD-2024-003",
                "ORD-2024-004",
                "ORD-2024-005",
                "ORD-2024-006",
            ]
        );
    }

    #[test]
    fn test_list_filters_by_status_and_priority() {
        let source = MockSource::seeded();
        let listing = source.list(
            &OrderListQuery::default()
                .with_status(OrderStatus::Pending)
                .with_priority(Priority::Low),
        );
        let ids: Vec<&str> = listing.orders.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2024-003", "ORD-2024-005"]);
        assert_eq!(listing.totals.bucket_sum(), 2);
    }

    #[test]
    fn test_all_sentinel_does_not_filter() {
        let source = MockSource::seeded();
        let listing = source.list(
            &OrderListQuery::default()
                .with_status(Filter::<OrderStatus>::All)
                .with_priority(Filter::<Priority>::All),
        );
        assert_eq!(listing.orders.len(), 6);
    }

    #[test]
    fn test_list_results_satisfy_every_predicate() {
        let source = spread();
        let query = OrderListQuery::default()
            .on(date("2025-08-01"))
            .with_status(OrderStatus::Processing);
        let listing = source.list(&query);
        assert_eq!(listing.orders.len(), 1);
        for order in &listing.orders {
            assert_eq!(order.order_date, date("2025-08-01"));
            assert_eq!(order.status, OrderStatus::Processing);
            assert!(source.orders().contains(order));
        }
    }

    #[test]
    fn test_list_with_unknown_date_is_empty() {
        let listing = MockSource::seeded().list(&OrderListQuery::default().on(date("2030-01-01")));
        assert!(listing.orders.is_empty());
        assert_eq!(listing.totals, CategoryTotals::default());
    }

    #[test]
    fn test_search_narrows_listing() {
        let listing = MockSource::seeded().list(&OrderListQuery::default().with_search("fedex"));
        assert!(listing.orders.is_empty(), "courier is not a search field");

        let listing = MockSource::seeded().list(&OrderListQuery::default().with_search("knife"));
        assert_eq!(listing.orders.len(), 1);
    }

    #[test]
    fn test_find_existing_and_missing() {
        let source = MockSource::seeded();
        let order = source.find(&OrderId::new("ORD-2024-004")).unwrap();
        assert_eq!(order.customer_name, "David Rodriguez");

        let err = source.find(&OrderId::new("ORD-9999")).unwrap_err();
        assert!(matches!(err, DataError::NotFound(id) if id.as_str() == "ORD-9999"));
    }

    #[test]
    fn test_analytics_for_seed_date() {
        let report = MockSource::seeded().summarize(&AnalyticsQuery::on(date("2025-08-01")));
        assert_eq!(report.total_orders, 6);
        assert_eq!(report.urgent_orders, 1);
        assert_eq!(
            report.priority_distribution,
            PriorityDistribution {
                high: 2,
                medium: 2,
                low: 2,
            }
        );
        assert_eq!(
            report.status_distribution,
            StatusDistribution {
                pending: 3,
                processing: 2,
                shipped: 1,
            }
        );
        assert_eq!(report.courier_stats.len(), 6);
    }

    #[test]
    fn test_urgent_counts_zero_and_one_days_left() {
        let source = MockSource::seeded();
        let report = source.summarize(&AnalyticsQuery::default());
        let expected = source
            .orders()
            .iter()
            .filter(|o| o.days_left_to_pack <= 1)
            .count();
        assert_eq!(report.urgent_orders, expected);
    }

    #[test]
    fn test_courier_stats_ignore_date_filter() {
        let source = spread();
        let report = source.summarize(&AnalyticsQuery::on(date("2025-08-01")));
        assert_eq!(report.total_orders, 2);
        assert_eq!(report.courier_stats.values().sum::<usize>(), 6);
        assert_eq!(
            report.status_distribution.pending + report.status_distribution.processing,
            2
        );
    }

    #[test]
    fn test_status_distribution_excludes_delivered() {
        let report = spread().summarize(&AnalyticsQuery::default());
        let dist = report.status_distribution;
        assert_eq!(dist.pending + dist.processing + dist.shipped, 5);
        assert_eq!(report.priority_distribution.total(), 6);
    }

    #[test]
    fn test_average_days_to_pack() {
        let report = MockSource::seeded().summarize(&AnalyticsQuery::default());
        let avg = report.average_days_to_pack.unwrap();
        assert!((avg - 16.0 / 6.0).abs() < 1e-9);

        let empty = MockSource::seeded().summarize(&AnalyticsQuery::on(date("2030-01-01")));
        assert!(empty.average_days_to_pack.is_none());
    }

    #[test]
    fn test_print_range_is_inclusive() {
        let source = spread();
        let listing = source.printable(&PrintOrdersQuery::new(
            date("2025-08-01"),
            date("2025-08-03"),
            Station::Station1,
        ));
        let ids: Vec<&str> = listing.orders.iter().map(|l| l.order_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ORD-2024-002", "ORD-2024-003", "ORD-2024-004", "ORD-2024-005"]
        );
    }

    #[test]
    fn test_print_filters_status_and_ignores_station() {
        let source = MockSource::seeded();
        let range = (date("2025-08-01"), date("2025-08-01"));
        let station1 = source.printable(
            &PrintOrdersQuery::new(range.0, range.1, Station::Station1)
                .with_status(OrderStatus::Processing),
        );
        let station2 = source.printable(
            &PrintOrdersQuery::new(range.0, range.1, Station::Station2)
                .with_status(OrderStatus::Processing),
        );
        assert_eq!(station1, station2);
        assert_eq!(station1.orders.len(), 2);
        let first = station1.orders.first().unwrap();
        assert_eq!(first.order_id.as_str(), "ORD-2024-002");
        assert_eq!(first.customer_name, "Michael Chen");
    }

    #[tokio::test]
    async fn test_trait_methods_match_sync_methods() {
        let source = MockSource::seeded();
        let query = OrderListQuery::default().with_priority(Priority::High);
        let listing = source.list_orders(&query).await.unwrap();
        assert_eq!(listing, source.list(&query));

        let err = source.get_order(&OrderId::new("nope")).await.unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }
}
