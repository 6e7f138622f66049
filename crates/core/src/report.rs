//! Result objects returned by the data sources.
//!
//! Results are derived per call and never cached.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::order::Order;
use crate::types::{OrderId, OrderStatus, Priority};

/// Category totals for an order listing.
///
/// The four buckets are a fixed proportional split of `total` (30% / 25% /
/// 25% / remainder, each floored), not derived from any order field.
/// `mixed` absorbs rounding so the buckets always sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub total: usize,
    pub termo: usize,
    pub dn: usize,
    pub dachowki: usize,
    pub mixed: usize,
}

impl CategoryTotals {
    /// Split `total` into the four buckets.
    #[must_use]
    pub const fn partition(total: usize) -> Self {
        let termo = total * 3 / 10;
        let dn = total / 4;
        let dachowki = total / 4;
        Self {
            total,
            termo,
            dn,
            dachowki,
            mixed: total - termo - dn - dachowki,
        }
    }

    /// Sum of the four buckets.
    #[must_use]
    pub const fn bucket_sum(&self) -> usize {
        self.termo + self.dn + self.dachowki + self.mixed
    }
}

/// Filtered orders plus their category totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListing {
    pub orders: Vec<Order>,
    pub totals: CategoryTotals,
}

/// Counts per in-flight status. Delivered orders are not part of the
/// distribution, so the counts need not sum to the order total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
}

impl StatusDistribution {
    /// Count `status` into its bucket; delivered is ignored.
    pub const fn record(&mut self, status: OrderStatus) {
        match status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Processing => self.processing += 1,
            OrderStatus::Shipped => self.shipped += 1,
            OrderStatus::Delivered => {}
        }
    }
}

/// Counts per priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityDistribution {
    pub const fn record(&mut self, priority: Priority) {
        match priority {
            Priority::High => self.high += 1,
            Priority::Medium => self.medium += 1,
            Priority::Low => self.low += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Aggregate figures for the analytics view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_orders: usize,
    /// Orders with at most one day left to pack.
    pub urgent_orders: usize,
    pub status_distribution: StatusDistribution,
    pub priority_distribution: PriorityDistribution,
    /// Orders per courier.
    pub courier_stats: BTreeMap<String, usize>,
    /// Mean packing countdown. Optional on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_days_to_pack: Option<f64>,
}

impl AnalyticsReport {
    /// Share of shipped orders as a whole percentage (0 when there are no
    /// orders).
    #[must_use]
    pub fn completion_rate(&self) -> u32 {
        if self.total_orders == 0 {
            return 0;
        }
        let shipped = self.status_distribution.shipped.saturating_mul(100);
        let rounded = (shipped + self.total_orders / 2) / self.total_orders;
        u32::try_from(rounded).unwrap_or(u32::MAX)
    }
}

/// Reduced projection of an order for print selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOrderLine {
    pub order_id: OrderId,
    pub product_name: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
}

impl From<&Order> for PrintOrderLine {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            product_name: order.product_name.clone(),
            customer_name: order.customer_name.clone(),
            status: order.status,
            order_date: order.order_date,
        }
    }
}

/// Orders eligible for printing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintListing {
    pub orders: Vec<PrintOrderLine>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_of_six() {
        let totals = CategoryTotals::partition(6);
        assert_eq!(
            totals,
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
    fn test_partition_always_sums_to_total() {
        for total in 0..500 {
            let totals = CategoryTotals::partition(total);
            assert_eq!(totals.bucket_sum(), total, "total = {total}");
        }
    }

    #[test]
    fn test_partition_of_zero() {
        assert_eq!(CategoryTotals::partition(0), CategoryTotals::default());
    }

    #[test]
    fn test_partition_of_ten() {
        let totals = CategoryTotals::partition(10);
        assert_eq!((totals.termo, totals.dn, totals.dachowki, totals.mixed), (3, 2, 2, 3));
    }

    #[test]
    fn test_status_distribution_ignores_delivered() {
        let mut dist = StatusDistribution::default();
        for status in OrderStatus::ALL {
            dist.record(status);
        }
        assert_eq!(dist.pending + dist.processing + dist.shipped, 3);
    }

    #[test]
    fn test_completion_rate_rounds() {
        let mut report = AnalyticsReport {
            total_orders: 6,
            ..AnalyticsReport::default()
        };
        report.status_distribution.shipped = 1;
        assert_eq!(report.completion_rate(), 17);

        report.total_orders = 0;
        assert_eq!(report.completion_rate(), 0);
    }

    #[test]
    fn test_analytics_parses_without_average() {
        let report: AnalyticsReport = serde_json::from_str(
            r#"{
                "totalOrders": 2,
                "urgentOrders": 1,
                "statusDistribution": {"pending": 1, "processing": 1, "shipped": 0},
                "priorityDistribution": {"high": 1, "medium": 0, "low": 1},
                "courierStats": {"DHL Express": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(report.courier_stats.get("DHL Express"), Some(&2));
        assert!(report.average_days_to_pack.is_none());
    }

    #[test]
    fn test_analytics_rejects_missing_distribution() {
        let result: Result<AnalyticsReport, _> =
            serde_json::from_str(r#"{"totalOrders": 2, "urgentOrders": 1}"#);
        assert!(result.is_err());
    }
}
