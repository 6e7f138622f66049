//! Query parameter objects.
//!
//! Each query is built per interaction and sent as-is: the mock source
//! evaluates it locally, the remote source posts it as the JSON request body.
//! Absent fields are omitted from the body.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::order::Order;
use crate::types::{Filter, OrderId, OrderStatus, Priority, Station, passes};

/// Parameters for listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    /// Exact order date. An empty string means no date filter.
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Filter<OrderStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Filter<Priority>>,
    /// Free-text search over id, tracking code, customer and product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl OrderListQuery {
    /// Restrict to one order date.
    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<Filter<OrderStatus>>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<Filter<Priority>>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Date predicate; passes everything when no date is set.
    #[must_use]
    pub fn date_matches(&self, order: &Order) -> bool {
        self.date.is_none_or(|date| order.order_date == date)
    }

    #[must_use]
    pub fn status_matches(&self, order: &Order) -> bool {
        passes(self.status.as_ref(), &order.status)
    }

    #[must_use]
    pub fn priority_matches(&self, order: &Order) -> bool {
        passes(self.priority.as_ref(), &order.priority)
    }

    #[must_use]
    pub fn search_matches(&self, order: &Order) -> bool {
        self.search
            .as_deref()
            .is_none_or(|needle| order.matches_search(needle))
    }
}

/// Parameters for the analytics summary.
///
/// `start_date`/`end_date` are forwarded to the remote source but not
/// evaluated by the mock source, which only honours `date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
}

impl AnalyticsQuery {
    /// Analytics for a single order date.
    #[must_use]
    pub const fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            start_date: None,
            end_date: None,
        }
    }

    #[must_use]
    pub fn date_matches(&self, order: &Order) -> bool {
        self.date.is_none_or(|date| order.order_date == date)
    }
}

/// Parameters for selecting orders to print.
///
/// `station` is carried through to the remote source; orders have no station
/// field, so the mock source does not filter on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOrdersQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub station: Station,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Filter<OrderStatus>>,
}

impl PrintOrdersQuery {
    /// Print query over an inclusive date range.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate, station: Station) -> Self {
        Self {
            start_date,
            end_date,
            station,
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<Filter<OrderStatus>>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn in_range(&self, order: &Order) -> bool {
        self.start_date <= order.order_date && order.order_date <= self.end_date
    }

    #[must_use]
    pub fn status_matches(&self, order: &Order) -> bool {
        passes(self.status.as_ref(), &order.status)
    }
}

/// Optional ISO date where `null` and a blank string both mean unset.
fn blank_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Body of a single-order lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLookup {
    pub order_id: OrderId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_list_query_serializes_to_empty_object() {
        let json = serde_json::to_string(&OrderListQuery::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_list_query_body_shape() {
        let query = OrderListQuery::default()
            .on(date("2025-08-01"))
            .with_status(Filter::<OrderStatus>::All)
            .with_priority(Priority::High);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2025-08-01", "status": "all", "priority": "high"})
        );
    }

    #[test]
    fn test_print_query_body_shape() {
        let query = PrintOrdersQuery::new(date("2025-08-01"), date("2025-08-31"), Station::Both)
            .with_status(OrderStatus::Pending);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "startDate": "2025-08-01",
                "endDate": "2025-08-31",
                "station": "both",
                "status": "pending"
            })
        );
    }

    #[test]
    fn test_lookup_body_shape() {
        let body = OrderLookup {
            order_id: OrderId::new("ORD-2024-003"),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"orderId":"ORD-2024-003"}"#);
    }

    #[test]
    fn test_blank_date_means_no_filter() {
        let query: OrderListQuery = serde_json::from_str(r#"{"date":"","status":"all"}"#).unwrap();
        assert!(query.date.is_none());

        let query: AnalyticsQuery =
            serde_json::from_str(r#"{"date":" ","startDate":null}"#).unwrap();
        assert_eq!(query, AnalyticsQuery::default());

        let query: OrderListQuery = serde_json::from_str(r#"{"date":"2025-08-01"}"#).unwrap();
        assert_eq!(query.date, Some(date("2025-08-01")));

        assert!(serde_json::from_str::<OrderListQuery>(r#"{"date":"08/01/2025"}"#).is_err());
    }

    #[test]
    fn test_analytics_query_accepts_range_fields() {
        let query: AnalyticsQuery =
            serde_json::from_str(r#"{"startDate":"2025-08-01","endDate":"2025-08-02"}"#).unwrap();
        assert_eq!(query.start_date, Some(date("2025-08-01")));
        assert!(query.date.is_none());
    }
}
