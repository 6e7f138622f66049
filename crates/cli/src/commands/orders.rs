//! Order listing and detail commands.
//!
//! # Usage
//!
//! ```bash
//! of-cli orders list --date 2025-08-01 --priority high
//! of-cli orders list --search chen
//! of-cli orders show ORD-2024-002
//! ```

use chrono::NaiveDate;
use orderflow_core::{Filter, OrderDetail, OrderId, OrderListQuery, OrderStatus, Priority};
use orderflow_dashboard::{DataMode, DataService};

use super::{CommandError, emit_json};

/// Filters collected from the command line.
pub struct ListFilters {
    pub date: Option<NaiveDate>,
    pub status: Option<Filter<OrderStatus>>,
    pub priority: Option<Filter<Priority>>,
    pub search: Option<String>,
}

impl From<ListFilters> for OrderListQuery {
    fn from(filters: ListFilters) -> Self {
        Self {
            date: filters.date,
            status: filters.status,
            priority: filters.priority,
            // A blank search term would match everything anyway.
            search: filters.search.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Print the matching orders and category totals as JSON.
pub async fn list(
    service: &DataService,
    mode: DataMode,
    filters: ListFilters,
) -> Result<(), CommandError> {
    let query = OrderListQuery::from(filters);
    let listing = service.list_orders(mode, &query).await?;
    tracing::info!(mode = %mode, orders = listing.orders.len(), "Listed orders");
    emit_json(&listing)
}

/// Print one order and its packing urgency as JSON.
pub async fn show(service: &DataService, mode: DataMode, id: &str) -> Result<(), CommandError> {
    let order = service.get_order(mode, &OrderId::new(id)).await?;
    emit_json(&OrderDetail::from(order))
}
