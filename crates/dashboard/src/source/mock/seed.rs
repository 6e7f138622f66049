//! Bundled seed orders.

use std::collections::HashSet;

use orderflow_core::Order;

use crate::source::DataError;

/// The six demo orders shipped with the dashboard, all dated 2025-08-01.
const SEED_ORDERS_JSON: &str = include_str!("../../../data/seed_orders.json");

/// Parse the bundled seed collection.
pub(super) fn bundled() -> Result<Vec<Order>, DataError> {
    parse(SEED_ORDERS_JSON)
}

/// Parse and validate a seed collection from JSON.
pub(super) fn parse(json: &str) -> Result<Vec<Order>, DataError> {
    let orders: Vec<Order> =
        serde_json::from_str(json).map_err(|e| DataError::InvalidSeed(e.to_string()))?;
    validate(&orders)?;
    Ok(orders)
}

/// Order ids must be unique within the collection.
pub(super) fn validate(orders: &[Order]) -> Result<(), DataError> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        if !seen.insert(order.order_id.as_str()) {
            return Err(DataError::InvalidSeed(format!(
                "duplicate order id {}",
                order.order_id
            )));
        }
    }
    Ok(())
}
