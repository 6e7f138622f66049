//! The order record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ColorSwatch, OrderId, OrderStatus, Priority, TrackId};

/// One shipment record.
///
/// Records are plain data: the mock source holds a fixed seed collection of
/// them and the remote source produces fresh ones per response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, unique within a collection.
    pub order_id: OrderId,
    /// Carrier tracking code.
    pub track_id: TrackId,
    /// Carrier name, e.g. "FedEx Express".
    pub courier: String,
    /// Days remaining before the order must be packed.
    pub days_left_to_pack: u32,
    pub product_name: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub priority: Priority,
    pub order_date: NaiveDate,
    pub expected_delivery: NaiveDate,
    pub quantity: u32,
    /// Free text, e.g. "40 x 35 x 10 cm".
    pub dimensions: String,
    /// Free text, e.g. "0.8 kg".
    pub weight: String,
    pub material: String,
    /// Display order is significant.
    pub colors: Vec<ColorSwatch>,
    pub shipping_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// How close an order is to its packing deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingUrgency {
    /// Must be packed today.
    Overdue,
    /// One or two days left.
    Soon,
    /// Three or more days left.
    OnTrack,
}

impl PackingUrgency {
    /// Classify a packing countdown.
    #[must_use]
    pub const fn from_days_left(days: u32) -> Self {
        match days {
            0 => Self::Overdue,
            1 | 2 => Self::Soon,
            _ => Self::OnTrack,
        }
    }
}

/// An order together with its packing urgency, as shown on the detail view.
///
/// Serializes as the order's own fields plus `urgency`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub urgency: PackingUrgency,
}

impl From<Order> for OrderDetail {
    fn from(order: Order) -> Self {
        Self {
            urgency: order.urgency(),
            order,
        }
    }
}

impl Order {
    /// Urgent orders have at most one day left to pack.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.days_left_to_pack <= 1
    }

    /// Packing urgency bucket for display.
    #[must_use]
    pub const fn urgency(&self) -> PackingUrgency {
        PackingUrgency::from_days_left(self.days_left_to_pack)
    }

    /// Case-insensitive substring match against the order number, tracking
    /// code, customer name and product name. An empty needle matches.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            self.order_id.as_str(),
            self.track_id.as_str(),
            self.customer_name.as_str(),
            self.product_name.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
