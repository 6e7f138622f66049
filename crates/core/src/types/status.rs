//! Closed enumerations used to classify and filter orders.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string does not name a known variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    /// What was being parsed (e.g. "order status").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Order lifecycle status: pending → processing → shipped (→ delivered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
    ];

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(ParseEnumError::new("order status", s)),
        }
    }
}

/// Packing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Wire name of the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError::new("priority", s)),
        }
    }
}

/// Packing station a print run is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Station {
    Station1,
    Station2,
    #[default]
    Both,
}

impl Station {
    /// Wire name of the station.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Station1 => "station1",
            Self::Station2 => "station2",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Station {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "station1" => Ok(Self::Station1),
            "station2" => Ok(Self::Station2),
            "both" => Ok(Self::Both),
            _ => Err(ParseEnumError::new("station", s)),
        }
    }
}

/// A filter over a closed enumeration, with the `"all"` sentinel.
///
/// On the wire this is either the literal string `"all"` or the wire name of
/// the selected value, so `{"status": "all"}` and `{"status": "shipped"}` are
/// both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    /// Match everything.
    All,
    /// Match only this value.
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Whether `value` passes the filter.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T> From<T> for Filter<T> {
    fn from(value: T) -> Self {
        Self::Only(value)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr,
{
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Filter<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether an optional filter lets `value` through. `None` means unfiltered.
pub fn passes<T: PartialEq>(filter: Option<&Filter<T>>, value: &T) -> bool {
    filter.is_none_or(|f| f.matches(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrips_through_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.to_string(), "invalid priority: urgent");
    }

    #[test]
    fn test_filter_all_sentinel() {
        let filter: Filter<OrderStatus> = "all".parse().unwrap();
        assert_eq!(filter, Filter::All);
        assert!(filter.matches(&OrderStatus::Delivered));
    }

    #[test]
    fn test_filter_only_matches_exactly() {
        let filter = Filter::Only(Priority::High);
        assert!(filter.matches(&Priority::High));
        assert!(!filter.matches(&Priority::Low));
    }

    #[test]
    fn test_filter_wire_format() {
        let json = serde_json::to_string(&Filter::Only(OrderStatus::Shipped)).unwrap();
        assert_eq!(json, "\"shipped\"");
        let json = serde_json::to_string(&Filter::<OrderStatus>::All).unwrap();
        assert_eq!(json, "\"all\"");

        let parsed: Filter<Station> = serde_json::from_str("\"station2\"").unwrap();
        assert_eq!(parsed, Filter::Only(Station::Station2));
        assert!(serde_json::from_str::<Filter<Station>>("\"station3\"").is_err());
    }

    #[test]
    fn test_passes_treats_none_as_unfiltered() {
        assert!(passes::<Priority>(None, &Priority::Low));
        assert!(!passes(Some(&Filter::Only(Priority::High)), &Priority::Low));
    }
}
