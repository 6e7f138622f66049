//! `OrderFlow` Core - Shared types library.
//!
//! This crate provides the types shared by every `OrderFlow` component:
//! - `dashboard` - Data sources, the data-access facade and the JSON API
//! - `cli` - Command-line access to the same operations
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. Query predicates and report arithmetic live here so that every
//! data source evaluates them the same way.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, color codes, status/priority/station enums
//! - [`order`] - The order record
//! - [`query`] - Query parameter objects
//! - [`report`] - Listing, analytics and print results
//! - [`print`] - Print selection and document rendering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod order;
pub mod print;
pub mod query;
pub mod report;
pub mod types;

pub use order::{Order, OrderDetail, PackingUrgency};
pub use print::{DocumentKind, PrintError, PrintJob, PrintSelection};
pub use query::{AnalyticsQuery, OrderListQuery, OrderLookup, PrintOrdersQuery};
pub use report::{
    AnalyticsReport, CategoryTotals, OrderListing, PrintListing, PrintOrderLine,
    PriorityDistribution, StatusDistribution,
};
pub use types::*;
