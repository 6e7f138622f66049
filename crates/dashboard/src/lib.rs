//! `OrderFlow` dashboard data layer.
//!
//! Answers four queries (list orders, get one order, analytics, print
//! listing) from either a bundled mock collection or a remote JSON webhook,
//! chosen per call by a shared mock/real mode flag.
//!
//! # Layout
//!
//! - [`source`] - the [`OrderSource`](source::OrderSource) trait and its two
//!   implementations
//! - [`service`] - the facade UI code calls
//! - [`mode`] - the process-wide mode flag
//! - [`view`] - last-request-wins result holder for overlapping queries
//! - [`routes`] - JSON API over the facade

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod mode;
pub mod routes;
pub mod service;
pub mod source;
pub mod state;
pub mod view;

pub use config::{ConfigError, DashboardConfig, WebhookConfig};
pub use mode::{DataMode, ModeSwitch};
pub use service::DataService;
pub use source::{DataError, MockSource, OrderSource, WebhookClient};
pub use state::AppState;
pub use view::{Outcome, QueryView, Ticket};
