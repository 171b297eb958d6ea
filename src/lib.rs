//! Bookinfo traffic generator library.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod report;
pub mod traffic;

pub use config::TrafficConfig;
pub use error::TrafficError;
pub use traffic::{RunSummary, TrafficDriver};
