//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Keep diagnostics on stderr so stdout carries only the request trace
//! - Stay silent on a healthy run
//!
//! # Design Decisions
//! - Log level configurable through `RUST_LOG`
//! - Defaults to `traffic_generator=warn`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "traffic_generator=warn";

/// Install the global subscriber. Call once, from `main`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
