//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Driver and lifecycle produce:
//!     → logging.rs (structured diagnostic events on stderr)
//!
//! The request trace itself is written by report/, not by tracing.
//! ```

pub mod logging;
