//! Console trace rendering.
//!
//! # Data Flow
//! ```text
//! TrafficDriver
//!     → console.rs (banner, phase headers, request blocks, summary)
//!     → snippet.rs (body excerpt rules)
//!     → any io::Write sink (stdout in the binary, a buffer in tests)
//! ```
//!
//! # Design Decisions
//! - The trace on stdout is the product; diagnostics go through tracing
//! - Write failures propagate, they are not swallowed

pub mod console;
pub mod snippet;

pub use console::{format_timestamp, ConsoleReporter};
pub use snippet::snippet;
