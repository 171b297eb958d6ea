//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Banner → Grace period → Plan → Traffic
//! ```
//!
//! # Design Decisions
//! - The grace period is a fixed pause, not a readiness probe
//! - Any startup error is fatal

pub mod startup;
