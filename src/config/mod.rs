//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! TrafficConfig::default() (the fixed bookinfo origins)
//!     → validation.rs (semantic checks)
//!     → TrafficDriver (owned, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - The binary always runs with the defaults; there is no config file,
//!   no environment override and no command line
//! - Every field is public so tests can aim the driver at mock origins
//! - Validation reports all problems, not just the first

pub mod schema;
pub mod validation;

pub use schema::{PacingConfig, RatingSubmission, SessionConfig, TargetsConfig, TrafficConfig};
pub use validation::{validate_config, ValidationError};
