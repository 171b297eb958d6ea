//! Traffic subsystem.
//!
//! # Data Flow
//! ```text
//! TrafficConfig + Rng
//!     → plan.rs (ordered phases of RequestDescriptors)
//!     → driver.rs (issue, classify, print, pause; one at a time)
//!     → classify.rs (Success / ClientError / OtherError)
//!     → report/ (console trace)
//! ```
//!
//! # Design Decisions
//! - No retries, no concurrency, no branching on earlier results
//! - Phase order and request order within a phase are fixed

pub mod classify;
pub mod driver;
pub mod plan;
pub mod request;

pub use classify::{classify, Classification, Exchange, Outcome};
pub use driver::{RunSummary, TrafficDriver};
pub use plan::{build_plan, Phase};
pub use request::{HttpMethod, RequestDescriptor};
