//! Startup orchestration.
//!
//! # Responsibilities
//! - Give freshly started services a moment before traffic begins
//!
//! # Design Decisions
//! - Best effort: no health polling, no retry, traffic starts regardless

use std::time::Duration;

/// Sleep through the startup grace period.
pub async fn grace_period(wait: Duration) {
    if wait.is_zero() {
        return;
    }
    tracing::debug!(wait_ms = wait.as_millis() as u64, "Waiting for services");
    tokio::time::sleep(wait).await;
}
