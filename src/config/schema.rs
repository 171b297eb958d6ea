//! Configuration schema definitions.
//!
//! Defaults reproduce the bookinfo demo topology: four services on port 9080
//! reachable by their compose service names.

use std::time::Duration;

use serde::Serialize;

/// Root configuration for a traffic run.
#[derive(Debug, Clone)]
pub struct TrafficConfig {
    /// Base URLs of the four target services.
    pub targets: TargetsConfig,

    /// Pauses before and between requests.
    pub pacing: PacingConfig,

    /// Simulated user session replay.
    pub session: SessionConfig,

    /// Payload submitted by the POST phase.
    pub rating: RatingSubmission,

    /// Maximum number of body characters echoed per response.
    pub snippet_limit: usize,
}

impl TrafficConfig {
    pub const DEFAULT_SNIPPET_LIMIT: usize = 150;
}

/// Base URLs of the target services.
#[derive(Debug, Clone)]
pub struct TargetsConfig {
    pub productpage: String,
    pub details: String,
    pub reviews: String,
    pub ratings: String,
}

impl TargetsConfig {
    /// Iterate targets as `(name, base_url)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("productpage", self.productpage.as_str()),
            ("details", self.details.as_str()),
            ("reviews", self.reviews.as_str()),
            ("ratings", self.ratings.as_str()),
        ]
        .into_iter()
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            productpage: "http://productpage:9080".to_string(),
            details: "http://details:9080".to_string(),
            reviews: "http://reviews:9080".to_string(),
            ratings: "http://ratings:9080".to_string(),
        }
    }
}

/// Request pacing.
#[derive(Debug, Clone)]
pub struct PacingConfig {
    /// Best-effort wait before the first request, in milliseconds.
    pub startup_grace_ms: u64,

    /// Pause after every request, in milliseconds.
    pub request_interval_ms: u64,
}

impl PacingConfig {
    pub fn startup_grace(&self) -> Duration {
        Duration::from_millis(self.startup_grace_ms)
    }

    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            startup_grace_ms: 2000,
            request_interval_ms: 500,
        }
    }
}

/// Simulated user session replay settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of product page visits.
    pub visits: u32,

    /// User identities drawn uniformly for each visit.
    pub users: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            visits: 5,
            users: vec!["normal".into(), "test".into(), "reviewer".into()],
        }
    }
}

/// JSON body sent to the ratings service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RatingSubmission {
    pub reviewer: String,
    pub rating: u8,
}

impl Default for RatingSubmission {
    fn default() -> Self {
        Self {
            reviewer: "test-user".to_string(),
            rating: 5,
        }
    }
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            targets: TargetsConfig::default(),
            pacing: PacingConfig::default(),
            session: SessionConfig::default(),
            rating: RatingSubmission::default(),
            snippet_limit: Self::DEFAULT_SNIPPET_LIMIT,
        }
    }
}
