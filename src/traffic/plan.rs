//! The ordered request plan.
//!
//! The whole run is laid out before the first request leaves, so the trace
//! order never depends on how earlier requests went. Only the session replay
//! phase consults the random source.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::json;
use url::Url;

use crate::config::{TrafficConfig, ValidationError};
use crate::error::TrafficError;
use crate::traffic::request::RequestDescriptor;

/// A titled, ordered group of requests against one service area.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub title: String,
    pub requests: Vec<RequestDescriptor>,
}

impl Phase {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            requests: Vec::new(),
        }
    }
}

/// Build every phase of a run in order.
pub fn build_plan<R: Rng + ?Sized>(
    config: &TrafficConfig,
    rng: &mut R,
) -> Result<Vec<Phase>, TrafficError> {
    let targets = &config.targets;
    let page = |path: &str| endpoint("productpage", &targets.productpage, path);

    let mut product = Phase::new("Testing ProductPage Service");
    product.requests.extend([
        RequestDescriptor::get(
            page("/productpage?u=normal")?,
            "GET /productpage (main page with reviews)",
        ),
        RequestDescriptor::get(
            page("/productpage?u=test")?,
            "GET /productpage (different user session)",
        ),
        RequestDescriptor::get(page("/productpage")?, "GET /productpage (no user parameter)"),
        RequestDescriptor::get(page("/health")?, "GET /health (productpage health check)"),
    ]);

    let details = resource_phase(
        "Testing Details Service",
        ("details", targets.details.as_str()),
        "book details",
    )?;
    let reviews = resource_phase(
        "Testing Reviews Service",
        ("reviews", targets.reviews.as_str()),
        "product reviews",
    )?;
    let ratings = resource_phase(
        "Testing Ratings Service",
        ("ratings", targets.ratings.as_str()),
        "product ratings",
    )?;

    let mut session = Phase::new("Simulating Realistic User Behavior (Multiple Page Views)");
    for visit in 1..=config.session.visits {
        let user = config
            .session
            .users
            .choose(rng)
            .ok_or_else(|| TrafficError::Config(vec![ValidationError::EmptyUsers]))?;
        session.requests.push(RequestDescriptor::get(
            page(&format!("/productpage?u={}", user))?,
            format!("GET /productpage (simulated user: {}, visit #{})", user, visit),
        ));
    }

    let mut post = Phase::new("Testing POST Requests");
    post.requests.push(RequestDescriptor::post_json(
        endpoint("ratings", &targets.ratings, "/ratings/0")?,
        json!(config.rating),
        "POST /ratings/0 (submit rating)",
    ));

    Ok(vec![product, details, reviews, ratings, session, post])
}

/// Known product, missing product, then the service health check.
fn resource_phase(
    title: &str,
    (service, base): (&'static str, &str),
    known_label: &str,
) -> Result<Phase, TrafficError> {
    let mut phase = Phase::new(title);
    phase.requests.extend([
        RequestDescriptor::get(
            endpoint(service, base, &format!("/{}/0", service))?,
            format!("GET /{}/0 ({})", service, known_label),
        ),
        RequestDescriptor::get(
            endpoint(service, base, &format!("/{}/1", service))?,
            format!("GET /{}/1 (non-existent product)", service),
        ),
        RequestDescriptor::get(
            endpoint(service, base, "/health")?,
            format!("GET /health ({} service)", service),
        ),
    ]);
    Ok(phase)
}

/// Append `path` to a base URL, keeping any path prefix the base carries.
fn endpoint(target: &'static str, base: &str, path: &str) -> Result<Url, TrafficError> {
    let raw = format!("{}{}", base.trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|source| TrafficError::Url {
        target,
        base: base.to_string(),
        source,
    })
}
