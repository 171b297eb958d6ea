//! The traffic driver.
//!
//! # Responsibilities
//! - Own the request counter and the HTTP client
//! - Issue each request, classify and print the result, then pause
//! - Walk the phase plan in order and print the closing summary
//!
//! # Design Decisions
//! - Strictly sequential: one request in flight, ever
//! - Any HTTP status is data; only a missing response is a failure, and even
//!   that is absorbed into the trace
//! - The counter lives in the driver, so `&mut self` orders every update

use std::error::Error as StdError;
use std::io::Write;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::Rng;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::{validate_config, TrafficConfig};
use crate::error::TrafficError;
use crate::lifecycle::startup::grace_period;
use crate::report::ConsoleReporter;
use crate::traffic::classify::{Exchange, Outcome};
use crate::traffic::plan::build_plan;
use crate::traffic::request::RequestDescriptor;

/// What a finished run reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_requests: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Sequential request issuer writing its trace to `W`.
pub struct TrafficDriver<W> {
    config: TrafficConfig,
    client: reqwest::Client,
    reporter: ConsoleReporter<W>,
    requests_issued: u64,
}

impl<W: Write> TrafficDriver<W> {
    /// Validate `config` and build the HTTP client.
    pub fn new(config: TrafficConfig, out: W) -> Result<Self, TrafficError> {
        validate_config(&config).map_err(TrafficError::Config)?;

        // Targets are fixed; ambient proxy variables must not reroute them.
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(TrafficError::Client)?;

        Ok(Self {
            config,
            client,
            reporter: ConsoleReporter::new(out),
            requests_issued: 0,
        })
    }

    /// Requests issued so far.
    pub fn requests_issued(&self) -> u64 {
        self.requests_issued
    }

    /// Hand back the output sink.
    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }

    /// Issue one request, print its block and pause before returning.
    ///
    /// Only a failure to write the trace is returned as an error; transport
    /// failures come back as [`Outcome::Transport`], a body cut short after
    /// the status line as [`Outcome::BodyError`].
    pub async fn issue_request(
        &mut self,
        request: &RequestDescriptor,
    ) -> Result<Exchange, TrafficError> {
        self.requests_issued += 1;
        let number = self.requests_issued;
        self.reporter.request(number, &request.description)?;

        let start = Instant::now();
        let outcome = self.send(request).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            Outcome::Response { status, .. } => tracing::debug!(
                number,
                method = %request.method,
                url = %request.url,
                status,
                elapsed_ms,
                "Request completed"
            ),
            Outcome::BodyError { status, message } => tracing::warn!(
                number,
                method = %request.method,
                url = %request.url,
                status,
                error = %message,
                elapsed_ms,
                "Response body could not be read"
            ),
            Outcome::Transport { message } => tracing::warn!(
                number,
                method = %request.method,
                url = %request.url,
                error = %message,
                elapsed_ms,
                "Request failed without response"
            ),
        }

        self.reporter.outcome(&outcome, self.config.snippet_limit)?;
        tokio::time::sleep(self.config.pacing.request_interval()).await;

        Ok(Exchange { number, outcome })
    }

    async fn send(&self, request: &RequestDescriptor) -> Outcome {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), request.url.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return Outcome::Transport { message: describe(&e) },
        };

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));

        match response.text().await {
            Ok(text) => Outcome::Response {
                status,
                body: render_body(text, is_json),
            },
            Err(e) => Outcome::BodyError {
                status,
                message: describe(&e),
            },
        }
    }

    /// Run every phase in order and print the summary.
    pub async fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<RunSummary, TrafficError> {
        let started_at = Utc::now();
        tracing::info!(
            productpage = %self.config.targets.productpage,
            details = %self.config.targets.details,
            reviews = %self.config.targets.reviews,
            ratings = %self.config.targets.ratings,
            "Traffic generation starting"
        );

        self.reporter.banner(started_at)?;
        self.reporter.waiting()?;
        grace_period(self.config.pacing.startup_grace()).await;
        self.reporter.blank()?;

        let phases = build_plan(&self.config, rng)?;
        for phase in &phases {
            self.reporter.phase(&phase.title)?;
            for request in &phase.requests {
                self.issue_request(request).await?;
            }
        }

        let completed_at = Utc::now();
        self.reporter.summary(self.requests_issued, completed_at)?;
        tracing::info!(
            total_requests = self.requests_issued,
            elapsed_ms = (completed_at - started_at).num_milliseconds(),
            "Traffic generation complete"
        );

        Ok(RunSummary {
            total_requests: self.requests_issued,
            started_at,
            completed_at,
        })
    }
}

/// JSON bodies are echoed in compact form; everything else verbatim.
fn render_body(text: String, is_json: bool) -> String {
    if is_json {
        if let Ok(value) = serde_json::from_str::<Value>(&text) {
            return value.to_string();
        }
    }
    text
}

/// Error message followed by its source chain.
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
