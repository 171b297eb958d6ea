//! Crate-wide error type.
//!
//! Only orchestration-level failures live here. A request that gets no HTTP
//! response is not an error: it is reported as
//! [`Outcome::Transport`](crate::traffic::Outcome::Transport) and the run
//! carries on.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Failures that abort a traffic run.
#[derive(Debug, Error)]
pub enum TrafficError {
    /// The configuration did not pass semantic validation.
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    /// A request URL could not be built from a target origin.
    #[error("cannot build URL for {target} from {base}: {source}")]
    Url {
        target: &'static str,
        base: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Writing the console trace failed.
    #[error("failed to write trace output: {0}")]
    Output(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
