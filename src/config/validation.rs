//! Configuration validation.
//!
//! # Responsibilities
//! - Check every target is an absolute http(s) URL with a host
//! - Check the session replay has identities to draw from
//! - Check the snippet limit is usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: TrafficConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use url::Url;

use crate::config::schema::TrafficConfig;

/// A single semantic problem with a [`TrafficConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Target base URL does not parse.
    MalformedTarget { target: &'static str, reason: String },
    /// Target base URL is not http or https.
    UnsupportedScheme { target: &'static str, scheme: String },
    /// Target base URL has no host.
    MissingHost { target: &'static str },
    /// Session replay has no identities.
    EmptyUsers,
    /// Snippet limit of zero would hide every body.
    ZeroSnippetLimit,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MalformedTarget { target, reason } => {
                write!(f, "target {} is not a valid URL ({})", target, reason)
            }
            ValidationError::UnsupportedScheme { target, scheme } => {
                write!(f, "target {} uses unsupported scheme {:?}", target, scheme)
            }
            ValidationError::MissingHost { target } => {
                write!(f, "target {} has no host", target)
            }
            ValidationError::EmptyUsers => write!(f, "session users must not be empty"),
            ValidationError::ZeroSnippetLimit => write!(f, "snippet limit must be greater than zero"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &TrafficConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (target, base) in config.targets.iter() {
        match Url::parse(base) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(ValidationError::UnsupportedScheme {
                        target,
                        scheme: url.scheme().to_string(),
                    });
                } else if url.host_str().map_or(true, str::is_empty) {
                    errors.push(ValidationError::MissingHost { target });
                }
            }
            Err(e) => errors.push(ValidationError::MalformedTarget {
                target,
                reason: e.to_string(),
            }),
        }
    }

    if config.session.users.is_empty() {
        errors.push(ValidationError::EmptyUsers);
    }

    if config.snippet_limit == 0 {
        errors.push(ValidationError::ZeroSnippetLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
