//! Response classification.
//!
//! ```text
//! 200..=299          → Success
//! 400..=499          → ClientError
//! anything else      → OtherError (1xx, 3xx, 5xx, no response at all)
//! ```

/// Three-way verdict derived from an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    ClientError,
    OtherError,
}

/// Classify a status code; `None` means no response was obtained.
pub fn classify(status: Option<u16>) -> Classification {
    match status {
        Some(200..=299) => Classification::Success,
        Some(400..=499) => Classification::ClientError,
        _ => Classification::OtherError,
    }
}

/// What came back from one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A complete HTTP exchange, whatever the status.
    Response { status: u16, body: String },
    /// Status line and headers arrived, the body did not.
    BodyError { status: u16, message: String },
    /// No response could be obtained (DNS, connect, reset, timeout).
    Transport { message: String },
}

impl Outcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Response { status, .. } | Outcome::BodyError { status, .. } => Some(*status),
            Outcome::Transport { .. } => None,
        }
    }

    pub fn classification(&self) -> Classification {
        classify(self.status())
    }
}

/// A numbered request and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub number: u64,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        for code in [200, 201, 204, 250, 299] {
            assert_eq!(classify(Some(code)), Classification::Success, "{}", code);
        }
    }

    #[test]
    fn test_client_error_range() {
        for code in [400, 401, 404, 429, 499] {
            assert_eq!(classify(Some(code)), Classification::ClientError, "{}", code);
        }
    }

    #[test]
    fn test_everything_else_is_other_error() {
        for code in [100, 101, 199, 300, 302, 399, 500, 503, 599] {
            assert_eq!(classify(Some(code)), Classification::OtherError, "{}", code);
        }
        assert_eq!(classify(None), Classification::OtherError);
    }

    #[test]
    fn test_body_error_keeps_received_status() {
        let outcome = Outcome::BodyError { status: 404, message: "unexpected EOF".into() };
        assert_eq!(outcome.status(), Some(404));
        assert_eq!(outcome.classification(), Classification::ClientError);
    }

    #[test]
    fn test_transport_outcome_has_no_status() {
        let outcome = Outcome::Transport { message: "connection refused".into() };
        assert_eq!(outcome.status(), None);
        assert_eq!(outcome.classification(), Classification::OtherError);
    }
}
