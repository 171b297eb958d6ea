//! Human-readable request trace.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::report::snippet::snippet;
use crate::traffic::classify::{Classification, Outcome};

const RULE: &str = "============================================";

/// Compose network the demo containers join.
const COMPOSE_NETWORK: &str = "docker-compose-boutique_bookinfo";

/// Container runtimes listed in the closing hint.
const RUNTIMES: [&str; 3] = ["nerdctl", "docker", "podman"];

/// Timestamps in the `Sat, 18 Oct 2026 09:30:00 GMT` form.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Writes the trace to any sink.
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, started_at: DateTime<Utc>) -> io::Result<()> {
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "   Bookinfo Traffic Generator")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Starting traffic generation at {}",
            format_timestamp(started_at)
        )?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn waiting(&mut self) -> io::Result<()> {
        writeln!(self.out, "Waiting for services to be ready...")?;
        self.out.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn phase(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!(">>> {}", title).yellow())?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn request(&mut self, number: u64, description: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            format!("[Request #{}]", number).blue(),
            description
        )?;
        self.out.flush()
    }

    /// Status line, optional body excerpt, then the blank separator.
    pub fn outcome(&mut self, outcome: &Outcome, snippet_limit: usize) -> io::Result<()> {
        match outcome {
            Outcome::Response { status, body } => {
                self.status_line(outcome.classification(), *status)?;
                if let Some(excerpt) = snippet(body, snippet_limit) {
                    writeln!(self.out, "{}", excerpt)?;
                }
            }
            Outcome::BodyError { status, message } => {
                self.status_line(outcome.classification(), *status)?;
                writeln!(self.out, "{} - {}", "✗ Error".red(), message)?;
            }
            Outcome::Transport { message } => {
                writeln!(self.out, "{} - {}", "✗ Error".red(), message)?;
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn status_line(&mut self, classification: Classification, status: u16) -> io::Result<()> {
        let label = match classification {
            Classification::Success => "✓ Success".green(),
            Classification::ClientError => "⚠ Client Error".yellow(),
            Classification::OtherError => "✗ Error".red(),
        };
        writeln!(self.out, "{} - HTTP {}", label, status)
    }

    pub fn summary(&mut self, total: u64, completed_at: DateTime<Utc>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "   Traffic Generation Complete")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out)?;
        writeln!(self.out, "Total requests sent: {}", total)?;
        writeln!(self.out, "Completed at: {}", format_timestamp(completed_at))?;
        writeln!(self.out)?;
        writeln!(self.out, "To run this again, execute:")?;
        for runtime in RUNTIMES {
            writeln!(
                self.out,
                "  {} run --rm --network {} traffic-generator",
                runtime, COMPOSE_NETWORK
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn render(f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut reporter = ConsoleReporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 3).unwrap();
        assert_eq!(format_timestamp(at), "Sun, 18 Oct 2026 09:05:03 GMT");
    }

    #[test]
    fn test_success_block() {
        let out = render(|r| {
            r.request(1, "GET /productpage (main page with reviews)")?;
            r.outcome(
                &Outcome::Response { status: 200, body: "<html>OK</html>".into() },
                150,
            )
        });
        assert_eq!(
            out,
            "[Request #1] GET /productpage (main page with reviews)\n\
             ✓ Success - HTTP 200\n\
             <html>OK</html>\n\
             \n"
        );
    }

    #[test]
    fn test_client_and_server_errors() {
        let out = render(|r| {
            r.outcome(&Outcome::Response { status: 404, body: String::new() }, 150)?;
            r.outcome(&Outcome::Response { status: 503, body: "down".into() }, 150)
        });
        assert_eq!(out, "⚠ Client Error - HTTP 404\n\n✗ Error - HTTP 503\ndown\n\n");
    }

    #[test]
    fn test_transport_failure_line() {
        let out = render(|r| {
            r.outcome(&Outcome::Transport { message: "connection refused".into() }, 150)
        });
        assert_eq!(out, "✗ Error - connection refused\n\n");
    }

    #[test]
    fn test_body_error_keeps_status_line() {
        let out = render(|r| {
            r.outcome(
                &Outcome::BodyError { status: 200, message: "end of file before message length reached".into() },
                150,
            )
        });
        assert_eq!(
            out,
            "✓ Success - HTTP 200\n✗ Error - end of file before message length reached\n\n"
        );
    }

    #[test]
    fn test_summary_reports_total_and_runtimes() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let out = render(|r| r.summary(16, at));
        assert!(out.contains("Total requests sent: 16\n"));
        assert!(out.contains("Completed at: Sun, 18 Oct 2026 12:00:00 GMT\n"));
        for runtime in RUNTIMES {
            assert!(out.contains(&format!(
                "  {} run --rm --network docker-compose-boutique_bookinfo traffic-generator\n",
                runtime
            )));
        }
    }
}
