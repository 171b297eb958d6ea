//! Bookinfo Traffic Generator
//!
//! Replays a fixed sequence of HTTP requests against the bookinfo demo
//! services so a service mesh or tracing backend has something to show.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                   TRAFFIC GENERATOR                       │
//!   │                                                           │
//!   │  ┌────────┐    ┌────────┐    ┌────────┐    ┌──────────┐  │
//!   │  │ config │───▶│  plan  │───▶│ driver │───▶│  report  │──┼──▶ stdout
//!   │  └────────┘    └────────┘    └───┬────┘    └──────────┘  │
//!   │                                  │                        │
//!   └──────────────────────────────────┼────────────────────────┘
//!                                      ▼
//!              productpage · details · reviews · ratings
//! ```
//!
//! Exits 0 after the summary, 1 on any failure that escapes the run.

use std::process::ExitCode;

use colored::Colorize;

use traffic_generator::observability::logging::init_logging;
use traffic_generator::{TrafficConfig, TrafficDriver, TrafficError};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Fatal error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), TrafficError> {
    let mut driver = TrafficDriver::new(TrafficConfig::default(), std::io::stdout())?;
    driver.run(&mut rand::thread_rng()).await?;
    Ok(())
}
