//! delivery-day — one drone, three deliveries, one summary.
//!
//! The RNG is seeded once from the clock at startup, so every run flies a
//! different day.  Diagnostics go to stderr through `env_logger`
//! (`RUST_LOG=debug` shows every draw); stdout carries only the transcript.

use std::io;

use anyhow::Result;
use log::debug;

use dd_console::{SessionOutcome, run_session};
use dd_core::DayConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = DayConfig::default();
    let rng = config.make_rng();
    debug!("seed {}", rng.seed());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run_session(&mut stdin.lock(), &mut stdout, &config, rng)? {
        SessionOutcome::Cancelled { .. } => debug!("mission cancelled"),
        SessionOutcome::Completed(summary) => debug!("day complete: {summary:?}"),
    }

    Ok(())
}
