//! One interactive delivery day, from banner to summary.

use std::io::{BufRead, Write};

use log::info;

use dd_core::{DayConfig, ROUTE, RandomSource};
use dd_sim::{DaySummary, DeliverySimulator, SimulationState, run_day};

use crate::{ConsoleObserver, ConsoleResult, StartDecision, read_start_key, render};

/// How a session ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SessionOutcome {
    /// The operator declined to start.  `state` is untouched.
    Cancelled { state: SimulationState },
    /// Every stop on the route was attempted.
    Completed(DaySummary),
}

/// Print the banner, ask to start, and run the day if the operator agrees.
///
/// Cancelling is a normal outcome, not an error.  Errors come only from an
/// invalid `config` or from the underlying reader / writer.
pub fn run_session<I, W, R>(
    input:  &mut I,
    output: &mut W,
    config: &DayConfig,
    rng:    R,
) -> ConsoleResult<SessionOutcome>
where
    I: BufRead,
    W: Write,
    R: RandomSource,
{
    let mut sim = DeliverySimulator::from_config(config, rng)?;

    render::write_banner(output, sim.state().battery)?;
    render::write_prompt(output)?;

    let key = read_start_key(input)?;
    if StartDecision::from_key(key) == StartDecision::Cancel {
        info!("start declined (key {key:?})");
        render::write_cancelled(output)?;
        output.flush()?;
        return Ok(SessionOutcome::Cancelled { state: *sim.state() });
    }

    let mut observer = ConsoleObserver::new(&mut *output);
    let summary = run_day(&mut sim, &ROUTE, &mut observer);
    if let Some(e) = observer.take_error() {
        return Err(e.into());
    }

    Ok(SessionOutcome::Completed(summary))
}
