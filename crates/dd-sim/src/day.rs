//! Runs a full delivery day over an ordered list of locations.

use dd_core::RandomSource;

use crate::{DaySummary, DeliveryObserver, DeliverySimulator};

/// Attempt one delivery per location, in order, then report the summary.
pub fn run_day<R, O, S>(
    sim:       &mut DeliverySimulator<R>,
    locations: &[S],
    observer:  &mut O,
) -> DaySummary
where
    R: RandomSource,
    O: DeliveryObserver,
    S: AsRef<str>,
{
    for location in locations {
        let location = location.as_ref();
        observer.on_attempt_start(location);
        let outcome = sim.attempt_delivery(location);
        observer.on_outcome(&outcome);
    }

    let summary = sim.summary();
    observer.on_day_end(&summary);
    summary
}
