//! The `DeliverySimulator` and its per-attempt decision tree.

use log::{debug, info};

use dd_core::rules::{
    BASE_DRAIN, DETOUR_DRAIN, DRAIN_SPREAD, LOW_BATTERY_THRESHOLD, MALFUNCTION_ONE_IN,
    OBSTACLE_ONE_IN, RECHARGE_ON_RETURN,
};
use dd_core::{DayConfig, RandomSource, Weather};

use crate::{DaySummary, DeliveryOutcome, FailureReason, OutcomeKind, SimResult, SimulationState};

/// Runs delivery attempts against one owned [`SimulationState`].
///
/// The random source is injected so tests can script every draw; real runs
/// pass a [`dd_core::SimRng`].
pub struct DeliverySimulator<R: RandomSource> {
    state: SimulationState,
    rng:   R,
}

impl<R: RandomSource> DeliverySimulator<R> {
    /// Full battery, zero counters.
    pub fn new(rng: R) -> Self {
        Self::with_state(SimulationState::default(), rng)
    }

    /// Resume from an existing state.
    pub fn with_state(state: SimulationState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Validate `config` and start from its starting battery.
    pub fn from_config(config: &DayConfig, rng: R) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::with_state(SimulationState::new(config.starting_battery()), rng))
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn summary(&self) -> DaySummary {
        self.state.summary()
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_parts(self) -> (SimulationState, R) {
        (self.state, self.rng)
    }

    /// Attempt one delivery to `location`, updating battery and counters.
    ///
    /// Draw order is fixed: weather, obstacle, base drain, and, only when the
    /// weather allows a flight, malfunction.  Never fails; every location
    /// string is accepted.
    pub fn attempt_delivery(&mut self, location: &str) -> DeliveryOutcome {
        let weather = Weather::draw(&mut self.rng);
        let obstacle = self.rng.one_in(OBSTACLE_ONE_IN);
        let base = BASE_DRAIN as u32;
        let mut drain = self.rng.uniform(base..=base + DRAIN_SPREAD as u32) as u8;
        debug!("{location}: weather={weather} obstacle={obstacle} drain={drain}");

        let battery_before = self.state.battery;
        let mut detoured = false;

        let kind = if weather.grounds_flight() {
            OutcomeKind::Delayed
        } else if weather == Weather::Windy && battery_before.percent() < LOW_BATTERY_THRESHOLD {
            self.state.battery.recharge(RECHARGE_ON_RETURN);
            OutcomeKind::ReturnedToBase
        } else {
            if obstacle {
                detoured = true;
                drain += DETOUR_DRAIN;
            }
            self.fly(drain)
        };

        self.state.record(&kind);
        info!(
            "{location}: {kind:?}, battery {battery_before} -> {}",
            self.state.battery
        );

        DeliveryOutcome {
            location: location.to_owned(),
            kind,
            weather,
            detoured,
            drain,
            battery_before,
            battery_after: self.state.battery,
        }
    }

    /// Malfunction check followed by the drain decision.
    fn fly(&mut self, drain: u8) -> OutcomeKind {
        let battery = &mut self.state.battery;
        if self.rng.one_in(MALFUNCTION_ONE_IN) {
            battery.drain(drain);
            OutcomeKind::Failed(FailureReason::Malfunction)
        } else if battery.can_cover(drain) {
            battery.drain(drain);
            OutcomeKind::Succeeded
        } else {
            OutcomeKind::Failed(FailureReason::InsufficientBattery)
        }
    }
}
