//! Unit tests for dd-sim.

use dd_core::{Battery, ScriptedRng, SimRng, Weather};

use crate::{DeliverySimulator, FailureReason, OutcomeKind, SimulationState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn weather_index(weather: Weather) -> u32 {
    Weather::ALL.iter().position(|&w| w == weather).unwrap() as u32
}

/// Script one attempt.  `malfunction` is `None` when the attempt should end
/// before the malfunction draw (rain, or wind on a low battery).
fn script(weather: Weather, obstacle: bool, drain: u32, malfunction: Option<bool>) -> ScriptedRng {
    let rng = ScriptedRng::new()
        .ints([weather_index(weather), drain])
        .bools([obstacle]);
    match malfunction {
        Some(m) => rng.bools([m]),
        None    => rng,
    }
}

fn sim_at(battery: u8, rng: ScriptedRng) -> DeliverySimulator<ScriptedRng> {
    DeliverySimulator::with_state(SimulationState::new(Battery::new(battery)), rng)
}

// ── Decision tree ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod attempt_tests {
    use super::*;

    #[test]
    fn clear_flight_succeeds() {
        let mut sim = sim_at(100, script(Weather::Sunny, false, 10, Some(false)));
        let out = sim.attempt_delivery("Location A");

        assert_eq!(out.kind, OutcomeKind::Succeeded);
        assert_eq!(out.battery_before.percent(), 100);
        assert_eq!(out.battery_after.percent(), 90);
        assert_eq!(sim.state().battery.percent(), 90);
        assert_eq!(sim.state().success, 1);
        assert_eq!(out.location, "Location A");
        assert!(!out.detoured);
    }

    #[test]
    fn insufficient_battery_fails_without_drain() {
        let mut sim = sim_at(5, script(Weather::Sunny, false, 10, Some(false)));
        let out = sim.attempt_delivery("Location B");

        assert_eq!(out.kind, OutcomeKind::Failed(FailureReason::InsufficientBattery));
        assert_eq!(sim.state().battery.percent(), 5);
        assert_eq!(sim.state().failed, 1);
        assert_eq!(out.message(), "Not enough battery! Mission failed.");
    }

    #[test]
    fn malfunction_still_drains() {
        let mut sim = sim_at(50, script(Weather::Sunny, false, 15, Some(true)));
        let out = sim.attempt_delivery("Location C");

        assert_eq!(out.kind, OutcomeKind::Failed(FailureReason::Malfunction));
        assert_eq!(sim.state().battery.percent(), 35);
        assert_eq!(sim.state().failed, 1);
        assert_eq!(out.message(), "System problem! Delivery failed.");
    }

    #[test]
    fn malfunction_drain_floors_at_zero() {
        let mut sim = sim_at(8, script(Weather::Sunny, true, 25, Some(true)));
        let out = sim.attempt_delivery("Location A");

        assert_eq!(out.kind, OutcomeKind::Failed(FailureReason::Malfunction));
        assert_eq!(out.drain, 30);
        assert_eq!(sim.state().battery, Battery::EMPTY);
    }

    #[test]
    fn rain_delays_for_every_draw() {
        for obstacle in [false, true] {
            for drain in [10, 17, 25] {
                let mut sim = sim_at(60, script(Weather::Rainy, obstacle, drain, None));
                let out = sim.attempt_delivery("Location A");

                assert_eq!(out.kind, OutcomeKind::Delayed);
                assert_eq!(sim.state().battery.percent(), 60);
                assert_eq!(sim.state().delayed, 1);
                assert!(!out.detoured);
                // The malfunction draw never happens.
                assert!(sim.rng_mut().is_exhausted());
            }
        }
    }

    #[test]
    fn rain_on_low_battery_is_still_plain_delay() {
        let mut sim = sim_at(10, script(Weather::Rainy, false, 10, None));
        assert_eq!(sim.attempt_delivery("Location A").kind, OutcomeKind::Delayed);
        assert_eq!(sim.state().battery.percent(), 10);
    }

    #[test]
    fn wind_on_low_battery_returns_to_base() {
        for obstacle in [false, true] {
            let mut sim = sim_at(35, script(Weather::Windy, obstacle, 20, None));
            let out = sim.attempt_delivery("Location B");

            assert_eq!(out.kind, OutcomeKind::ReturnedToBase);
            assert_eq!(out.battery_after.percent(), 45);
            assert_eq!(sim.state().delayed, 1);
            assert_eq!(sim.state().failed, 0);
            assert!(sim.rng_mut().is_exhausted());
        }
    }

    #[test]
    fn wind_threshold_is_exclusive() {
        let mut low = sim_at(39, script(Weather::Windy, false, 10, None));
        assert_eq!(low.attempt_delivery("x").kind, OutcomeKind::ReturnedToBase);
        assert_eq!(low.state().battery.percent(), 49);

        let mut ok = sim_at(40, script(Weather::Windy, false, 10, Some(false)));
        assert_eq!(ok.attempt_delivery("x").kind, OutcomeKind::Succeeded);
        assert_eq!(ok.state().battery.percent(), 30);
    }

    #[test]
    fn obstacle_adds_detour_drain() {
        let mut sim = sim_at(100, script(Weather::Sunny, true, 10, Some(false)));
        let out = sim.attempt_delivery("Location A");

        assert!(out.detoured);
        assert_eq!(out.drain, 15);
        assert_eq!(sim.state().battery.percent(), 85);
    }

    #[test]
    fn detour_can_make_flight_unaffordable() {
        let mut sim = sim_at(14, script(Weather::Sunny, true, 10, Some(false)));
        let out = sim.attempt_delivery("Location A");

        assert_eq!(out.kind, OutcomeKind::Failed(FailureReason::InsufficientBattery));
        assert_eq!(sim.state().battery.percent(), 14);
    }

    #[test]
    fn exact_charge_is_enough() {
        let mut sim = sim_at(20, script(Weather::Sunny, false, 20, Some(false)));
        assert_eq!(sim.attempt_delivery("x").kind, OutcomeKind::Succeeded);
        assert_eq!(sim.state().battery, Battery::EMPTY);
    }

    #[test]
    fn any_location_string_is_accepted() {
        let mut sim = sim_at(100, script(Weather::Sunny, false, 10, Some(false)));
        let out = sim.attempt_delivery("");
        assert_eq!(out.location, "");
        assert_eq!(out.kind, OutcomeKind::Succeeded);
    }
}

// ── Invariants under real randomness ──────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn battery_stays_in_range_and_one_counter_moves() {
        for seed in 0..200 {
            let mut sim = DeliverySimulator::new(SimRng::new(seed));
            for i in 0..20 {
                let before = *sim.state();
                let out = sim.attempt_delivery("loop");
                let after = *sim.state();

                assert!(after.battery.percent() <= 100);
                assert_eq!(after.total_attempts(), before.total_attempts() + 1, "seed {seed} step {i}");
                let moved = [
                    after.success - before.success,
                    after.failed - before.failed,
                    after.delayed - before.delayed,
                ];
                assert_eq!(moved.iter().sum::<u32>(), 1);
                assert_eq!(out.battery_before, before.battery);
                assert_eq!(out.battery_after, after.battery);
            }
        }
    }

    #[test]
    fn only_returning_to_base_raises_battery() {
        for seed in 0..200 {
            let mut sim = DeliverySimulator::new(SimRng::new(seed));
            for _ in 0..20 {
                let out = sim.attempt_delivery("loop");
                if out.battery_after > out.battery_before {
                    assert_eq!(out.kind, OutcomeKind::ReturnedToBase);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_day() {
        let mut a = DeliverySimulator::new(SimRng::new(77));
        let mut b = DeliverySimulator::new(SimRng::new(77));
        for _ in 0..10 {
            assert_eq!(a.attempt_delivery("x"), b.attempt_delivery("x"));
        }
        assert_eq!(a.state(), b.state());
    }
}

// ── Outcome helpers ───────────────────────────────────────────────────────────

#[cfg(test)]
mod outcome_tests {
    use crate::Tally;

    use super::*;

    #[test]
    fn tallies() {
        assert_eq!(OutcomeKind::Delayed.tally(), Tally::Delayed);
        assert_eq!(OutcomeKind::ReturnedToBase.tally(), Tally::Delayed);
        assert_eq!(OutcomeKind::Failed(FailureReason::Malfunction).tally(), Tally::Failed);
        assert_eq!(OutcomeKind::Failed(FailureReason::InsufficientBattery).tally(), Tally::Failed);
        assert_eq!(OutcomeKind::Succeeded.tally(), Tally::Success);
    }

    #[test]
    fn drain_decision_reached_only_by_flights() {
        assert!(!OutcomeKind::Delayed.reached_drain_decision());
        assert!(!OutcomeKind::ReturnedToBase.reached_drain_decision());
        assert!(OutcomeKind::Succeeded.reached_drain_decision());
        assert!(OutcomeKind::Failed(FailureReason::Malfunction).reached_drain_decision());
    }

    #[test]
    fn messages() {
        assert_eq!(OutcomeKind::Delayed.message(), "Rainy weather! Delivery delayed.");
        assert_eq!(
            OutcomeKind::ReturnedToBase.message(),
            "Windy and low battery! Returning to base for recharge."
        );
        assert_eq!(OutcomeKind::Succeeded.message(), "Delivery successful!");
    }

    #[test]
    fn record_bumps_matching_counter() {
        let mut state = SimulationState::default();
        state.record(&OutcomeKind::ReturnedToBase);
        state.record(&OutcomeKind::Succeeded);
        state.record(&OutcomeKind::Failed(FailureReason::Malfunction));
        state.record(&OutcomeKind::Delayed);
        assert_eq!((state.success, state.failed, state.delayed), (1, 1, 2));
        assert_eq!(state.summary().total_attempts(), 4);
    }
}

// ── Config and day runner ─────────────────────────────────────────────────────

#[cfg(test)]
mod day_tests {
    use dd_core::{DayConfig, ROUTE};

    use crate::{DaySummary, DeliveryObserver, DeliveryOutcome, NoopObserver, SimError, run_day};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        ended:  Option<DaySummary>,
    }

    impl DeliveryObserver for Recorder {
        fn on_attempt_start(&mut self, location: &str) {
            self.events.push(format!("start {location}"));
        }

        fn on_outcome(&mut self, outcome: &DeliveryOutcome) {
            self.events.push(format!("{} {:?}", outcome.location, outcome.kind));
        }

        fn on_day_end(&mut self, summary: &DaySummary) {
            self.ended = Some(*summary);
        }
    }

    #[test]
    fn from_config_uses_starting_battery() {
        let cfg = DayConfig { starting_battery: 70, ..DayConfig::default() };
        let sim = DeliverySimulator::from_config(&cfg, ScriptedRng::new()).unwrap();
        assert_eq!(sim.state().battery.percent(), 70);
        assert_eq!(sim.state().total_attempts(), 0);
    }

    #[test]
    fn from_config_rejects_invalid() {
        let cfg = DayConfig { starting_battery: 120, ..DayConfig::default() };
        let result = DeliverySimulator::from_config(&cfg, ScriptedRng::new());
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn runs_locations_in_order() {
        // A: sunny, clear, drain 10      → success, 90
        // B: rainy                       → delayed, 90
        // C: sunny, obstacle, drain 20   → malfunction, 90 - 25 = 65
        let rng = ScriptedRng::new()
            .ints([0, 10, 2, 12, 0, 20])
            .bools([false, false, true, true, true]);
        let mut sim = DeliverySimulator::new(rng);
        let mut rec = Recorder::default();

        let summary = run_day(&mut sim, &["A", "B", "C"], &mut rec);

        assert_eq!(
            rec.events,
            [
                "start A",
                "A Succeeded",
                "start B",
                "B Delayed",
                "start C",
                "C Failed(Malfunction)",
            ]
        );
        assert_eq!(summary, DaySummary { success: 1, failed: 1, delayed: 1, battery: Battery::new(65) });
        assert_eq!(rec.ended, Some(summary));
        assert!(sim.rng_mut().is_exhausted());
    }

    #[test]
    fn accepts_owned_location_lists() {
        let cfg = DayConfig { seed: Some(5), ..DayConfig::default() };
        let locations: Vec<String> = ROUTE.iter().map(|s| s.to_string()).collect();
        let mut sim = DeliverySimulator::from_config(&cfg, cfg.make_rng()).unwrap();
        let summary = run_day(&mut sim, &locations, &mut NoopObserver);
        assert_eq!(summary.total_attempts(), 3);
        let (state, rng) = sim.into_parts();
        assert_eq!(state.summary(), summary);
        assert_eq!(rng.seed(), 5);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::DaySummary;

    use super::*;

    #[test]
    fn summary_serializes_battery_as_number() {
        let summary = DaySummary { success: 2, failed: 0, delayed: 1, battery: Battery::new(55) };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"success":2,"failed":0,"delayed":1,"battery":55}"#);
        let back: DaySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
