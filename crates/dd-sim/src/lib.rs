//! `dd-sim` — delivery attempt logic for the drone delivery simulator.
//!
//! # One attempt
//!
//! ```text
//! draw weather, obstacle, base drain (10..=25)
//!   Rainy                   → Delayed          (no battery change)
//!   Windy and battery < 40  → ReturnedToBase   (battery +10, capped)
//!   obstacle                → drain += 5
//!   draw malfunction (1/10)
//!     malfunction           → Failed(Malfunction)          battery -= drain, floor 0
//!     battery >= drain      → Succeeded                    battery -= drain
//!     otherwise             → Failed(InsufficientBattery)  no battery change
//! ```
//!
//! Exactly one of the success / failed / delayed counters increments per
//! attempt.  Returning to base counts as delayed.
//!
//! # Quick-start
//!
//! ```rust
//! use dd_core::SimRng;
//! use dd_sim::{DeliverySimulator, NoopObserver, run_day};
//!
//! let mut sim = DeliverySimulator::new(SimRng::new(42));
//! let summary = run_day(&mut sim, &["Location A", "Location B"], &mut NoopObserver);
//! assert_eq!(summary.total_attempts(), 2);
//! ```

pub mod day;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod simulator;
pub mod state;

#[cfg(test)]
mod tests;

pub use day::run_day;
pub use error::{SimError, SimResult};
pub use observer::{DeliveryObserver, NoopObserver};
pub use outcome::{DeliveryOutcome, FailureReason, OutcomeKind, Tally};
pub use simulator::DeliverySimulator;
pub use state::{DaySummary, SimulationState};
