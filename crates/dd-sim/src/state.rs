//! Battery level and outcome counters carried across a delivery day.

use dd_core::Battery;

use crate::{OutcomeKind, Tally};

/// Mutable state of one delivery day.
///
/// Owned by a single [`DeliverySimulator`][crate::DeliverySimulator]; only
/// `attempt_delivery` changes it during a run.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    pub battery: Battery,
    pub success: u32,
    pub failed:  u32,
    pub delayed: u32,
}

impl SimulationState {
    /// Fresh counters with the given starting charge.
    pub fn new(battery: Battery) -> Self {
        Self { battery, ..Self::default() }
    }

    /// Bump the one counter that `kind` belongs to.
    pub fn record(&mut self, kind: &OutcomeKind) {
        match kind.tally() {
            Tally::Success => self.success += 1,
            Tally::Failed  => self.failed += 1,
            Tally::Delayed => self.delayed += 1,
        }
    }

    pub fn total_attempts(&self) -> u32 {
        self.success + self.failed + self.delayed
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary {
            success: self.success,
            failed:  self.failed,
            delayed: self.delayed,
            battery: self.battery,
        }
    }
}

/// End-of-day snapshot handed to observers and printed by the console.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    pub success: u32,
    pub failed:  u32,
    pub delayed: u32,
    pub battery: Battery,
}

impl DaySummary {
    pub fn total_attempts(&self) -> u32 {
        self.success + self.failed + self.delayed
    }
}
