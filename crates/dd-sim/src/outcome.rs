//! The result of a single delivery attempt.

use dd_core::{Battery, Weather};

/// Why a flyable attempt still failed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureReason {
    /// Random system problem mid-flight.  The flight's drain is still paid.
    Malfunction,
    /// The charge did not cover the flight.  The drone never took off.
    InsufficientBattery,
}

/// Terminal state of one attempt.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    /// Grounded by rain.
    Delayed,
    /// Wind plus low charge: back to base for a short recharge.
    ReturnedToBase,
    Failed(FailureReason),
    Succeeded,
}

/// The counter an outcome increments.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Tally {
    Success,
    Failed,
    Delayed,
}

impl OutcomeKind {
    pub fn tally(&self) -> Tally {
        match self {
            OutcomeKind::Delayed | OutcomeKind::ReturnedToBase => Tally::Delayed,
            OutcomeKind::Failed(_) => Tally::Failed,
            OutcomeKind::Succeeded => Tally::Success,
        }
    }

    /// Human-readable line describing the outcome.
    pub fn message(&self) -> &'static str {
        match self {
            OutcomeKind::Delayed => "Rainy weather! Delivery delayed.",
            OutcomeKind::ReturnedToBase => "Windy and low battery! Returning to base for recharge.",
            OutcomeKind::Failed(FailureReason::Malfunction) => "System problem! Delivery failed.",
            OutcomeKind::Failed(FailureReason::InsufficientBattery) => {
                "Not enough battery! Mission failed."
            }
            OutcomeKind::Succeeded => "Delivery successful!",
        }
    }

    /// `true` once the attempt got past the weather checks and the drain was
    /// weighed against the battery.
    pub fn reached_drain_decision(&self) -> bool {
        matches!(self, OutcomeKind::Failed(_) | OutcomeKind::Succeeded)
    }
}

/// Everything observable about one attempt.  Produced fresh per call and
/// never stored by the simulator.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryOutcome {
    pub location: String,
    pub kind:     OutcomeKind,
    pub weather:  Weather,
    /// An obstacle forced a detour and its extra drain was applied.
    pub detoured: bool,
    /// Cost of the flight: the base draw plus any detour surcharge.
    pub drain:    u8,
    pub battery_before: Battery,
    pub battery_after:  Battery,
}

impl DeliveryOutcome {
    #[inline]
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    #[inline]
    pub fn reached_drain_decision(&self) -> bool {
        self.kind.reached_drain_decision()
    }

    #[inline]
    pub fn tally(&self) -> Tally {
        self.kind.tally()
    }
}
