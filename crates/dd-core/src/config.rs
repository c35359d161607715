//! Delivery day configuration.

use crate::{Battery, DdError, DdResult, SimRng};

/// The fixed route flown every delivery day, one attempt per stop.
pub const ROUTE: [&str; 3] = ["Location A", "Location B", "Location C"];

/// Top-level configuration for one delivery day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayConfig {
    /// Charge at the start of the day, in percent.  Must not exceed 100.
    pub starting_battery: u8,

    /// Master RNG seed.  `None` seeds from the clock at startup.
    pub seed: Option<u64>,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            starting_battery: Battery::FULL.percent(),
            seed:             None,
        }
    }
}

impl DayConfig {
    /// Reject settings the simulator cannot honour.
    pub fn validate(&self) -> DdResult<()> {
        if self.starting_battery > Battery::FULL.percent() {
            return Err(DdError::Config(format!(
                "starting battery {}% exceeds 100%",
                self.starting_battery
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn starting_battery(&self) -> Battery {
        Battery::new(self.starting_battery)
    }

    /// Build the day's RNG from `seed`, or from the clock when unset.
    pub fn make_rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_clock(),
        }
    }
}
