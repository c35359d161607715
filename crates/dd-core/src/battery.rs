//! Drone battery charge.

use std::fmt;

/// Battery charge in whole percent.
///
/// The inner value is always within `0..=100`; every constructor and mutator
/// clamps instead of failing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8"))]
pub struct Battery(u8);

impl Battery {
    pub const EMPTY: Battery = Battery(0);
    pub const FULL: Battery = Battery(100);

    /// Build a charge level, clamping anything above 100.
    #[inline]
    pub fn new(percent: u8) -> Self {
        Battery(percent.min(Self::FULL.0))
    }

    #[inline]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// `true` when the current charge covers a flight costing `amount`.
    #[inline]
    pub fn can_cover(self, amount: u8) -> bool {
        self.0 >= amount
    }

    /// Remove `amount`, stopping at empty.
    #[inline]
    pub fn drain(&mut self, amount: u8) {
        self.0 = self.0.saturating_sub(amount);
    }

    /// Add `amount`, stopping at full.
    #[inline]
    pub fn recharge(&mut self, amount: u8) {
        self.0 = self.0.saturating_add(amount).min(Self::FULL.0);
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<u8> for Battery {
    fn from(percent: u8) -> Self {
        Battery::new(percent)
    }
}

impl fmt::Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
