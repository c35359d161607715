//! Weather conditions drawn at the start of each delivery attempt.

use std::fmt;

use crate::RandomSource;

/// Weather over the route for one attempt.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weather {
    /// Good flying conditions.
    Sunny,
    /// Flyable, but a drone below the low-battery threshold turns back.
    Windy,
    /// No flights.
    Rainy,
}

impl Weather {
    /// All variants in draw order: index 0, 1, 2.
    pub const ALL: [Weather; 3] = [Weather::Sunny, Weather::Windy, Weather::Rainy];

    /// Pick one of [`Weather::ALL`] with equal probability.
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Weather {
        let last = (Self::ALL.len() - 1) as u32;
        Self::ALL[rng.uniform(0..=last) as usize]
    }

    /// Rain grounds the drone outright.
    #[inline]
    pub fn grounds_flight(self) -> bool {
        matches!(self, Weather::Rainy)
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Weather::Sunny => "sunny",
            Weather::Windy => "windy",
            Weather::Rainy => "rainy",
        };
        f.write_str(s)
    }
}
