//! Random sources for the delivery simulator.
//!
//! # Injection strategy
//!
//! The simulator never touches a global generator.  Every draw goes through
//! the [`RandomSource`] trait, which exposes exactly the two operations the
//! flight rules need:
//!
//! - `uniform(lo..=hi)` — weather index and battery drain.
//! - `one_in(n)`        — obstacle (1 in 2) and malfunction (1 in 10).
//!
//! Production runs use [`SimRng`], seeded once per process from the clock
//! (or from an explicit seed for reproducible runs).  Tests use
//! [`ScriptedRng`] to force any branch of the decision tree.

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the integer and boolean draws made by a delivery attempt.
pub trait RandomSource {
    /// An integer drawn uniformly from `range` (both ends inclusive).
    fn uniform(&mut self, range: RangeInclusive<u32>) -> u32;

    /// `true` with probability `1 / n`.  `one_in(0)` is always `false`.
    fn one_in(&mut self, n: u32) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).uniform(range)
    }

    #[inline]
    fn one_in(&mut self, n: u32) -> bool {
        (**self).one_in(n)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Process-level RNG backing real runs.
///
/// The same seed always produces the same day.
pub struct SimRng {
    seed:  u64,
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed, inner: SmallRng::seed_from_u64(seed) }
    }

    /// Seed from the current wall-clock time.
    ///
    /// A clock set before the Unix epoch seeds with 0.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }

    /// The seed this generator was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    /// # Panics
    /// Panics if `range` is empty (`start > end`).
    #[inline]
    fn uniform(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    #[inline]
    fn one_in(&mut self, n: u32) -> bool {
        if n == 0 {
            return false;
        }
        self.inner.gen_ratio(1, n)
    }
}

// ── ScriptedRng ───────────────────────────────────────────────────────────────

/// A [`RandomSource`] that replays pre-recorded draws.
///
/// Integer and boolean draws are kept in two separate FIFO queues, so a
/// script lists the integers an attempt will request (weather index, drain)
/// independently of its booleans (obstacle, malfunction).
///
/// ```rust
/// use dd_core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new().ints([0, 12]).bools([false, true]);
/// assert_eq!(rng.uniform(0..=2), 0);
/// assert!(!rng.one_in(2));
/// assert_eq!(rng.uniform(10..=25), 12);
/// assert!(rng.one_in(10));
/// assert!(rng.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    ints:  VecDeque<u32>,
    bools: VecDeque<bool>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append integer draws to the script.
    pub fn ints(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(values);
        self
    }

    /// Append boolean draws to the script.
    pub fn bools(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(values);
        self
    }

    pub fn push_int(&mut self, value: u32) {
        self.ints.push_back(value);
    }

    pub fn push_bool(&mut self, value: bool) {
        self.bools.push_back(value);
    }

    /// Draws not yet consumed, as `(ints, bools)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.ints.len(), self.bools.len())
    }

    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.bools.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    /// # Panics
    /// Panics when the integer script is exhausted or the next scripted value
    /// lies outside `range`.
    fn uniform(&mut self, range: RangeInclusive<u32>) -> u32 {
        let Some(value) = self.ints.pop_front() else {
            panic!("ScriptedRng: integer script exhausted (wanted {range:?})");
        };
        assert!(
            range.contains(&value),
            "ScriptedRng: scripted value {value} outside {range:?}"
        );
        value
    }

    /// # Panics
    /// Panics when the boolean script is exhausted.
    fn one_in(&mut self, n: u32) -> bool {
        match self.bools.pop_front() {
            Some(b) => b,
            None => panic!("ScriptedRng: boolean script exhausted (wanted one_in({n}))"),
        }
    }
}
