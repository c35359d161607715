//! Observer trait for reporting a delivery day as it unfolds.

use crate::{DaySummary, DeliveryOutcome};

/// Callbacks invoked by [`run_day`][crate::run_day] around each attempt.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — outcome counter
///
/// ```rust
/// use dd_sim::{DeliveryObserver, DeliveryOutcome};
///
/// struct Count(usize);
///
/// impl DeliveryObserver for Count {
///     fn on_outcome(&mut self, _outcome: &DeliveryOutcome) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait DeliveryObserver {
    /// Called before the attempt to `location` draws anything.
    fn on_attempt_start(&mut self, _location: &str) {}

    /// Called with the finished attempt.
    fn on_outcome(&mut self, _outcome: &DeliveryOutcome) {}

    /// Called once after the last location.
    fn on_day_end(&mut self, _summary: &DaySummary) {}
}

/// A [`DeliveryObserver`] that does nothing.
pub struct NoopObserver;

impl DeliveryObserver for NoopObserver {}
