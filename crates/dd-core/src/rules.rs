//! Flight rules applied to every delivery attempt.
//!
//! All values are battery percentage points unless noted otherwise.

/// Minimum drain of a single flight.
pub const BASE_DRAIN: u8 = 10;

/// Random extra drain on top of [`BASE_DRAIN`]; the base drain is drawn from
/// `BASE_DRAIN..=BASE_DRAIN + DRAIN_SPREAD` (10–25).
pub const DRAIN_SPREAD: u8 = 15;

/// Extra drain when an obstacle forces a detour.
pub const DETOUR_DRAIN: u8 = 5;

/// Below this charge, windy weather sends the drone back to base.
pub const LOW_BATTERY_THRESHOLD: u8 = 40;

/// Charge gained by returning to base.
pub const RECHARGE_ON_RETURN: u8 = 10;

/// An obstacle appears on one attempt in `OBSTACLE_ONE_IN` (a fair coin).
pub const OBSTACLE_ONE_IN: u32 = 2;

/// A malfunction strikes one flyable attempt in `MALFUNCTION_ONE_IN`.
pub const MALFUNCTION_ONE_IN: u32 = 10;
