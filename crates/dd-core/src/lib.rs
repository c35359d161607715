//! `dd-core` — foundational types for the drone delivery simulator.
//!
//! This crate is a dependency of every other `dd-*` crate.  It has no `dd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`battery`]   | `Battery` — a percentage clamped to [0, 100]           |
//! | [`weather`]   | `Weather` enum and its uniform draw                    |
//! | [`rules`]     | Drain, detour, recharge and malfunction constants      |
//! | [`rng`]       | `RandomSource` trait, `SimRng`, `ScriptedRng`          |
//! | [`config`]    | `DayConfig`, the fixed `ROUTE`                         |
//! | [`error`]     | `DdError`, `DdResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod battery;
pub mod config;
pub mod error;
pub mod rng;
pub mod rules;
pub mod weather;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use battery::Battery;
pub use config::{DayConfig, ROUTE};
pub use error::{DdError, DdResult};
pub use rng::{RandomSource, ScriptedRng, SimRng};
pub use weather::Weather;
