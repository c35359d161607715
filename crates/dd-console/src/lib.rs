//! `dd-console` — text front end for the drone delivery simulator.
//!
//! [`run_session`] drives one delivery day over any `BufRead` / `Write` pair:
//!
//! 1. banner and starting battery
//! 2. `Press S to start delivery day: ` prompt
//! 3. anything but `S`/`s` → `Mission cancelled.`
//! 4. otherwise one attempt per stop on the fixed route, narrated by
//!    [`ConsoleObserver`], followed by the day summary
//!
//! # Usage
//!
//! ```rust,ignore
//! use dd_console::run_session;
//! use dd_core::DayConfig;
//!
//! let config = DayConfig::default();
//! let stdin = std::io::stdin();
//! run_session(&mut stdin.lock(), &mut std::io::stdout(), &config, config.make_rng())?;
//! ```

pub mod error;
pub mod observer;
pub mod prompt;
pub mod render;
pub mod session;


pub use error::{ConsoleError, ConsoleResult};
pub use observer::ConsoleObserver;
pub use prompt::{StartDecision, read_start_key};
pub use session::{SessionOutcome, run_session};
