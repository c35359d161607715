//! Core error type.
//!
//! Sub-crates wrap `DdError` as one variant of their own error enums.

use thiserror::Error;

/// The top-level error type for `dd-core`.
#[derive(Debug, Error)]
pub enum DdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dd-core`.
pub type DdResult<T> = Result<T, DdError>;
