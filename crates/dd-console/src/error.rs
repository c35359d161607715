//! Error types for dd-console.

use dd_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Alias for `Result<T, ConsoleError>`.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
