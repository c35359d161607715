use dd_core::DdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid day configuration: {0}")]
    Config(#[from] DdError),
}

pub type SimResult<T> = Result<T, SimError>;
