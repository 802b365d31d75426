//! Simulator error types

use sc_prize::PrizeError;
use sc_session::SessionError;
use thiserror::Error;

/// Simulator error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Simulation parameters that cannot run
    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Prize(#[from] PrizeError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result type alias
pub type SimResult<T> = Result<T, SimError>;
