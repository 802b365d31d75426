//! Session error types

use sc_prize::PrizeError;
use thiserror::Error;

use crate::state::{GameState, Operation};

/// Session error type
///
/// Every error leaves the session exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Operation not permitted in the current state
    #[error("Invalid state transition: cannot {operation} while {state}")]
    InvalidStateTransition {
        state: GameState,
        operation: Operation,
    },

    /// Reveal progress outside [0, 100]
    #[error("Reveal progress out of range [0, 100]: {percent}")]
    OutOfRangeInput { percent: f64 },

    #[error(transparent)]
    Prize(#[from] PrizeError),
}

/// Result type alias
pub type SessionResult<T> = Result<T, SessionError>;
