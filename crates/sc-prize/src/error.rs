//! Error types for prize configuration

use thiserror::Error;

/// Prize engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrizeError {
    /// A tier, payout table or catalog failed validation
    #[error("Invalid configuration for {tier}: {reason}")]
    InvalidConfiguration { tier: String, reason: String },

    /// No tier is configured for this ticket price
    #[error("Unknown ticket tier: {0}")]
    UnknownTier(f64),

    /// Two tiers share the same ticket price
    #[error("Duplicate ticket tier: {0}")]
    DuplicateTier(f64),

    /// Scripted random unit outside [0, 1)
    #[error("Random unit out of range [0, 1): {0}")]
    UnitOutOfRange(f64),

    /// Scripted random source with nothing to replay
    #[error("Scripted random source is empty")]
    EmptyScript,

    #[error("JSON error: {0}")]
    Json(String),

    #[error("YAML error: {0}")]
    Yaml(String),
}

impl PrizeError {
    pub(crate) fn invalid(tier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            tier: tier.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type PrizeResult<T> = Result<T, PrizeError>;
