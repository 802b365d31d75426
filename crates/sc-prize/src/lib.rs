//! # sc-prize: Prize Engine for scratch tickets
//!
//! Selects a ticket's prize at purchase time from the payout table of its
//! price tier. The draw is an inverse-CDF walk over the configured odds:
//! given a uniform unit in [0, 1), the first outcome whose cumulative
//! probability reaches the unit wins.
//!
//! ## Architecture
//!
//! ```text
//! PrizeEngine
//!     │
//!     └── TierCatalog (R$ 5 / 10 / 25 / 50, or loaded from JSON/YAML)
//!           │
//!           └── PriceTier ── PayoutTable ── [PrizeOutcome]
//!
//! RandomSource (SeededSource | ScriptedSource) ──unit──> PrizeEngine::draw
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod random;
pub mod tier;

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use random::*;
pub use tier::*;
