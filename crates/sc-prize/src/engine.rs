//! Prize Engine: maps a price tier to exactly one prize outcome

use crate::catalog::TierCatalog;
use crate::error::{PrizeError, PrizeResult};
use crate::random::RandomSource;
use crate::tier::{PriceTier, PrizeOutcome};

/// Stateless prize engine
///
/// Owns only its tier catalog. Draws are pure functions of the tier and the
/// supplied random unit, so one engine can serve any number of sessions
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct PrizeEngine {
    catalog: TierCatalog,
}

impl PrizeEngine {
    pub fn new(catalog: TierCatalog) -> Self {
        Self { catalog }
    }

    /// Engine over the four reference tiers
    pub fn standard() -> Self {
        Self::new(TierCatalog::standard())
    }

    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    pub fn tiers(&self) -> &[PriceTier] {
        self.catalog.tiers()
    }

    /// Tier priced at `value`
    pub fn tier(&self, value: f64) -> Option<&PriceTier> {
        self.catalog.get(value)
    }

    /// Draw one outcome from `tier` using `unit` in [0, 1)
    ///
    /// Total for any validated tier: units beyond the table's cumulative sum
    /// return the last entry.
    pub fn draw(&self, tier: &PriceTier, unit: f64) -> PrizeOutcome {
        let outcome = tier.payout_table().draw(unit);
        log::debug!(
            "Draw for {}: unit {:.6} -> {} ({})",
            tier.label(),
            unit,
            outcome.amount,
            outcome.message
        );
        outcome.clone()
    }

    /// Draw from the tier priced at `value`
    pub fn draw_for(&self, value: f64, unit: f64) -> PrizeResult<PrizeOutcome> {
        let tier = self.tier(value).ok_or(PrizeError::UnknownTier(value))?;
        Ok(self.draw(tier, unit))
    }

    /// Draw using the next unit from `source`
    pub fn draw_with(&self, tier: &PriceTier, source: &mut dyn RandomSource) -> PrizeOutcome {
        let unit = source.next_unit();
        self.draw(tier, unit)
    }
}
