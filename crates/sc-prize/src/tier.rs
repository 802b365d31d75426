//! Price tiers and payout tables

use serde::{Deserialize, Serialize};

use crate::error::{PrizeError, PrizeResult};

/// Tolerance for payout tables whose probabilities sum slightly above 1
pub const PROBABILITY_EPSILON: f64 = 1e-6;

/// Tolerance used when matching a ticket price against a tier value
const VALUE_EPSILON: f64 = 1e-9;

/// One possible result of a draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeOutcome {
    /// Prize amount (0 = no win)
    pub amount: f64,
    /// Probability of this outcome, in (0, 1]
    pub probability: f64,
    /// Message shown once the ticket is revealed
    pub message: String,
}

impl PrizeOutcome {
    pub fn new(amount: f64, probability: f64, message: impl Into<String>) -> Self {
        Self {
            amount,
            probability,
            message: message.into(),
        }
    }

    /// Check if this outcome pays anything
    pub fn is_win(&self) -> bool {
        self.amount > 0.0
    }
}

/// Ordered, validated payout table
///
/// Table order is significant: the draw walks it front to back, so an
/// earlier entry wins a tie on an exact cumulative boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PayoutTable {
    outcomes: Vec<PrizeOutcome>,
}

impl PayoutTable {
    /// Validate and build a payout table
    pub fn new(outcomes: Vec<PrizeOutcome>) -> PrizeResult<Self> {
        check_outcomes(&outcomes).map_err(|reason| PrizeError::invalid("payout table", reason))?;
        Ok(Self { outcomes })
    }

    /// Index of the outcome selected by `unit`
    ///
    /// Returns the first entry whose cumulative probability reaches `unit`.
    /// Units past the final cumulative sum land on the last entry.
    pub fn draw_index(&self, unit: f64) -> usize {
        let mut cumulative = 0.0;
        for (index, outcome) in self.outcomes.iter().enumerate() {
            cumulative += outcome.probability;
            if unit <= cumulative {
                return index;
            }
        }
        self.outcomes.len() - 1
    }

    /// Outcome selected by `unit` (cumulative probability walk)
    pub fn draw(&self, unit: f64) -> &PrizeOutcome {
        &self.outcomes[self.draw_index(unit)]
    }

    /// All outcomes in configured order
    pub fn outcomes(&self) -> &[PrizeOutcome] {
        &self.outcomes
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrizeOutcome> {
        self.outcomes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&PrizeOutcome> {
        self.outcomes.get(index)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Always false for a validated table
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Sum of all configured probabilities
    pub fn total_probability(&self) -> f64 {
        self.outcomes.iter().map(|o| o.probability).sum()
    }

    /// Expected payout of a single draw
    pub fn expected_return(&self) -> f64 {
        self.outcomes.iter().map(|o| o.amount * o.probability).sum()
    }

    /// Largest amount in the table
    pub fn max_prize(&self) -> f64 {
        self.outcomes.iter().map(|o| o.amount).fold(0.0, f64::max)
    }

    /// Probability of drawing any positive amount
    pub fn win_probability(&self) -> f64 {
        self.outcomes
            .iter()
            .filter(|o| o.is_win())
            .map(|o| o.probability)
            .sum()
    }
}

fn check_outcomes(outcomes: &[PrizeOutcome]) -> Result<(), String> {
    if outcomes.is_empty() {
        return Err("payout table is empty".into());
    }

    for (index, outcome) in outcomes.iter().enumerate() {
        if !(outcome.probability > 0.0 && outcome.probability <= 1.0) {
            return Err(format!(
                "outcome {} has probability {} outside (0, 1]",
                index, outcome.probability
            ));
        }
        if !(outcome.amount.is_finite() && outcome.amount >= 0.0) {
            return Err(format!(
                "outcome {} has invalid amount {}",
                index, outcome.amount
            ));
        }
    }

    let total: f64 = outcomes.iter().map(|o| o.probability).sum();
    if total > 1.0 + PROBABILITY_EPSILON {
        return Err(format!("probabilities sum to {:.6}, above 1", total));
    }

    Ok(())
}

/// A ticket price with its payout table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTier {
    value: f64,
    label: String,
    payout_table: PayoutTable,
}

impl PriceTier {
    /// Validate and build a tier
    pub fn new(
        value: f64,
        label: impl Into<String>,
        outcomes: Vec<PrizeOutcome>,
    ) -> PrizeResult<Self> {
        let label = label.into();
        check_value(value).map_err(|reason| PrizeError::invalid(&label, reason))?;
        check_outcomes(&outcomes).map_err(|reason| PrizeError::invalid(&label, reason))?;

        Ok(Self {
            value,
            label,
            payout_table: PayoutTable { outcomes },
        })
    }

    /// Build a tier with the default "R$ x,xx" label
    pub fn with_default_label(value: f64, outcomes: Vec<PrizeOutcome>) -> PrizeResult<Self> {
        Self::new(value, brl_label(value), outcomes)
    }

    /// Build from static reference data (checked in debug builds)
    pub(crate) fn from_static(value: f64, label: &str, outcomes: &[(f64, f64, &str)]) -> Self {
        let tier = Self {
            value,
            label: label.to_string(),
            payout_table: PayoutTable {
                outcomes: outcomes
                    .iter()
                    .map(|&(amount, probability, message)| {
                        PrizeOutcome::new(amount, probability, message)
                    })
                    .collect(),
            },
        };
        debug_assert!(tier.validate().is_ok());
        tier
    }

    /// Re-run configuration checks
    pub fn validate(&self) -> PrizeResult<()> {
        check_value(self.value).map_err(|reason| PrizeError::invalid(&self.label, reason))?;
        check_outcomes(&self.payout_table.outcomes)
            .map_err(|reason| PrizeError::invalid(&self.label, reason))
    }

    /// Ticket price
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Display label (e.g. "R$ 5,00")
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payout_table(&self) -> &PayoutTable {
        &self.payout_table
    }

    /// Check if this tier is priced at `value`
    pub fn matches_value(&self, value: f64) -> bool {
        (self.value - value).abs() < VALUE_EPSILON
    }

    /// Largest prize this tier can pay
    pub fn max_prize(&self) -> f64 {
        self.payout_table.max_prize()
    }

    /// Expected payout per ticket
    pub fn expected_return(&self) -> f64 {
        self.payout_table.expected_return()
    }

    /// Theoretical return to player, in percent of the ticket price
    pub fn rtp(&self) -> f64 {
        (self.expected_return() / self.value) * 100.0
    }
}

fn check_value(value: f64) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("ticket price {} must be positive", value))
    }
}

/// Format a price as Brazilian reais ("R$ 5,00")
pub fn brl_label(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_table() -> Vec<PrizeOutcome> {
        vec![
            PrizeOutcome::new(0.0, 0.75, "Tente novamente!"),
            PrizeOutcome::new(5.0, 0.15, "Recuperou o valor!"),
            PrizeOutcome::new(15.0, 0.08, "Triplicou!"),
            PrizeOutcome::new(50.0, 0.019, "Grande prêmio!"),
            PrizeOutcome::new(250.0, 0.001, "JACKPOT!"),
        ]
    }

    #[test]
    fn test_draw_bands() {
        let table = PayoutTable::new(five_table()).unwrap();
        assert_eq!(table.draw(0.0).amount, 0.0);
        assert_eq!(table.draw(0.5).amount, 0.0);
        assert_eq!(table.draw(0.80).amount, 5.0);
        assert_eq!(table.draw(0.95).amount, 15.0);
        assert_eq!(table.draw(0.99).amount, 50.0);
        assert_eq!(table.draw(0.9995).amount, 250.0);
    }

    #[test]
    fn test_boundary_goes_to_earlier_entry() {
        let table = PayoutTable::new(vec![
            PrizeOutcome::new(0.0, 0.5, "lose"),
            PrizeOutcome::new(2.0, 0.5, "win"),
        ])
        .unwrap();
        assert_eq!(table.draw_index(0.5), 0);
        assert_eq!(table.draw_index(0.5000001), 1);
    }

    #[test]
    fn test_shortfall_falls_back_to_last() {
        let table = PayoutTable::new(vec![
            PrizeOutcome::new(0.0, 0.6, "lose"),
            PrizeOutcome::new(3.0, 0.3, "win"),
        ])
        .unwrap();
        assert_eq!(table.draw_index(0.95), 1);
        assert_eq!(table.draw_index(f64::NAN), 1);
    }

    #[test]
    fn test_rejects_empty_table() {
        let err = PayoutTable::new(Vec::new()).unwrap_err();
        assert!(matches!(err, PrizeError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_rejects_non_positive_probability() {
        let mut outcomes = five_table();
        outcomes[2].probability = 0.0;
        assert!(PriceTier::new(5.0, "R$ 5,00", outcomes).is_err());

        let mut outcomes = five_table();
        outcomes[1].probability = -0.1;
        assert!(PriceTier::new(5.0, "R$ 5,00", outcomes).is_err());
    }

    #[test]
    fn test_rejects_sum_above_one() {
        let mut outcomes = five_table();
        outcomes[0].probability = 0.80;
        let err = PriceTier::new(5.0, "R$ 5,00", outcomes).unwrap_err();
        match err {
            PrizeError::InvalidConfiguration { tier, reason } => {
                assert_eq!(tier, "R$ 5,00");
                assert!(reason.contains("above 1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_accepts_sum_below_one() {
        let mut outcomes = five_table();
        outcomes[0].probability = 0.70;
        assert!(PriceTier::new(5.0, "R$ 5,00", outcomes).is_ok());
    }

    #[test]
    fn test_rejects_bad_value() {
        assert!(PriceTier::new(0.0, "free", five_table()).is_err());
        assert!(PriceTier::new(f64::INFINITY, "inf", five_table()).is_err());
    }

    #[test]
    fn test_tier_math() {
        let tier = PriceTier::with_default_label(5.0, five_table()).unwrap();
        assert_eq!(tier.label(), "R$ 5,00");
        assert_eq!(tier.max_prize(), 250.0);
        // 0.75 + 1.2 + 0.95 + 0.25
        assert!((tier.expected_return() - 3.15).abs() < 1e-9);
        assert!((tier.rtp() - 63.0).abs() < 1e-6);
        assert!((tier.payout_table().win_probability() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_brl_label() {
        assert_eq!(brl_label(10.0), "R$ 10,00");
        assert_eq!(brl_label(2.5), "R$ 2,50");
    }
}
