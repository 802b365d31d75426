//! Aggregate session statistics

use serde::{Deserialize, Serialize};

use sc_prize::PrizeOutcome;

/// Process-lifetime statistics across all tickets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Tickets paid for
    pub total_tickets: u64,
    /// Sum of prices paid
    pub total_spent: f64,
    /// Sum of amounts awarded by finalized tickets
    pub total_winnings: f64,
    /// Finalized tickets
    pub finalized: u64,
    /// Finalized tickets that paid something
    pub wins: u64,
    /// Most recent positive prize
    pub last_win: Option<PrizeOutcome>,
}

impl SessionStats {
    pub(crate) fn record_purchase(&mut self, price: f64) {
        self.total_tickets += 1;
        self.total_spent += price;
    }

    pub(crate) fn record_finalized(&mut self, prize: &PrizeOutcome) {
        self.finalized += 1;
        self.total_winnings += prize.amount;
        if prize.is_win() {
            self.wins += 1;
            self.last_win = Some(prize.clone());
        }
    }

    /// Winnings minus spend
    pub fn net(&self) -> f64 {
        self.total_winnings - self.total_spent
    }

    /// Calculate RTP
    pub fn rtp(&self) -> f64 {
        if self.total_spent > 0.0 {
            (self.total_winnings / self.total_spent) * 100.0
        } else {
            0.0
        }
    }

    /// Calculate hit rate over finalized tickets
    pub fn hit_rate(&self) -> f64 {
        if self.finalized > 0 {
            (self.wins as f64 / self.finalized as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = SessionStats::default();
        assert_eq!(stats.rtp(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert!(stats.last_win.is_none());
    }

    #[test]
    fn test_losing_ticket_keeps_last_win() {
        let mut stats = SessionStats::default();
        let win = PrizeOutcome::new(15.0, 0.08, "Triplicou!");
        let lose = PrizeOutcome::new(0.0, 0.75, "Tente novamente!");

        stats.record_purchase(5.0);
        stats.record_finalized(&win);
        stats.record_purchase(5.0);
        stats.record_finalized(&lose);

        assert_eq!(stats.total_tickets, 2);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.last_win, Some(win));
        assert!((stats.net() - 5.0).abs() < 1e-9);
        assert!((stats.rtp() - 150.0).abs() < 1e-9);
        assert!((stats.hit_rate() - 50.0).abs() < 1e-9);
    }
}
