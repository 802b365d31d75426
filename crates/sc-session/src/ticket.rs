//! Tickets: one purchased scratch card with its committed prize

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sc_prize::{PriceTier, PrizeOutcome};

use crate::state::GameState;

/// Session-scoped ticket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(pub u64);

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ticket-{:06}", self.0)
    }
}

/// How the player paid (simulated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Pix,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Card => "Cartão",
            Self::Pix => "PIX",
        }
    }
}

/// A purchased ticket
///
/// The prize is drawn once when payment is confirmed and cannot be changed
/// afterwards; only reveal bookkeeping mutates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    id: TicketId,
    tier_value: f64,
    tier_label: String,
    purchased_at: DateTime<Utc>,
    payment_method: PaymentMethod,
    prize: PrizeOutcome,
    revealed: bool,
    reveal_progress: f64,
    state: GameState,
}

impl Ticket {
    pub(crate) fn new(
        id: TicketId,
        tier: &PriceTier,
        payment_method: PaymentMethod,
        prize: PrizeOutcome,
    ) -> Self {
        Self {
            id,
            tier_value: tier.value(),
            tier_label: tier.label().to_string(),
            purchased_at: Utc::now(),
            payment_method,
            prize,
            revealed: false,
            reveal_progress: 0.0,
            state: GameState::Revealable,
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Price paid for the ticket
    pub fn tier_value(&self) -> f64 {
        self.tier_value
    }

    pub fn tier_label(&self) -> &str {
        &self.tier_label
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Committed prize
    pub fn prize(&self) -> &PrizeOutcome {
        &self.prize
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Highest reveal percent reported so far
    pub fn reveal_progress(&self) -> f64 {
        self.reveal_progress
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if the committed prize pays anything
    pub fn is_winner(&self) -> bool {
        self.prize.is_win()
    }

    /// Record a reveal report; progress never moves backwards
    pub(crate) fn record_progress(&mut self, percent: f64, state: GameState) {
        self.reveal_progress = self.reveal_progress.max(percent);
        self.state = state;
        if state == GameState::Finalized {
            self.revealed = true;
        }
    }
}
