//! Game states and the operations that move between them

use serde::{Deserialize, Serialize};

/// Lifecycle state of the session's current ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// No ticket in flight
    #[default]
    Idle,
    /// Purchase requested, waiting for the payment collaborator
    AwaitingPayment,
    /// Ticket created and prize committed, nothing revealed yet
    Revealable,
    /// Player is scratching
    Revealing,
    /// Reveal threshold reached, outcome disclosed
    Finalized,
}

impl GameState {
    /// Check if `operation` may run in this state
    pub fn accepts(self, operation: Operation) -> bool {
        use GameState::*;
        use Operation::*;

        matches!(
            (self, operation),
            (Idle, RequestPurchase)
                | (AwaitingPayment, ConfirmPayment | CancelPayment)
                | (Revealable | Revealing, ReportRevealProgress)
                | (Finalized, StartNewGame)
        )
    }

    /// Check if `next` is a legal successor
    pub fn can_transition_to(self, next: GameState) -> bool {
        use GameState::*;

        matches!(
            (self, next),
            (Idle, AwaitingPayment)
                | (AwaitingPayment, Revealable | Idle)
                | (Revealable, Revealing)
                | (Revealing, Revealing | Finalized)
                | (Finalized, Idle)
        )
    }

    /// Check if a ticket exists for this state
    pub fn has_ticket(self) -> bool {
        matches!(self, Self::Revealable | Self::Revealing | Self::Finalized)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingPayment => "Awaiting Payment",
            Self::Revealable => "Revealable",
            Self::Revealing => "Revealing",
            Self::Finalized => "Finalized",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Session operations that mutate state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    RequestPurchase,
    ConfirmPayment,
    CancelPayment,
    ReportRevealProgress,
    StartNewGame,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestPurchase => "request_purchase",
            Self::ConfirmPayment => "confirm_payment",
            Self::CancelPayment => "cancel_payment",
            Self::ReportRevealProgress => "report_reveal_progress",
            Self::StartNewGame => "start_new_game",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [GameState; 5] = [
        GameState::Idle,
        GameState::AwaitingPayment,
        GameState::Revealable,
        GameState::Revealing,
        GameState::Finalized,
    ];

    #[test]
    fn test_each_operation_has_owner_states() {
        let owners = |op| {
            ALL_STATES
                .iter()
                .copied()
                .filter(|s| s.accepts(op))
                .collect::<Vec<_>>()
        };

        assert_eq!(owners(Operation::RequestPurchase), vec![GameState::Idle]);
        assert_eq!(owners(Operation::ConfirmPayment), vec![GameState::AwaitingPayment]);
        assert_eq!(owners(Operation::CancelPayment), vec![GameState::AwaitingPayment]);
        assert_eq!(
            owners(Operation::ReportRevealProgress),
            vec![GameState::Revealable, GameState::Revealing]
        );
        assert_eq!(owners(Operation::StartNewGame), vec![GameState::Finalized]);
    }

    #[test]
    fn test_transition_table() {
        assert!(GameState::Idle.can_transition_to(GameState::AwaitingPayment));
        assert!(GameState::AwaitingPayment.can_transition_to(GameState::Idle));
        assert!(GameState::Revealing.can_transition_to(GameState::Revealing));
        assert!(!GameState::Idle.can_transition_to(GameState::Finalized));
        assert!(!GameState::Finalized.can_transition_to(GameState::Revealing));
        assert!(!GameState::Revealing.can_transition_to(GameState::Idle));
        assert!(!GameState::Revealable.can_transition_to(GameState::Finalized));
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(GameState::default(), GameState::Idle);
        assert_eq!(GameState::AwaitingPayment.to_string(), "Awaiting Payment");
        assert_eq!(Operation::ConfirmPayment.to_string(), "confirm_payment");
        assert!(!GameState::AwaitingPayment.has_ticket());
        assert!(GameState::Finalized.has_ticket());
    }
}
