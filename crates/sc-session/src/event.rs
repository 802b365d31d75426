//! Session events for display collaborators

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ticket::{PaymentMethod, TicketId};

/// Maximum undrained events kept; oldest are dropped first
pub const MAX_PENDING_EVENTS: usize = 1024;

/// What happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEventKind {
    PurchaseRequested { tier_value: f64 },
    PaymentConfirmed { payment_method: PaymentMethod },
    PaymentCancelled,
    RevealStarted,
    RevealProgress { percent: f64 },
    TicketFinalized { amount: f64, message: String },
    NewGame,
}

/// A session event with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub kind: SessionEventKind,
    /// Ticket the event refers to, once one exists
    #[serde(default)]
    pub ticket_id: Option<TicketId>,
    pub at: DateTime<Utc>,
}

impl SessionEvent {
    pub fn new(kind: SessionEventKind, ticket_id: Option<TicketId>) -> Self {
        Self {
            kind,
            ticket_id,
            at: Utc::now(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            SessionEventKind::PurchaseRequested { .. } => "purchase_requested",
            SessionEventKind::PaymentConfirmed { .. } => "payment_confirmed",
            SessionEventKind::PaymentCancelled => "payment_cancelled",
            SessionEventKind::RevealStarted => "reveal_started",
            SessionEventKind::RevealProgress { .. } => "reveal_progress",
            SessionEventKind::TicketFinalized { .. } => "ticket_finalized",
            SessionEventKind::NewGame => "new_game",
        }
    }
}

/// Bounded queue of undrained events
#[derive(Debug, Clone, Default)]
pub(crate) struct EventQueue {
    pending: VecDeque<SessionEvent>,
}

impl EventQueue {
    pub(crate) fn push(&mut self, event: SessionEvent) {
        if self.pending.len() >= MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<SessionEvent> {
        self.pending.drain(..).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = EventQueue::default();
        for i in 0..(MAX_PENDING_EVENTS + 10) {
            queue.push(SessionEvent::new(
                SessionEventKind::RevealProgress { percent: i as f64 },
                Some(TicketId(1)),
            ));
        }
        assert_eq!(queue.len(), MAX_PENDING_EVENTS);

        let drained = queue.drain();
        assert_eq!(
            drained[0].kind,
            SessionEventKind::RevealProgress { percent: 10.0 }
        );
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_event_json_tag() {
        let event = SessionEvent::new(SessionEventKind::PaymentCancelled, None);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"]["type"], "payment_cancelled");
        assert_eq!(event.type_name(), "payment_cancelled");
    }
}
