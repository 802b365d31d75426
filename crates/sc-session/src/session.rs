//! Ticket Session: per-ticket state machine and running statistics

use std::sync::Arc;

use sc_prize::{PriceTier, PrizeEngine, RandomSource, SeededSource};

use crate::error::{SessionError, SessionResult};
use crate::event::{EventQueue, SessionEvent, SessionEventKind};
use crate::state::{GameState, Operation};
use crate::stats::SessionStats;
use crate::ticket::{PaymentMethod, Ticket, TicketId};

/// Reveal percentage at which a ticket is finalized
pub const REVEAL_THRESHOLD: f64 = 60.0;

/// Single-player scratch ticket session
///
/// Sequences one ticket at a time through
/// `Idle → AwaitingPayment → Revealable → Revealing → Finalized → Idle`
/// and keeps the append-only ticket history and aggregate stats.
///
/// Every operation checks its preconditions before touching any field, so a
/// rejected call leaves the session unchanged.
pub struct TicketSession {
    /// Shared prize engine
    engine: Arc<PrizeEngine>,
    /// Injected randomness
    source: Box<dyn RandomSource>,
    /// Current lifecycle state
    state: GameState,
    /// Tier awaiting payment
    pending_tier: Option<PriceTier>,
    /// Index of the active ticket in `history`
    active: Option<usize>,
    /// All tickets, in purchase order
    history: Vec<Ticket>,
    stats: SessionStats,
    events: EventQueue,
    /// Last issued ticket number
    ticket_seq: u64,
}

impl TicketSession {
    /// Create a session over `engine`, drawing units from `source`
    pub fn new(engine: Arc<PrizeEngine>, source: Box<dyn RandomSource>) -> Self {
        Self {
            engine,
            source,
            state: GameState::Idle,
            pending_tier: None,
            active: None,
            history: Vec::new(),
            stats: SessionStats::default(),
            events: EventQueue::default(),
            ticket_seq: 0,
        }
    }

    /// Reference tiers with OS-seeded randomness
    pub fn with_standard_tiers() -> Self {
        Self::new(
            Arc::new(PrizeEngine::standard()),
            Box::new(SeededSource::from_entropy()),
        )
    }

    /// Reference tiers with a reproducible seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            Arc::new(PrizeEngine::standard()),
            Box::new(SeededSource::from_seed(seed)),
        )
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn engine(&self) -> &PrizeEngine {
        &self.engine
    }

    /// Get session stats
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// All tickets in purchase order
    pub fn history(&self) -> &[Ticket] {
        &self.history
    }

    /// Ticket currently being played, if any
    pub fn active_ticket(&self) -> Option<&Ticket> {
        self.active.and_then(|i| self.history.get(i))
    }

    /// Tier selected for the purchase awaiting payment
    pub fn selected_tier(&self) -> Option<&PriceTier> {
        self.pending_tier.as_ref()
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // OPERATIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start buying a ticket of `tier`
    pub fn request_purchase(&mut self, tier: &PriceTier) -> SessionResult<()> {
        self.guard(Operation::RequestPurchase)?;

        self.pending_tier = Some(tier.clone());
        self.transition(GameState::AwaitingPayment);
        self.emit(
            SessionEventKind::PurchaseRequested {
                tier_value: tier.value(),
            },
            None,
        );
        log::debug!("Purchase requested: {}", tier.label());
        Ok(())
    }

    /// Start buying the configured tier priced at `value`
    pub fn request_purchase_for(&mut self, value: f64) -> SessionResult<()> {
        self.guard(Operation::RequestPurchase)?;
        let tier = self
            .engine
            .tier(value)
            .cloned()
            .ok_or(sc_prize::PrizeError::UnknownTier(value))?;
        self.request_purchase(&tier)
    }

    /// Payment succeeded with the default method
    pub fn confirm_payment(&mut self) -> SessionResult<Ticket> {
        self.confirm_payment_with(PaymentMethod::default())
    }

    /// Payment succeeded: draw the prize and issue the ticket
    ///
    /// The draw happens exactly once here; the prize is committed to the
    /// ticket before any reveal can occur.
    pub fn confirm_payment_with(&mut self, method: PaymentMethod) -> SessionResult<Ticket> {
        self.guard(Operation::ConfirmPayment)?;
        let Some(tier) = self.pending_tier.take() else {
            return Err(self.rejected(Operation::ConfirmPayment));
        };

        let prize = self.engine.draw_with(&tier, self.source.as_mut());
        self.ticket_seq += 1;
        let ticket = Ticket::new(TicketId(self.ticket_seq), &tier, method, prize);

        self.stats.record_purchase(tier.value());
        self.history.push(ticket.clone());
        self.active = Some(self.history.len() - 1);
        self.transition(GameState::Revealable);
        self.emit(
            SessionEventKind::PaymentConfirmed {
                payment_method: method,
            },
            Some(ticket.id()),
        );

        log::debug!(
            "Issued {} ({}, paid via {})",
            ticket.id(),
            ticket.tier_label(),
            method.display_name()
        );
        Ok(ticket)
    }

    /// Payment was cancelled or failed; back to Idle without a ticket
    pub fn cancel_payment(&mut self) -> SessionResult<()> {
        self.guard(Operation::CancelPayment)?;

        self.pending_tier = None;
        self.transition(GameState::Idle);
        self.emit(SessionEventKind::PaymentCancelled, None);
        log::debug!("Payment cancelled");
        Ok(())
    }

    /// Report how much of the ticket has been scratched, in percent
    ///
    /// The first report starts the reveal. Reaching [`REVEAL_THRESHOLD`]
    /// finalizes the ticket and settles its prize into the stats in the
    /// same step. Lower percents than a previous report are accepted, but
    /// the ticket's recorded progress never decreases.
    pub fn report_reveal_progress(&mut self, percent: f64) -> SessionResult<GameState> {
        if !(0.0..=100.0).contains(&percent) {
            log::warn!("Rejected reveal progress {}", percent);
            return Err(SessionError::OutOfRangeInput { percent });
        }
        self.guard(Operation::ReportRevealProgress)?;
        let Some(index) = self.active.filter(|&i| i < self.history.len()) else {
            return Err(self.rejected(Operation::ReportRevealProgress));
        };

        let starting = self.state == GameState::Revealable;
        let next = if percent >= REVEAL_THRESHOLD {
            GameState::Finalized
        } else {
            GameState::Revealing
        };

        let ticket = &mut self.history[index];
        ticket.record_progress(percent, next);
        let ticket_id = ticket.id();
        let settled = (next == GameState::Finalized).then(|| ticket.prize().clone());

        if starting {
            self.transition(GameState::Revealing);
            self.emit(SessionEventKind::RevealStarted, Some(ticket_id));
        }
        self.emit(SessionEventKind::RevealProgress { percent }, Some(ticket_id));

        if let Some(prize) = settled {
            self.stats.record_finalized(&prize);
            self.transition(GameState::Finalized);
            self.emit(
                SessionEventKind::TicketFinalized {
                    amount: prize.amount,
                    message: prize.message.clone(),
                },
                Some(ticket_id),
            );
            log::info!(
                "{} revealed: {} ({})",
                ticket_id,
                prize.amount,
                prize.message
            );
        }

        Ok(self.state)
    }

    /// Leave a finalized ticket and return to Idle
    ///
    /// History and stats are kept.
    pub fn start_new_game(&mut self) -> SessionResult<()> {
        self.guard(Operation::StartNewGame)?;

        let ticket_id = self.active_ticket().map(|t| t.id());
        self.active = None;
        self.transition(GameState::Idle);
        self.emit(SessionEventKind::NewGame, ticket_id);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // INTERNALS
    // ═══════════════════════════════════════════════════════════════════════════

    fn guard(&self, operation: Operation) -> SessionResult<()> {
        if self.state.accepts(operation) {
            Ok(())
        } else {
            Err(self.rejected(operation))
        }
    }

    fn rejected(&self, operation: Operation) -> SessionError {
        log::warn!("Rejected {} while {}", operation, self.state);
        SessionError::InvalidStateTransition {
            state: self.state,
            operation,
        }
    }

    fn transition(&mut self, next: GameState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }

    fn emit(&mut self, kind: SessionEventKind, ticket_id: Option<TicketId>) {
        self.events.push(SessionEvent::new(kind, ticket_id));
    }
}

impl Default for TicketSession {
    fn default() -> Self {
        Self::with_standard_tiers()
    }
}

impl std::fmt::Debug for TicketSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketSession")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("tickets", &self.history.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
