//! Thread-safe session handle

use std::sync::Arc;

use parking_lot::Mutex;
use sc_prize::PriceTier;

use crate::error::SessionResult;
use crate::event::SessionEvent;
use crate::session::TicketSession;
use crate::state::GameState;
use crate::stats::SessionStats;
use crate::ticket::{PaymentMethod, Ticket};

/// Cloneable handle to one [`TicketSession`]
///
/// All clones share the same session. Each operation takes the lock for its
/// whole transition, so reports arriving from several threads are applied one
/// at a time.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<TicketSession>>,
}

impl SharedSession {
    pub fn new(session: TicketSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn request_purchase(&self, tier: &PriceTier) -> SessionResult<()> {
        self.inner.lock().request_purchase(tier)
    }

    pub fn request_purchase_for(&self, value: f64) -> SessionResult<()> {
        self.inner.lock().request_purchase_for(value)
    }

    pub fn confirm_payment(&self) -> SessionResult<Ticket> {
        self.inner.lock().confirm_payment()
    }

    pub fn confirm_payment_with(&self, method: PaymentMethod) -> SessionResult<Ticket> {
        self.inner.lock().confirm_payment_with(method)
    }

    pub fn cancel_payment(&self) -> SessionResult<()> {
        self.inner.lock().cancel_payment()
    }

    pub fn report_reveal_progress(&self, percent: f64) -> SessionResult<GameState> {
        self.inner.lock().report_reveal_progress(percent)
    }

    pub fn start_new_game(&self) -> SessionResult<()> {
        self.inner.lock().start_new_game()
    }

    pub fn state(&self) -> GameState {
        self.inner.lock().state()
    }

    /// Snapshot of the stats
    pub fn stats(&self) -> SessionStats {
        self.inner.lock().stats().clone()
    }

    /// Snapshot of the history
    pub fn history(&self) -> Vec<Ticket> {
        self.inner.lock().history().to_vec()
    }

    pub fn active_ticket(&self) -> Option<Ticket> {
        self.inner.lock().active_ticket().cloned()
    }

    pub fn drain_events(&self) -> Vec<SessionEvent> {
        self.inner.lock().drain_events()
    }

    /// Run `f` with the session locked
    pub fn with<R>(&self, f: impl FnOnce(&mut TicketSession) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<TicketSession> for SharedSession {
    fn from(session: TicketSession) -> Self {
        Self::new(session)
    }
}

impl std::fmt::Debug for SharedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedSession").field(&*self.inner.lock()).finish()
    }
}
