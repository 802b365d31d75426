//! Automated session play
//!
//! Runs full ticket lifecycles through a [`TicketSession`], scratching each
//! ticket in steps until it finalizes.

use std::sync::Arc;

use sc_prize::{PrizeEngine, SeededSource};
use sc_session::{GameState, TicketSession};

use crate::error::SimResult;

/// Reveal reports sent for each ticket
const SCRATCH_STEPS: [f64; 5] = [15.0, 30.0, 45.0, 60.0, 100.0];

/// Play `tickets` tickets of the tier priced at `tier_value`
///
/// Returns the session so callers can inspect stats, history and events.
pub fn play_session(
    engine: Arc<PrizeEngine>,
    tier_value: f64,
    tickets: u64,
    seed: u64,
) -> SimResult<TicketSession> {
    let mut session = TicketSession::new(engine, Box::new(SeededSource::from_seed(seed)));

    for _ in 0..tickets {
        session.request_purchase_for(tier_value)?;
        session.confirm_payment()?;

        for percent in SCRATCH_STEPS {
            if session.report_reveal_progress(percent)? == GameState::Finalized {
                break;
            }
        }

        session.start_new_game()?;
    }

    log::info!(
        "Played {} tickets: spent {:.2}, won {:.2}",
        tickets,
        session.stats().total_spent,
        session.stats().total_winnings
    );
    Ok(session)
}
