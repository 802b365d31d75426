//! sc-session: Scratch ticket session
//!
//! Drives one player through purchase, payment, reveal and settlement:
//!
//! ```text
//! Idle ──request_purchase──▶ AwaitingPayment ──confirm_payment──▶ Revealable
//!  ▲                              │                                  │
//!  │◀────────cancel_payment───────┘                 first progress  │
//!  │                                                                 ▼
//!  └────start_new_game──── Finalized ◀──progress >= 60─── Revealing ─┐
//!                                                             ▲      │ progress < 60
//!                                                             └──────┘
//! ```
//!
//! The prize is drawn once, at payment confirmation, and is settled into the
//! stats exactly once, when the reveal threshold is reached.

pub mod error;
pub mod event;
pub mod session;
pub mod shared;
pub mod state;
pub mod stats;
pub mod ticket;

pub use error::*;
pub use event::{MAX_PENDING_EVENTS, SessionEvent, SessionEventKind};
pub use session::*;
pub use shared::*;
pub use state::*;
pub use stats::*;
pub use ticket::*;
