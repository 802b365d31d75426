//! sc-sim: Scratch ticket simulation
//!
//! - [`simulate_tier`]: parallel batch draws measuring odds and RTP
//! - [`play_session`]: scripted end-to-end sessions
//!
//! The `scratchcard` binary drives both from the command line.

pub mod error;
pub mod play;
pub mod simulate;

pub use error::*;
pub use play::*;
pub use simulate::*;
