#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for a four-player Belote-variant trick-taking game.
//!
//! The crate is split into three layers:
//! - [`domain`]: pure game law — cards, deck, contract modes, negotiation,
//!   trick legality, and scoring. Every transition is a pure function from an
//!   immutable snapshot to a new snapshot.
//! - [`agents`]: the player-decision contract and the built-in baseline
//!   strategies (random, heuristic).
//! - [`flow`]: the match/deal orchestrator that sequences cut, distribution,
//!   negotiation, trick play, and scoring across deals until a team reaches
//!   the target score.

pub mod agents;
pub mod domain;
pub mod error;
pub mod errors;
pub mod flow;

// Re-exports for public API
pub use agents::{AgentError, PlayerAgent};
pub use domain::{Card, GameMode, Multiplier, Rank, Seat, Suit, Team};
pub use error::EngineError;
pub use flow::{MatchConfig, MatchRunner};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
