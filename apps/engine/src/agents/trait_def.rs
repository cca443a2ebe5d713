//! Player agent trait definition.

use std::fmt;

use crate::domain::negotiation::NegotiationAction;
use crate::domain::player_view::{CutView, DealStartView, MatchSummary, NegotiationView, TrickView};
use crate::domain::scoring::DealResult;
use crate::domain::Card;

/// Errors that can occur during agent decision-making.
#[derive(Debug)]
pub enum AgentError {
    /// Agent encountered an internal error
    Internal(String),
    /// Agent could not pick from the offered legal set
    NoChoice(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Internal(msg) => write!(f, "agent internal error: {msg}"),
            AgentError::NoChoice(msg) => write!(f, "agent has no choice: {msg}"),
        }
    }
}

impl std::error::Error for AgentError {}

/// A cut request: how many cards to take, and off which end.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CutChoice {
    pub count: usize,
    pub from_top: bool,
}

/// Trait for player agents.
///
/// Implementations receive the state visible to their seat plus the
/// engine-computed legal set, and must choose from that set; anything else
/// is a fatal protocol violation. Rule-based, heuristic, human-facing, and
/// remote strategies are interchangeable — a decision method may block as
/// long as it likes (UI input, network round trip); the orchestrator issues
/// exactly one decision request at a time. Lifecycle notifications default
/// to no-ops.
pub trait PlayerAgent: Send + Sync {
    /// Cut the pack before distribution (6 to 26 cards, either end).
    fn choose_cut(&self, view: &CutView) -> Result<CutChoice, AgentError>;

    /// Choose a negotiation action from the offered legal set.
    fn choose_action(
        &self,
        view: &NegotiationView,
        legal: &[NegotiationAction],
    ) -> Result<NegotiationAction, AgentError>;

    /// Choose a card from the offered legal set.
    fn choose_card(&self, view: &TrickView, legal: &[Card]) -> Result<Card, AgentError>;

    /// A deal is starting.
    fn deal_started(&self, _view: &DealStartView) {}

    /// A deal was scored.
    fn deal_ended(&self, _result: &DealResult) {}

    /// The match is over.
    fn match_ended(&self, _summary: &MatchSummary) {}
}
