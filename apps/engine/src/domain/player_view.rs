//! Per-seat snapshots handed to player agents.
//!
//! Each view exposes only what the seat may see: its own hand, the open
//! action/trick history, and public totals. External presentation layers
//! read the same structures; all of them serialize.

use serde::Serialize;

use super::cards_types::Card;
use super::modes::GameMode;
use super::negotiation::{Contract, NegotiationAction};
use super::seats::{Seat, Team};
use super::state::{DealState, MatchState};
use super::tricks::TrickState;

/// Offered to the cutter before distribution.
#[derive(Debug, Clone, Serialize)]
pub struct CutView {
    pub seat: Seat,
    pub dealer: Seat,
    pub deck_size: usize,
    pub match_points: [u16; 2],
    pub target_score: u16,
}

/// Offered with every negotiation decision.
#[derive(Debug, Clone, Serialize)]
pub struct NegotiationView {
    pub seat: Seat,
    pub dealer: Seat,
    pub hand: Vec<Card>,
    pub history: Vec<(Seat, NegotiationAction)>,
    pub current_bid: Option<(Seat, GameMode)>,
    pub match_points: [u16; 2],
    pub target_score: u16,
}

/// Offered with every card decision.
#[derive(Debug, Clone, Serialize)]
pub struct TrickView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub contract: Contract,
    pub trick: TrickState,
    pub completed_tricks: u8,
    pub tricks_won: [u8; 2],
    pub card_points: [u16; 2],
    pub match_points: [u16; 2],
}

/// Broadcast when a deal begins.
#[derive(Debug, Clone, Serialize)]
pub struct DealStartView {
    pub deal_no: u32,
    pub dealer: Seat,
    pub match_points: [u16; 2],
    pub target_score: u16,
}

/// Broadcast when the match ends.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub match_points: [u16; 2],
    pub winner: Option<Team>,
    pub deals_played: usize,
    pub target_score: u16,
}

impl TrickView {
    pub fn for_seat(seat: Seat, deal: &DealState, match_state: &MatchState) -> Self {
        Self {
            seat,
            hand: deal.hands[seat.index()].clone(),
            contract: deal.contract,
            trick: deal.current_trick.clone(),
            completed_tricks: deal.completed_tricks.len() as u8,
            tricks_won: [deal.tricks_won(Team::One), deal.tricks_won(Team::Two)],
            card_points: deal.card_points,
            match_points: match_state.match_points,
        }
    }
}

impl MatchSummary {
    pub fn of(match_state: &MatchState) -> Self {
        Self {
            match_points: match_state.match_points,
            winner: match_state.winner,
            deals_played: match_state.deals.len(),
            target_score: match_state.target_score,
        }
    }
}
