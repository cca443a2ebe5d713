//! Deal and match snapshots owned by the orchestrator.
//!
//! The orchestrator holds exactly one current snapshot of each and replaces
//! it wholesale on every transition; completed-deal history never aliases a
//! snapshot that can still change.

use serde::Serialize;

use super::cards_logic::LAST_TRICK_BONUS;
use super::cards_types::Card;
use super::negotiation::Contract;
use super::scoring::DealResult;
use super::seats::{Seat, Team};
use super::tricks::{legal_plays, TrickState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Tricks in a deal once both distributions are out.
pub const TRICKS_PER_DEAL: u8 = 8;

/// A resolved trick kept in deal history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CompletedTrick {
    pub trick: TrickState,
    pub winner: Seat,
}

/// One deal in the trick-play phase: settled contract, hands, tricks, and
/// the running card-point tally.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DealState {
    pub dealer: Seat,
    pub contract: Contract,
    /// Hands by seat index.
    pub hands: [Vec<Card>; 4],
    pub completed_tricks: Vec<CompletedTrick>,
    pub current_trick: TrickState,
    /// Accumulated card points per team (Team One at index 0).
    pub card_points: [u16; 2],
}

impl DealState {
    /// Start trick play: the seat clockwise of the dealer leads first.
    pub fn new(dealer: Seat, contract: Contract, hands: [Vec<Card>; 4]) -> Self {
        Self {
            dealer,
            contract,
            hands,
            completed_tricks: Vec::with_capacity(TRICKS_PER_DEAL as usize),
            current_trick: TrickState::new(dealer.next()),
            card_points: [0, 0],
        }
    }

    /// Seat expected to play next; None once all tricks are resolved.
    pub fn turn(&self) -> Option<Seat> {
        if self.is_complete() {
            None
        } else {
            self.current_trick.next_to_play()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_tricks.len() == TRICKS_PER_DEAL as usize
    }

    /// Legal cards for a seat against the current trick.
    pub fn legal_plays_for(&self, who: Seat) -> Vec<Card> {
        legal_plays(
            &self.hands[who.index()],
            &self.current_trick,
            self.contract.mode,
            who,
        )
    }

    pub fn tricks_won(&self, team: Team) -> u8 {
        self.completed_tricks
            .iter()
            .filter(|t| t.winner.team() == team)
            .count() as u8
    }

    /// The team that took every trick of a complete deal, if any.
    pub fn sweep(&self) -> Option<Team> {
        if !self.is_complete() {
            return None;
        }
        Team::ALL
            .into_iter()
            .find(|&team| self.tricks_won(team) == TRICKS_PER_DEAL)
    }

    /// Play a card for `who`, enforcing turn, possession, and rule legality,
    /// and returning the next snapshot. A completed trick is resolved
    /// immediately: points are tallied (last trick carries its bonus) and
    /// the winner leads the next trick.
    pub fn play_card(&self, who: Seat, card: Card) -> Result<Self, DomainError> {
        match self.turn() {
            Some(expected) if expected == who => {}
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::OutOfTurn,
                    "Out of turn",
                ))
            }
        }
        let hand = &self.hands[who.index()];
        let Some(pos) = hand.iter().position(|&c| c == card) else {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                "Card not in hand",
            ));
        };
        if !self.legal_plays_for(who).contains(&card) {
            return Err(DomainError::validation(
                ValidationKind::CardNotPlayable,
                "Card violates the follow/trump obligations",
            ));
        }

        let mut next = self.clone();
        next.hands[who.index()].remove(pos);
        next.current_trick = next.current_trick.with_play(who, card)?;

        if !next.current_trick.is_complete() {
            return Ok(next);
        }

        let mode = next.contract.mode;
        let winner = next
            .current_trick
            .winner(mode)
            .ok_or_else(|| DomainError::validation_other("Complete trick has no winner"))?;
        let mut points = next.current_trick.points(mode);
        if next.completed_tricks.len() + 1 == TRICKS_PER_DEAL as usize {
            points += LAST_TRICK_BONUS;
        }
        next.card_points[winner.team().index()] += points;
        next.completed_tricks.push(CompletedTrick {
            trick: next.current_trick.clone(),
            winner,
        });
        next.current_trick = TrickState::new(winner);
        Ok(next)
    }
}

/// Running match totals across deals.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MatchState {
    pub target_score: u16,
    /// Dealer of the next (or current) deal.
    pub dealer: Seat,
    /// Match points per team (Team One at index 0).
    pub match_points: [u16; 2],
    pub deals: Vec<DealResult>,
    pub complete: bool,
    pub winner: Option<Team>,
}

impl MatchState {
    pub fn new(target_score: u16, first_dealer: Seat) -> Self {
        Self {
            target_score,
            dealer: first_dealer,
            match_points: [0, 0],
            deals: Vec::new(),
            complete: false,
            winner: None,
        }
    }

    /// Fold a scored deal into the totals, rotate the dealer, and settle
    /// completion: instant wins end the match outright; otherwise the first
    /// team at or past the target wins, the higher total deciding if both
    /// cross on the same deal (an exact tie keeps the match going).
    pub fn with_deal(&self, result: DealResult) -> Self {
        let mut next = self.clone();
        next.match_points[0] += result.match_points[0];
        next.match_points[1] += result.match_points[1];

        if result.instant_win {
            next.winner = result.sweep;
            next.complete = next.winner.is_some();
        } else {
            let [one, two] = next.match_points;
            let target = next.target_score;
            next.winner = match (one >= target, two >= target) {
                (true, false) => Some(Team::One),
                (false, true) => Some(Team::Two),
                (true, true) if one > two => Some(Team::One),
                (true, true) if two > one => Some(Team::Two),
                _ => None,
            };
            next.complete = next.winner.is_some();
        }

        next.deals.push(result);
        next.dealer = next.dealer.next();
        next
    }

    /// A thrown-in deal: no score, dealer still rotates.
    pub fn with_redeal(&self) -> Self {
        let mut next = self.clone();
        next.dealer = next.dealer.next();
        next
    }
}
