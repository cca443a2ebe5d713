//! Trick state and the legal-play computation.

use serde::Serialize;

use super::cards_logic::{card_beats, card_points, rank_strength};
use super::cards_types::{Card, Suit};
use super::modes::{GameMode, ModeCategory};
use super::seats::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

/// One trick in progress: a leader and up to four (seat, card) plays.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TrickState {
    leader: Seat,
    plays: Vec<(Seat, Card)>,
}

impl TrickState {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// Suit of the first play, once there is one.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|&(_, c)| c.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    /// Seat expected to play next; None once the trick is complete.
    pub fn next_to_play(&self) -> Option<Seat> {
        if self.is_complete() {
            None
        } else {
            Some(self.leader.nth_next(self.plays.len()))
        }
    }

    /// Add a play, returning the next snapshot. Turn order is enforced;
    /// rule legality is `legal_plays`' concern.
    pub fn with_play(&self, who: Seat, card: Card) -> Result<Self, DomainError> {
        if self.is_complete() {
            return Err(DomainError::validation(
                ValidationKind::TrickComplete,
                "Trick already has four plays",
            ));
        }
        match self.next_to_play() {
            Some(expected) if expected == who => {}
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::OutOfTurn,
                    "Out of turn",
                ))
            }
        }
        let mut next = self.clone();
        next.plays.push((who, card));
        Ok(next)
    }

    /// The play currently holding the trick, per the beats relation.
    pub fn current_best(&self, mode: GameMode) -> Option<(Seat, Card)> {
        let lead = self.lead_suit()?;
        let mut best = self.plays[0];
        for &(seat, card) in &self.plays[1..] {
            if card_beats(card, best.1, lead, mode) {
                best = (seat, card);
            }
        }
        Some(best)
    }

    /// Winner of a complete trick; None while plays are outstanding.
    pub fn winner(&self, mode: GameMode) -> Option<Seat> {
        if !self.is_complete() {
            return None;
        }
        self.current_best(mode).map(|(seat, _)| seat)
    }

    /// Card points contained in the trick under `mode`.
    pub fn points(&self, mode: GameMode) -> u16 {
        self.plays.iter().map(|&(_, c)| card_points(c, mode)).sum()
    }
}

/// Compute the legal subset of `hand` for the seat facing `trick`.
///
/// Encodes the follow/trump/overtrump obligations of each contract
/// category. Total for any reachable state: a non-empty hand always yields
/// a non-empty result.
pub fn legal_plays(hand: &[Card], trick: &TrickState, mode: GameMode, who: Seat) -> Vec<Card> {
    if hand.is_empty() {
        return Vec::new();
    }

    // Leading: the entire hand is legal.
    let Some(lead) = trick.lead_suit() else {
        return sorted(hand.to_vec());
    };

    let followers: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
    if !followers.is_empty() {
        return follow_suit_plays(followers, trick, mode, lead);
    }
    void_in_lead_plays(hand, trick, mode, who)
}

/// Membership test against `legal_plays`.
pub fn is_valid_play(
    hand: &[Card],
    trick: &TrickState,
    mode: GameMode,
    who: Seat,
    card: Card,
) -> bool {
    legal_plays(hand, trick, mode, who).contains(&card)
}

/// Holding the lead suit: follow, and beat the best card when obliged.
fn follow_suit_plays(
    followers: Vec<Card>,
    trick: &TrickState,
    mode: GameMode,
    lead: Suit,
) -> Vec<Card> {
    let must_beat = match mode.category() {
        ModeCategory::AllTrumps => true,
        ModeCategory::Colour => mode.trump_suit() == Some(lead),
        ModeCategory::NoTrumps => false,
    };
    if !must_beat {
        return sorted(followers);
    }
    // Best lead-suit card so far; off-suit plays cannot hold the trick here.
    let best = trick
        .plays()
        .iter()
        .filter(|&&(_, c)| c.suit == lead)
        .map(|&(_, c)| rank_strength(c, mode))
        .max();
    let Some(best) = best else {
        return sorted(followers);
    };
    let beating: Vec<Card> = followers
        .iter()
        .copied()
        .filter(|&c| rank_strength(c, mode) > best)
        .collect();
    if beating.is_empty() {
        sorted(followers)
    } else {
        sorted(beating)
    }
}

/// Void in the lead suit: free discard outside Colour; under Colour the
/// forced-trump/overtrump obligations apply, except when the partner is
/// holding the trick with a plain card.
fn void_in_lead_plays(hand: &[Card], trick: &TrickState, mode: GameMode, who: Seat) -> Vec<Card> {
    let Some(trump) = mode.trump_suit() else {
        return sorted(hand.to_vec());
    };

    let trumps: Vec<Card> = hand.iter().copied().filter(|c| c.suit == trump).collect();
    if trumps.is_empty() {
        return sorted(hand.to_vec());
    }

    let trump_played = trick.plays().iter().any(|&(_, c)| c.suit == trump);
    if let Some((best_seat, best_card)) = trick.current_best(mode) {
        if best_seat.team() == who.team() && best_card.suit != trump && !trump_played {
            return sorted(hand.to_vec());
        }
    }

    if trump_played {
        let highest = trick
            .plays()
            .iter()
            .filter(|&&(_, c)| c.suit == trump)
            .map(|&(_, c)| rank_strength(c, mode))
            .max();
        if let Some(highest) = highest {
            let over: Vec<Card> = trumps
                .iter()
                .copied()
                .filter(|&c| rank_strength(c, mode) > highest)
                .collect();
            if !over.is_empty() {
                return sorted(over);
            }
        }
        return sorted(trumps);
    }

    sorted(trumps)
}

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort();
    cards
}
