//! Heuristic — a deterministic, rule-based baseline agent.
//!
//! Goals:
//! - Stay 100% legal by choosing only from the engine-supplied legal sets.
//! - Be deterministic (no RNG), but materially stronger than random play.
//!
//! Bidding:
//! - Rate each announceable mode from hand shape: jack/nine density for
//!   AllTrumps, ace/ten density for NoTrumps, jack-plus-length in one suit
//!   for a colour. Announce the cheapest qualifying mode; otherwise accept.
//! - Double an opposing colour bid when holding both its jack and nine.
//!
//! Play:
//! - Conserve when the partner already holds the trick (shed the lowest
//!   value card).
//! - Win as cheaply as possible once half the table has played; otherwise
//!   shed low.
//! - On lead: play low from the longest suit to preserve top cards.

use super::trait_def::{AgentError, CutChoice, PlayerAgent};
use crate::domain::cards_logic::{card_beats, card_points, rank_strength};
use crate::domain::negotiation::NegotiationAction;
use crate::domain::player_view::{CutView, NegotiationView, TrickView};
use crate::domain::{Card, GameMode, ModeCategory, Rank, Suit};

#[derive(Clone, Default)]
pub struct Heuristic {
    _seed: Option<u64>, // reserved for future tie-breaking knobs
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }

    fn count(hand: &[Card], rank: Rank) -> usize {
        hand.iter().filter(|c| c.rank == rank).count()
    }

    fn suit_cards(hand: &[Card], suit: Suit) -> Vec<Card> {
        hand.iter().copied().filter(|c| c.suit == suit).collect()
    }

    fn holds(hand: &[Card], rank: Rank, suit: Suit) -> bool {
        hand.iter().any(|c| c.rank == rank && c.suit == suit)
    }

    /// Would this hand be happy playing `mode`?
    fn wants_mode(hand: &[Card], mode: GameMode) -> bool {
        match mode.category() {
            ModeCategory::Colour => {
                let Some(suit) = mode.trump_suit() else {
                    return false;
                };
                let own = Self::suit_cards(hand, suit);
                Self::holds(hand, Rank::Jack, suit)
                    && (Self::holds(hand, Rank::Nine, suit) || own.len() >= 3)
            }
            ModeCategory::NoTrumps => {
                Self::count(hand, Rank::Ace) + Self::count(hand, Rank::Ten) >= 3
            }
            ModeCategory::AllTrumps => {
                2 * Self::count(hand, Rank::Jack) + Self::count(hand, Rank::Nine) >= 4
            }
        }
    }

    /// Sort key for shedding: fewest card points first, weakest first.
    fn shed_key(card: Card, mode: GameMode) -> (u16, u8) {
        (card_points(card, mode), rank_strength(card, mode))
    }

    fn lowest(cards: &[Card], mode: GameMode) -> Option<Card> {
        cards.iter().copied().min_by_key(|&c| Self::shed_key(c, mode))
    }

    /// Lead low from the longest suit represented in the legal set.
    fn lead(hand: &[Card], legal: &[Card], mode: GameMode) -> Option<Card> {
        let longest = Suit::ALL
            .into_iter()
            .max_by_key(|&s| Self::suit_cards(hand, s).len())?;
        let in_longest: Vec<Card> = legal.iter().copied().filter(|c| c.suit == longest).collect();
        if in_longest.is_empty() {
            Self::lowest(legal, mode)
        } else {
            Self::lowest(&in_longest, mode)
        }
    }
}

impl PlayerAgent for Heuristic {
    fn choose_cut(&self, _view: &CutView) -> Result<CutChoice, AgentError> {
        Ok(CutChoice {
            count: 16,
            from_top: true,
        })
    }

    fn choose_action(
        &self,
        view: &NegotiationView,
        legal: &[NegotiationAction],
    ) -> Result<NegotiationAction, AgentError> {
        // Announce the cheapest mode the hand qualifies for.
        let announce = legal.iter().copied().find(|a| match a {
            NegotiationAction::Announce(mode) => Self::wants_mode(&view.hand, *mode),
            _ => false,
        });
        if let Some(action) = announce {
            return Ok(action);
        }

        // Double an opposing colour we dominate.
        let double = legal.iter().copied().find(|a| match a {
            NegotiationAction::Double(mode) => mode.trump_suit().is_some_and(|suit| {
                Self::holds(&view.hand, Rank::Jack, suit)
                    && Self::holds(&view.hand, Rank::Nine, suit)
            }),
            _ => false,
        });
        if let Some(action) = double {
            return Ok(action);
        }

        if legal.contains(&NegotiationAction::Accept) {
            return Ok(NegotiationAction::Accept);
        }
        // Accept is available in every open negotiation; falling through
        // means the offered set was malformed.
        legal
            .first()
            .copied()
            .ok_or_else(|| AgentError::NoChoice("No legal negotiation actions offered".into()))
    }

    fn choose_card(&self, view: &TrickView, legal: &[Card]) -> Result<Card, AgentError> {
        let no_choice = || AgentError::NoChoice("No legal cards offered".into());
        if legal.len() == 1 {
            return legal.first().copied().ok_or_else(no_choice);
        }
        let mode = view.contract.mode;
        let trick = &view.trick;

        let Some(lead) = trick.lead_suit() else {
            return Self::lead(&view.hand, legal, mode).ok_or_else(no_choice);
        };
        let Some((best_seat, best_card)) = trick.current_best(mode) else {
            return Self::lowest(legal, mode).ok_or_else(no_choice);
        };

        // Partner holds the trick: shed low.
        if best_seat.team() == view.seat.team() {
            return Self::lowest(legal, mode).ok_or_else(no_choice);
        }

        let winning: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|&c| card_beats(c, best_card, lead, mode))
            .collect();
        // Take the trick cheaply once half the table has played.
        if !winning.is_empty() && trick.plays().len() >= 2 {
            return Self::lowest(&winning, mode).ok_or_else(no_choice);
        }
        Self::lowest(legal, mode).ok_or_else(no_choice)
    }
}
