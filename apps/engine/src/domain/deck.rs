//! Deck construction, cutting, and dealing.

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Number of cards in the short pack.
pub const DECK_SIZE: usize = 32;

/// Smallest and largest legal cut, in cards taken off one end.
pub const CUT_MIN: usize = 6;
pub const CUT_MAX: usize = 26;

/// An ordered pile of cards. `cards()[0]` is the top of the pack.
///
/// A freshly provided deck must hold the 32 distinct cards
/// (`ensure_full` checks this); dealing produces smaller remainder piles.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full pack in standard order: suits C, D, H, S, ranks 7 through A.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Verify the pile is a complete pack: exactly 32 distinct cards.
    pub fn ensure_full(&self) -> Result<(), DomainError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::MalformedDeck,
                format!("Deck has {} cards, expected {DECK_SIZE}", self.cards.len()),
            ));
        }
        for i in 0..self.cards.len() {
            for j in (i + 1)..self.cards.len() {
                if self.cards[i] == self.cards[j] {
                    return Err(DomainError::validation(
                        ValidationKind::MalformedDeck,
                        format!("Duplicate card {:?}", self.cards[i]),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Cut the pack: move `count` cards from one end to the other.
    ///
    /// A cut is a rotation of the cyclic card order, so a second cut of
    /// `DECK_SIZE - count` from the same end restores the original deck.
    /// Only cuts of 6 to 26 cards are legal, and only on a full pack.
    pub fn cut(&self, count: usize, from_top: bool) -> Result<Deck, DomainError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::MalformedDeck,
                "Cut requires a full pack",
            ));
        }
        if !(CUT_MIN..=CUT_MAX).contains(&count) {
            return Err(DomainError::validation(
                ValidationKind::OutOfRangeCut,
                format!("Cut of {count} cards is outside {CUT_MIN}..={CUT_MAX}"),
            ));
        }
        let split = if from_top {
            count
        } else {
            self.cards.len() - count
        };
        let mut cards = Vec::with_capacity(self.cards.len());
        cards.extend_from_slice(&self.cards[split..]);
        cards.extend_from_slice(&self.cards[..split]);
        Ok(Deck { cards })
    }

    /// Split off the top `n` cards; returns them with the remainder pile.
    pub fn deal(&self, n: usize) -> Result<(Vec<Card>, Deck), DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::validation(
                ValidationKind::MalformedDeck,
                format!("Cannot deal {n} cards from a pile of {}", self.cards.len()),
            ));
        }
        let dealt = self.cards[..n].to_vec();
        let rest = Deck {
            cards: self.cards[n..].to_vec(),
        };
        Ok((dealt, rest))
    }
}
