//! Contract modes, categories, and multipliers, with their scoring tables.
//!
//! The six modes form the strict bidding hierarchy
//! Clubs < Diamonds < Hearts < Spades < NoTrumps < AllTrumps, which the
//! derived `Ord` encodes through declaration order. Every mode carries the
//! constants the scoring calculator and negotiation engine need.

use serde::{Deserialize, Serialize};

use super::cards_types::Suit;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrumps,
    AllTrumps,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ModeCategory {
    /// One trump suit; the other three suits rank plainly.
    Colour,
    /// Plain ranking everywhere, no trump suit.
    NoTrumps,
    /// Trump ranking everywhere, no trump suit.
    AllTrumps,
}

impl GameMode {
    /// All modes in ascending bidding order.
    pub const ALL: [GameMode; 6] = [
        GameMode::Clubs,
        GameMode::Diamonds,
        GameMode::Hearts,
        GameMode::Spades,
        GameMode::NoTrumps,
        GameMode::AllTrumps,
    ];

    pub fn category(self) -> ModeCategory {
        match self {
            GameMode::Clubs | GameMode::Diamonds | GameMode::Hearts | GameMode::Spades => {
                ModeCategory::Colour
            }
            GameMode::NoTrumps => ModeCategory::NoTrumps,
            GameMode::AllTrumps => ModeCategory::AllTrumps,
        }
    }

    /// The trump suit of a Colour contract; None for NoTrumps/AllTrumps.
    pub fn trump_suit(self) -> Option<Suit> {
        match self {
            GameMode::Clubs => Some(Suit::Clubs),
            GameMode::Diamonds => Some(Suit::Diamonds),
            GameMode::Hearts => Some(Suit::Hearts),
            GameMode::Spades => Some(Suit::Spades),
            GameMode::NoTrumps | GameMode::AllTrumps => None,
        }
    }

    /// Card points the announcing team must reach to win the contract.
    pub fn win_threshold(self) -> u16 {
        match self.category() {
            ModeCategory::Colour => 82,
            ModeCategory::NoTrumps => 65,
            ModeCategory::AllTrumps => 129,
        }
    }

    /// Total card points available in a deal, last-trick bonus included.
    pub fn total_points(self) -> u16 {
        match self.category() {
            ModeCategory::Colour => 162,
            ModeCategory::NoTrumps => 130,
            ModeCategory::AllTrumps => 258,
        }
    }

    /// Match points at stake before the multiplier is applied.
    ///
    /// Clubs and NoTrumps already carry their effective acceptance double in
    /// the base value (16 → 32, 26 → 52).
    pub fn base_match_points(self) -> u16 {
        match self {
            GameMode::Clubs => 32,
            GameMode::Diamonds | GameMode::Hearts | GameMode::Spades => 16,
            GameMode::NoTrumps => 52,
            GameMode::AllTrumps => 26,
        }
    }

    /// Match points for winning all 8 tricks, before the multiplier.
    ///
    /// None for Colour contracts: a Colour sweep is an instant match win
    /// instead of a point award.
    pub fn sweep_bonus(self) -> Option<u16> {
        match self.category() {
            ModeCategory::Colour => None,
            ModeCategory::NoTrumps => Some(90),
            ModeCategory::AllTrumps => Some(45),
        }
    }

    /// Whether an opposing acceptance of this bid records an implicit double.
    pub fn auto_doubles_on_accept(self) -> bool {
        matches!(self, GameMode::Clubs | GameMode::NoTrumps)
    }

    /// Whether an explicit double of this mode may be redoubled.
    ///
    /// Clubs and NoTrumps are excluded: they are already effectively doubled
    /// on acceptance.
    pub fn allows_redouble(self) -> bool {
        !self.auto_doubles_on_accept()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Multiplier {
    Normal,
    Doubled,
    Redoubled,
}

impl Multiplier {
    pub fn factor(self) -> u16 {
        match self {
            Multiplier::Normal => 1,
            Multiplier::Doubled => 2,
            Multiplier::Redoubled => 4,
        }
    }
}
