//! Domain layer: pure game law — types, transitions, and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod modes;
pub mod negotiation;
pub mod player_view;
pub mod scoring;
pub mod seats;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_negotiation;
#[cfg(test)]
mod tests_props_negotiation;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, card_points, hand_has_suit, suit_is_trump, LAST_TRICK_BONUS};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use deck::{Deck, CUT_MAX, CUT_MIN, DECK_SIZE};
pub use modes::{GameMode, ModeCategory, Multiplier};
pub use negotiation::{Contract, NegotiationAction, NegotiationOutcome, NegotiationState};
pub use player_view::{CutView, DealStartView, MatchSummary, NegotiationView, TrickView};
pub use scoring::{score_deal, DealResult};
pub use seats::{Seat, Team};
pub use state::{CompletedTrick, DealState, MatchState, TRICKS_PER_DEAL};
pub use tricks::{is_valid_play, legal_plays, TrickState};
