//! Deck providers: where the orchestrator obtains each deal's deck.

use std::sync::Mutex;

use rand::prelude::*;

use crate::domain::Deck;

/// Source of full 32-card decks, swappable for deterministic testing
/// versus production randomness.
pub trait DeckProvider: Send + Sync {
    fn provide(&self) -> Deck;
}

/// Always returns the pack in standard order. Deterministic baseline for
/// tests; the cut still randomizes real play.
pub struct OrderedDeckProvider;

impl DeckProvider for OrderedDeckProvider {
    fn provide(&self) -> Deck {
        Deck::standard()
    }
}

/// Fisher-Yates shuffled decks from a seedable RNG.
pub struct ShuffledDeckProvider {
    rng: Mutex<StdRng>,
}

impl ShuffledDeckProvider {
    /// `Some(seed)` gives a reproducible deck sequence; `None` uses OS
    /// entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl DeckProvider for ShuffledDeckProvider {
    fn provide(&self) -> Deck {
        let mut cards = Deck::standard().cards().to_vec();
        if let Ok(mut rng) = self.rng.lock() {
            cards.shuffle(&mut *rng);
        }
        Deck::from_cards(cards)
    }
}
