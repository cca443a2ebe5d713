//! Random agent - makes uniformly random legal choices.
//!
//! [`RandomAgent`] is the reference implementation of the
//! [`PlayerAgent`](super::PlayerAgent) trait: thread-safe interior
//! mutability via `Mutex<StdRng>`, deterministic behavior under an optional
//! seed, and no panics. It is the baseline for tests and simulations.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AgentError, CutChoice, PlayerAgent};
use crate::domain::deck::{CUT_MAX, CUT_MIN};
use crate::domain::negotiation::NegotiationAction;
use crate::domain::player_view::{CutView, NegotiationView, TrickView};
use crate::domain::Card;

/// Agent that picks uniformly at random from every offered legal set.
pub struct RandomAgent {
    /// RNG behind a mutex: trait methods take `&self`.
    rng: Mutex<StdRng>,
}

impl RandomAgent {
    pub const NAME: &'static str = "RandomAgent";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible behavior; `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn lock_rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, AgentError> {
        self.rng
            .lock()
            .map_err(|e| AgentError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl PlayerAgent for RandomAgent {
    fn choose_cut(&self, _view: &CutView) -> Result<CutChoice, AgentError> {
        let mut rng = self.lock_rng()?;
        Ok(CutChoice {
            count: rng.random_range(CUT_MIN..=CUT_MAX),
            from_top: rng.random(),
        })
    }

    fn choose_action(
        &self,
        _view: &NegotiationView,
        legal: &[NegotiationAction],
    ) -> Result<NegotiationAction, AgentError> {
        let mut rng = self.lock_rng()?;
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AgentError::NoChoice("No legal negotiation actions offered".into()))
    }

    fn choose_card(&self, _view: &TrickView, legal: &[Card]) -> Result<Card, AgentError> {
        let mut rng = self.lock_rng()?;
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AgentError::NoChoice("No legal cards offered".into()))
    }
}
