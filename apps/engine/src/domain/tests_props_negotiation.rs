use proptest::prelude::*;

use crate::domain::negotiation::{NegotiationAction, NegotiationState};
use crate::domain::test_gens;
use crate::domain::{GameMode, ModeCategory, Team};

proptest! {
    /// Drive a negotiation with arbitrary picks from the offered legal
    /// sets: it stays total (some action is always offered), the announced
    /// modes strictly increase, each team announces at most one colour, and
    /// the walk terminates well within the action bound.
    #[test]
    fn random_legal_walks_uphold_the_bidding_laws(
        first in test_gens::seat(),
        picks in proptest::collection::vec(any::<u16>(), 64),
    ) {
        let mut state = NegotiationState::new(first);
        let mut announced: Vec<GameMode> = Vec::new();
        let mut colours_by_team = [0u8, 0u8];

        for &pick in &picks {
            if state.is_complete() {
                break;
            }
            let legal = state.legal_actions();
            prop_assert!(!legal.is_empty(), "open negotiation offers no actions");
            let action = legal[pick as usize % legal.len()];
            let who = state.turn();
            state = state.apply(who, action).expect("offered action must apply");

            if let NegotiationAction::Announce(mode) = action {
                if let Some(&last) = announced.last() {
                    prop_assert!(mode > last, "bids must strictly increase");
                }
                announced.push(mode);
                if mode.category() == ModeCategory::Colour {
                    colours_by_team[who.team().index()] += 1;
                }
            }
        }

        prop_assert!(state.is_complete(), "64 actions must settle any negotiation");
        prop_assert!(colours_by_team[Team::One.index()] <= 1);
        prop_assert!(colours_by_team[Team::Two.index()] <= 1);
    }

    /// The settled multiplier reflects the recorded doubles of the winning
    /// mode only.
    #[test]
    fn settled_multiplier_matches_the_double_record(
        first in test_gens::seat(),
        picks in proptest::collection::vec(any::<u16>(), 64),
    ) {
        use crate::domain::negotiation::NegotiationOutcome;
        use crate::domain::Multiplier;

        let mut state = NegotiationState::new(first);
        for &pick in &picks {
            if state.is_complete() {
                break;
            }
            let legal = state.legal_actions();
            let action = legal[pick as usize % legal.len()];
            state = state.apply(state.turn(), action).expect("offered action must apply");
        }
        prop_assume!(state.is_complete());

        if let Some(NegotiationOutcome::Contract(contract)) = state.outcome() {
            let expected = if state.is_redoubled(contract.mode) {
                Multiplier::Redoubled
            } else if state.doubled_by(contract.mode).is_some() {
                Multiplier::Doubled
            } else {
                Multiplier::Normal
            };
            prop_assert_eq!(contract.multiplier, expected);
        }
    }
}
