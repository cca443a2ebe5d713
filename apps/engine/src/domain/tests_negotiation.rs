use crate::domain::negotiation::{
    Contract, NegotiationAction, NegotiationOutcome, NegotiationState,
};
use crate::domain::{GameMode, Multiplier, Seat, Team};
use crate::errors::domain::ValidationKind;

use NegotiationAction::{Accept, Announce, Double, Redouble};

// Dealer Bottom throughout: negotiation opens at Left and cycles
// Left -> Top -> Right -> Bottom.
fn open() -> NegotiationState {
    NegotiationState::new(Seat::Left)
}

fn apply_all(
    state: NegotiationState,
    actions: &[(Seat, NegotiationAction)],
) -> NegotiationState {
    actions.iter().fold(state, |s, &(seat, action)| {
        s.apply(seat, action).expect("action should be legal")
    })
}

#[test]
fn announcements_must_outbid_the_standing_bid() {
    let state = apply_all(open(), &[(Seat::Left, Announce(GameMode::Hearts))]);

    let err = state
        .apply(Seat::Top, Announce(GameMode::Diamonds))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::BidTooLow);
    let err = state
        .apply(Seat::Top, Announce(GameMode::Hearts))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::BidTooLow);

    assert!(state.apply(Seat::Top, Announce(GameMode::Spades)).is_ok());
    assert!(state.apply(Seat::Top, Announce(GameMode::AllTrumps)).is_ok());
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let state = open();
    let err = state
        .apply(Seat::Top, Announce(GameMode::Hearts))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::OutOfTurn);
}

#[test]
fn one_colour_announcement_per_team_per_deal() {
    // Left (Team Two) opens with a colour; partner Right may not bid
    // another colour, but may still bid NoTrumps or AllTrumps.
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Diamonds)),
            (Seat::Top, Accept),
        ],
    );

    let err = state
        .apply(Seat::Right, Announce(GameMode::Hearts))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ColourAlreadyAnnounced);
    assert!(state.apply(Seat::Right, Announce(GameMode::NoTrumps)).is_ok());

    // The opposing team is free to announce its own colour.
    assert!(state.apply(Seat::Right, Accept).is_ok());
    let state = apply_all(state, &[(Seat::Right, Accept)]);
    assert!(state.apply(Seat::Bottom, Announce(GameMode::Spades)).is_ok());
}

#[test]
fn three_consecutive_accepts_settle_the_bid() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Hearts)),
            (Seat::Top, Accept),
            (Seat::Right, Accept),
        ],
    );
    assert!(!state.is_complete());

    let state = apply_all(state, &[(Seat::Bottom, Accept)]);
    assert!(state.is_complete());
    assert_eq!(
        state.outcome(),
        Some(NegotiationOutcome::Contract(Contract {
            mode: GameMode::Hearts,
            multiplier: Multiplier::Normal,
            announcer: Team::Two,
        }))
    );
}

#[test]
fn an_announcement_resets_the_accept_run() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Hearts)),
            (Seat::Top, Accept),
            (Seat::Right, Accept),
            (Seat::Bottom, Announce(GameMode::Spades)),
            (Seat::Left, Accept),
            (Seat::Top, Accept),
        ],
    );
    assert!(!state.is_complete());

    let state = apply_all(state, &[(Seat::Right, Accept)]);
    assert!(state.is_complete());
    match state.outcome() {
        Some(NegotiationOutcome::Contract(c)) => {
            assert_eq!(c.mode, GameMode::Spades);
            assert_eq!(c.announcer, Team::One);
        }
        other => panic!("expected a contract, got {other:?}"),
    }
}

#[test]
fn a_seat_that_accepted_may_not_announce_later() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Accept),
            (Seat::Top, Announce(GameMode::Hearts)),
            (Seat::Right, Accept),
            (Seat::Bottom, Accept),
        ],
    );
    let err = state
        .apply(Seat::Left, Announce(GameMode::Spades))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ActionNotAllowed);
}

#[test]
fn opposing_acceptance_of_no_trumps_doubles_implicitly() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::NoTrumps)),
            (Seat::Top, Accept),
        ],
    );
    // Top sits on Team One, opposing the Team Two announcer.
    assert_eq!(state.doubled_by(GameMode::NoTrumps), Some(Team::One));

    let state = apply_all(state, &[(Seat::Right, Accept), (Seat::Bottom, Accept)]);
    assert_eq!(
        state.outcome(),
        Some(NegotiationOutcome::Contract(Contract {
            mode: GameMode::NoTrumps,
            multiplier: Multiplier::Doubled,
            announcer: Team::Two,
        }))
    );
}

#[test]
fn clubs_also_double_on_opposing_acceptance() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Clubs)),
            (Seat::Top, Accept),
        ],
    );
    assert_eq!(state.doubled_by(GameMode::Clubs), Some(Team::One));
}

#[test]
fn plain_modes_do_not_double_on_acceptance() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::AllTrumps)),
            (Seat::Top, Accept),
        ],
    );
    assert_eq!(state.doubled_by(GameMode::AllTrumps), None);
}

#[test]
fn double_requires_an_opposing_bid() {
    let state = apply_all(open(), &[(Seat::Left, Announce(GameMode::Hearts))]);

    // Right is the announcer's partner.
    let state2 = apply_all(state.clone(), &[(Seat::Top, Accept)]);
    let err = state2
        .apply(Seat::Right, Double(GameMode::Hearts))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ActionNotAllowed);

    // Top opposes the announcer and may double.
    let state = apply_all(state, &[(Seat::Top, Double(GameMode::Hearts))]);
    assert_eq!(state.doubled_by(GameMode::Hearts), Some(Team::One));

    // Doubling twice is rejected.
    let state = apply_all(state, &[(Seat::Right, Accept), (Seat::Bottom, Accept)]);
    let err = state
        .apply(Seat::Left, Double(GameMode::Hearts))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ActionNotAllowed);
}

#[test]
fn a_double_blocks_further_announcements() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Hearts)),
            (Seat::Top, Double(GameMode::Hearts)),
        ],
    );
    let err = state
        .apply(Seat::Right, Announce(GameMode::Spades))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ActionNotAllowed);
    assert!(state
        .legal_actions()
        .iter()
        .all(|a| !matches!(a, Announce(_))));
}

#[test]
fn announcing_implicitly_passes_on_earlier_opposing_bids() {
    // Left announced Hearts before Top announced Spades. Top may not go
    // back and double Hearts; Left may double Spades.
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Hearts)),
            (Seat::Top, Announce(GameMode::Spades)),
            (Seat::Right, Accept),
            (Seat::Bottom, Accept),
            (Seat::Left, Double(GameMode::Spades)),
        ],
    );
    assert_eq!(state.doubled_by(GameMode::Spades), Some(Team::Two));

    let err = state
        .apply(Seat::Top, Double(GameMode::Hearts))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ActionNotAllowed);
}

#[test]
fn redouble_rules() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Hearts)),
            (Seat::Top, Double(GameMode::Hearts)),
        ],
    );

    // Only the announcing team may redouble.
    let state_via_right = apply_all(state.clone(), &[(Seat::Right, Redouble(GameMode::Hearts))]);
    assert!(state_via_right.is_redoubled(GameMode::Hearts));

    let state_blocked = apply_all(state, &[(Seat::Right, Accept)]);
    let err = state_blocked
        .apply(Seat::Bottom, Redouble(GameMode::Hearts))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ActionNotAllowed);

    // Settle the redoubled contract: x4.
    let state = apply_all(
        state_via_right,
        &[
            (Seat::Bottom, Accept),
            (Seat::Left, Accept),
            (Seat::Top, Accept),
        ],
    );
    assert_eq!(
        state.outcome(),
        Some(NegotiationOutcome::Contract(Contract {
            mode: GameMode::Hearts,
            multiplier: Multiplier::Redoubled,
            announcer: Team::Two,
        }))
    );
}

#[test]
fn auto_doubling_modes_cannot_be_redoubled() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::NoTrumps)),
            (Seat::Top, Accept), // implicit double
        ],
    );
    let err = state
        .apply(Seat::Right, Redouble(GameMode::NoTrumps))
        .unwrap_err();
    assert_eq!(err.kind(), &ValidationKind::ActionNotAllowed);
}

#[test]
fn four_accepts_with_no_bid_close_the_negotiation() {
    let mut state = open();
    for seat in [Seat::Left, Seat::Top, Seat::Right] {
        state = state.apply(seat, Accept).unwrap();
        assert!(!state.is_complete());
        assert_eq!(state.outcome(), None);
    }
    state = state.apply(Seat::Bottom, Accept).unwrap();
    assert!(state.is_complete());
    assert_eq!(state.outcome(), Some(NegotiationOutcome::AllPassed));
}

#[test]
fn settled_negotiations_reject_further_actions() {
    let state = apply_all(
        open(),
        &[
            (Seat::Left, Announce(GameMode::Hearts)),
            (Seat::Top, Accept),
            (Seat::Right, Accept),
            (Seat::Bottom, Accept),
        ],
    );
    assert!(state.is_complete());
    assert!(state.legal_actions().is_empty());
    for seat in Seat::ALL {
        let err = state.apply(seat, Accept).unwrap_err();
        assert_eq!(err.kind(), &ValidationKind::NegotiationClosed);
    }
}

#[test]
fn legal_actions_always_include_accept_while_open() {
    let mut state = open();
    let script = [
        (Seat::Left, Announce(GameMode::Diamonds)),
        (Seat::Top, Announce(GameMode::Spades)),
        (Seat::Right, Accept),
        (Seat::Bottom, Accept),
        (Seat::Left, Double(GameMode::Spades)),
    ];
    for (seat, action) in script {
        let legal = state.legal_actions();
        assert!(legal.contains(&Accept));
        assert!(legal.contains(&action), "{action:?} should be offered");
        state = state.apply(seat, action).unwrap();
    }
}
