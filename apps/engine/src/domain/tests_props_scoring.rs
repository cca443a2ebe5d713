use proptest::prelude::*;

use crate::domain::scoring::score_deal;
use crate::domain::test_gens;
use crate::domain::{GameMode, ModeCategory};

proptest! {
    /// On every non-sweep outcome the two match-point shares total either
    /// the full stake (base x multiplier) or nothing at all (a tie).
    #[test]
    fn match_points_total_the_stake_or_nothing(
        mode in test_gens::mode(),
        multiplier in test_gens::multiplier(),
        announcer in test_gens::team(),
        announcer_points in 0u16..=258,
    ) {
        prop_assume!(announcer_points <= mode.total_points());
        let defender_points = mode.total_points() - announcer_points;
        let mut card_points = [0u16; 2];
        card_points[announcer.index()] = announcer_points;
        card_points[announcer.opponent().index()] = defender_points;

        let result = score_deal(mode, multiplier, announcer, card_points, None);
        let total: u16 = result.match_points.iter().sum();
        let stake = mode.base_match_points() * multiplier.factor();
        prop_assert!(total == stake || total == 0, "total {total} is neither {stake} nor 0");
        prop_assert!(!result.instant_win);
    }

    /// Swapping the announcing team mirrors the result exactly.
    #[test]
    fn scoring_is_symmetric_by_team(
        mode in test_gens::mode(),
        multiplier in test_gens::multiplier(),
        announcer_points in 0u16..=258,
    ) {
        use crate::domain::Team;

        prop_assume!(announcer_points <= mode.total_points());
        let defender_points = mode.total_points() - announcer_points;

        let one = score_deal(
            mode,
            multiplier,
            Team::One,
            [announcer_points, defender_points],
            None,
        );
        let two = score_deal(
            mode,
            multiplier,
            Team::Two,
            [defender_points, announcer_points],
            None,
        );
        prop_assert_eq!(one.match_points[0], two.match_points[1]);
        prop_assert_eq!(one.match_points[1], two.match_points[0]);
    }

    /// Sweeps: instant win in Colour, bonus x multiplier elsewhere.
    #[test]
    fn sweep_awards_follow_the_category(
        mode in test_gens::mode(),
        multiplier in test_gens::multiplier(),
        announcer in test_gens::team(),
        sweeper in test_gens::team(),
    ) {
        let mut card_points = [0u16; 2];
        card_points[sweeper.index()] = mode.total_points();

        let result = score_deal(mode, multiplier, announcer, card_points, Some(sweeper));
        match mode.category() {
            ModeCategory::Colour => {
                prop_assert!(result.instant_win);
                prop_assert_eq!(result.match_points, [0, 0]);
                prop_assert_eq!(result.sweep, Some(sweeper));
            }
            ModeCategory::NoTrumps | ModeCategory::AllTrumps => {
                prop_assert!(!result.instant_win);
                let bonus = mode.sweep_bonus().expect("plain categories pay a bonus");
                prop_assert_eq!(
                    result.match_points[sweeper.index()],
                    bonus * multiplier.factor()
                );
                prop_assert_eq!(result.match_points[sweeper.opponent().index()], 0);
            }
        }
    }

    /// A winner-takes-all mode pays the base to whichever side crossed its
    /// threshold.
    #[test]
    fn winner_takes_all_respects_the_threshold(
        mode in prop_oneof![
            Just(GameMode::Clubs),
            Just(GameMode::Diamonds),
            Just(GameMode::Hearts),
            Just(GameMode::Spades),
            Just(GameMode::NoTrumps),
        ],
        multiplier in test_gens::multiplier(),
        announcer in test_gens::team(),
        announcer_points in 0u16..=162,
    ) {
        prop_assume!(announcer_points <= mode.total_points());
        let defender_points = mode.total_points() - announcer_points;
        prop_assume!(announcer_points != defender_points);
        let mut card_points = [0u16; 2];
        card_points[announcer.index()] = announcer_points;
        card_points[announcer.opponent().index()] = defender_points;

        let result = score_deal(mode, multiplier, announcer, card_points, None);
        let stake = mode.base_match_points() * multiplier.factor();
        if announcer_points >= mode.win_threshold() {
            prop_assert_eq!(result.match_points[announcer.index()], stake);
        } else {
            prop_assert_eq!(result.match_points[announcer.opponent().index()], stake);
        }
    }
}
