use crate::domain::scoring::score_deal;
use crate::domain::{GameMode, Multiplier, Team};

#[test]
fn all_trumps_rounded_split() {
    // 199 vs 59 rounds to 20-6 and scales with the multiplier.
    let cases = [
        (Multiplier::Normal, [20, 6]),
        (Multiplier::Doubled, [40, 12]),
        (Multiplier::Redoubled, [80, 24]),
    ];
    for (multiplier, expected) in cases {
        let result = score_deal(GameMode::AllTrumps, multiplier, Team::One, [199, 59], None);
        assert_eq!(result.match_points, expected);
        assert!(!result.instant_win);
    }
}

#[test]
fn all_trumps_is_symmetric_by_team() {
    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Normal,
        Team::Two,
        [59, 199],
        None,
    );
    assert_eq!(result.match_points, [6, 20]);
}

#[test]
fn all_trumps_equal_rounded_tens_score_nothing() {
    // 131 vs 127 both round to 13 tens despite the raw-point lead.
    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Normal,
        Team::One,
        [131, 127],
        None,
    );
    assert_eq!(result.match_points, [0, 0]);

    // The exact even split scores nothing either.
    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Doubled,
        Team::One,
        [129, 129],
        None,
    );
    assert_eq!(result.match_points, [0, 0]);
}

#[test]
fn all_trumps_failed_announcer_concedes_the_base() {
    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Normal,
        Team::One,
        [100, 158],
        None,
    );
    assert_eq!(result.match_points, [0, 26]);

    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Doubled,
        Team::Two,
        [158, 100],
        None,
    );
    assert_eq!(result.match_points, [52, 0]);
}

#[test]
fn all_trumps_crushed_defender_concedes_the_base() {
    // Defender below 55 raw points rounds under 6 tens: announcer takes 26.
    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Normal,
        Team::One,
        [210, 48],
        None,
    );
    assert_eq!(result.match_points, [26, 0]);
}

#[test]
fn all_trumps_hanging_point_goes_to_the_announcer() {
    // 134 vs 124 rounds to 13 + 12 = 25 tens; the missing point lands on
    // the announcing side so the shares still total 26.
    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Normal,
        Team::One,
        [134, 124],
        None,
    );
    assert_eq!(result.match_points, [14, 12]);
}

#[test]
fn no_trumps_is_winner_takes_all() {
    let result = score_deal(
        GameMode::NoTrumps,
        Multiplier::Normal,
        Team::One,
        [70, 60],
        None,
    );
    assert_eq!(result.match_points, [52, 0]);

    let result = score_deal(
        GameMode::NoTrumps,
        Multiplier::Normal,
        Team::One,
        [60, 70],
        None,
    );
    assert_eq!(result.match_points, [0, 52]);

    let result = score_deal(
        GameMode::NoTrumps,
        Multiplier::Doubled,
        Team::Two,
        [60, 70],
        None,
    );
    assert_eq!(result.match_points, [0, 104]);
}

#[test]
fn equal_points_tie_scores_nothing() {
    let result = score_deal(
        GameMode::NoTrumps,
        Multiplier::Doubled,
        Team::One,
        [65, 65],
        None,
    );
    assert_eq!(result.match_points, [0, 0]);

    let result = score_deal(
        GameMode::Hearts,
        Multiplier::Normal,
        Team::Two,
        [81, 81],
        None,
    );
    assert_eq!(result.match_points, [0, 0]);
}

#[test]
fn colour_thresholds_and_bases() {
    // 82 is exactly enough for the announcer.
    let result = score_deal(
        GameMode::Hearts,
        Multiplier::Normal,
        Team::One,
        [82, 80],
        None,
    );
    assert_eq!(result.match_points, [16, 0]);

    let result = score_deal(
        GameMode::Hearts,
        Multiplier::Normal,
        Team::One,
        [80, 82],
        None,
    );
    assert_eq!(result.match_points, [0, 16]);

    // Clubs carry the doubled base.
    let result = score_deal(
        GameMode::Clubs,
        Multiplier::Normal,
        Team::Two,
        [62, 100],
        None,
    );
    assert_eq!(result.match_points, [0, 32]);
}

#[test]
fn colour_sweep_is_an_instant_match_win() {
    let result = score_deal(
        GameMode::Spades,
        Multiplier::Doubled,
        Team::One,
        [162, 0],
        Some(Team::One),
    );
    assert!(result.instant_win);
    assert_eq!(result.sweep, Some(Team::One));
    assert_eq!(result.match_points, [0, 0]);
}

#[test]
fn no_trumps_sweep_pays_the_bonus() {
    let result = score_deal(
        GameMode::NoTrumps,
        Multiplier::Normal,
        Team::One,
        [130, 0],
        Some(Team::One),
    );
    assert!(!result.instant_win);
    assert_eq!(result.match_points, [90, 0]);

    let result = score_deal(
        GameMode::NoTrumps,
        Multiplier::Doubled,
        Team::One,
        [130, 0],
        Some(Team::One),
    );
    assert_eq!(result.match_points, [180, 0]);
}

#[test]
fn all_trumps_sweep_pays_the_bonus_to_either_team() {
    // The defenders can sweep too; the award follows the sweeping team.
    let result = score_deal(
        GameMode::AllTrumps,
        Multiplier::Normal,
        Team::One,
        [0, 258],
        Some(Team::Two),
    );
    assert!(!result.instant_win);
    assert_eq!(result.match_points, [0, 45]);
}
