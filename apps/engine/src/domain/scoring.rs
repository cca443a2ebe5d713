//! Deal scoring: converting each team's card points into match points.

use serde::Serialize;

use super::modes::{GameMode, ModeCategory, Multiplier};
use super::seats::Team;

/// Outcome of one scored deal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DealResult {
    pub mode: GameMode,
    pub multiplier: Multiplier,
    pub announcer: Team,
    /// Raw card points per team (Team One at index 0).
    pub card_points: [u16; 2],
    /// Match points per team after thresholds, rounding, and multiplier.
    pub match_points: [u16; 2],
    /// Team that won all eight tricks, if any.
    pub sweep: Option<Team>,
    /// A Colour sweep ends the match at once, bypassing the target score.
    pub instant_win: bool,
}

/// Round card points to tens, ties away from zero (125 → 13).
fn round_tens(points: u16) -> u16 {
    (points + 5) / 10
}

/// Score a finished deal.
///
/// `sweep` names the team that took all eight tricks, if any. Results are
/// symmetric by team: only the announcer's threshold arithmetic depends on
/// who announced.
pub fn score_deal(
    mode: GameMode,
    multiplier: Multiplier,
    announcer: Team,
    card_points: [u16; 2],
    sweep: Option<Team>,
) -> DealResult {
    let factor = multiplier.factor();
    let mut match_points = [0u16; 2];
    let mut instant_win = false;

    if let Some(team) = sweep {
        match mode.sweep_bonus() {
            // Colour: the sweep wins the match outright, no point award.
            None => instant_win = true,
            Some(bonus) => match_points[team.index()] = bonus * factor,
        }
    } else {
        let a = card_points[announcer.index()];
        let d = card_points[announcer.opponent().index()];
        let (a_mp, d_mp) = match mode.category() {
            ModeCategory::AllTrumps => score_all_trumps(mode, a, d),
            ModeCategory::NoTrumps | ModeCategory::Colour => {
                score_winner_takes_all(mode, a, d)
            }
        };
        match_points[announcer.index()] = a_mp * factor;
        match_points[announcer.opponent().index()] = d_mp * factor;
    }

    DealResult {
        mode,
        multiplier,
        announcer,
        card_points,
        match_points,
        sweep,
        instant_win,
    }
}

/// AllTrumps splits the 26 base match points by rounded tens.
fn score_all_trumps(mode: GameMode, announcer: u16, defender: u16) -> (u16, u16) {
    let base = mode.base_match_points();
    if announcer < mode.win_threshold() {
        return (0, base);
    }
    let a_rounded = round_tens(announcer);
    let d_rounded = round_tens(defender);
    // Equal rounded tens (including the exact 129-129 split) score nothing.
    if a_rounded == d_rounded {
        return (0, 0);
    }
    // A defender below 6 rounded tens (raw < 55) concedes the whole base.
    if d_rounded < 6 {
        return (base, 0);
    }
    // The hanging rounding point goes to the announcing side, so the two
    // shares always total the base.
    let d_mp = d_rounded.max(6);
    (base - d_mp, d_mp)
}

/// NoTrumps and Colour are winner-takes-all at the mode's threshold.
fn score_winner_takes_all(mode: GameMode, announcer: u16, defender: u16) -> (u16, u16) {
    if announcer == defender {
        return (0, 0);
    }
    let base = mode.base_match_points();
    if announcer >= mode.win_threshold() {
        (base, 0)
    } else {
        (0, base)
    }
}
