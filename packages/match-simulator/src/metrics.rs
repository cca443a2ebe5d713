//! Metrics collection for simulated matches.

use std::collections::BTreeMap;

use belote_engine::domain::{MatchState, Team};
use serde::Serialize;

/// Complete metrics for one simulated match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_no: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchSetup,
    pub result: MatchResultMetrics,
    /// Settled contracts by mode, over all scored deals.
    pub contracts: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSetup {
    pub agent_types: [String; 4],
    pub target_score: u16,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub winner: String,
    pub match_points: [u16; 2],
    pub deals_played: usize,
    pub ended_by_sweep: bool,
    pub duration_ms: f64,
}

/// Flat row for the summary CSV.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_no: u32,
    pub seed: u64,
    pub winner: String,
    pub team1_points: u16,
    pub team2_points: u16,
    pub deals: usize,
    pub seat0_agent: String,
    pub seat1_agent: String,
    pub seat2_agent: String,
    pub seat3_agent: String,
}

pub fn team_label(team: Option<Team>) -> String {
    match team {
        Some(Team::One) => "team1".to_string(),
        Some(Team::Two) => "team2".to_string(),
        None => "none".to_string(),
    }
}

/// Build metrics from a finished match.
pub fn build_match_metrics(
    match_no: u32,
    seed: u64,
    agent_types: [String; 4],
    total_matches: u32,
    state: &MatchState,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let mut contracts: BTreeMap<String, u32> = BTreeMap::new();
    for deal in &state.deals {
        *contracts.entry(format!("{:?}", deal.mode)).or_insert(0) += 1;
    }
    let ended_by_sweep = state.deals.last().is_some_and(|d| d.instant_win);

    MatchMetrics {
        match_no,
        seed,
        timestamp,
        config: MatchSetup {
            agent_types,
            target_score: state.target_score,
            total_matches,
        },
        result: MatchResultMetrics {
            winner: team_label(state.winner),
            match_points: state.match_points,
            deals_played: state.deals.len(),
            ended_by_sweep,
            duration_ms,
        },
        contracts,
    }
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(m: &MatchMetrics) -> Self {
        Self {
            match_no: m.match_no,
            seed: m.seed,
            winner: m.result.winner.clone(),
            team1_points: m.result.match_points[0],
            team2_points: m.result.match_points[1],
            deals: m.result.deals_played,
            seat0_agent: m.config.agent_types[0].clone(),
            seat1_agent: m.config.agent_types[1].clone(),
            seat2_agent: m.config.agent_types[2].clone(),
            seat3_agent: m.config.agent_types[3].clone(),
        }
    }
}
