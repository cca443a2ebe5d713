//! Match simulator CLI - batches of full matches between built-in agents.
//!
//! Runs matches entirely in memory through the engine's orchestrator,
//! collecting per-match metrics for strategy comparison and regression
//! checks.

mod metrics;
mod output;
mod types;

use belote_engine::agents::{create_agent, AgentConfig, Heuristic, PlayerAgent, RandomAgent};
use belote_engine::domain::{MatchState, Seat, Team};
use belote_engine::flow::{MatchConfig, MatchRunner, NoContractPolicy, ShuffledDeckProvider};
use clap::{Parser, ValueEnum};
use metrics::build_match_metrics;
use output::OutputWriter;
use std::time::Instant;
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "In-memory match simulator for agent evaluation")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Agent type for all seats (shortcut to set all 4 seats at once)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AgentType>,

    /// Agent type for seat 0 (Bottom)
    #[arg(long, default_value = "heuristic")]
    seat0: AgentType,

    /// Agent type for seat 1 (Left)
    #[arg(long, default_value = "heuristic")]
    seat1: AgentType,

    /// Agent type for seat 2 (Top)
    #[arg(long, default_value = "heuristic")]
    seat2: AgentType,

    /// Agent type for seat 3 (Right)
    #[arg(long, default_value = "heuristic")]
    seat3: AgentType,

    /// Base seed for deterministic matches; match N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Match points a team needs to win a match
    #[arg(long, default_value = "151")]
    target: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
enum AgentType {
    Heuristic,
    Random,
}

impl AgentType {
    fn name(&self) -> &'static str {
        match self {
            AgentType::Heuristic => Heuristic::NAME,
            AgentType::Random => RandomAgent::NAME,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; only warnings and errors reach the console.
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_types = if let Some(all) = args.seats {
        [all.clone(), all.clone(), all.clone(), all]
    } else {
        [args.seat0, args.seat1, args.seat2, args.seat3]
    };
    let agent_names = [
        seat_types[0].name().to_string(),
        seat_types[1].name().to_string(),
        seat_types[2].name().to_string(),
        seat_types[3].name().to_string(),
    ];
    if args.show_output {
        info!(
            "Simulating {} matches: seat0={}, seat1={}, seat2={}, seat3={}",
            args.matches, agent_names[0], agent_names[1], agent_names[2], agent_names[3]
        );
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format)?;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for match_no in 1..=args.matches {
        let match_seed = base_seed.wrapping_add(match_no as u64);
        let match_start = Instant::now();

        match run_match(match_seed, &seat_types, args.target) {
            Ok(state) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    match_no,
                    match_seed,
                    agent_names.clone(),
                    args.matches,
                    &state,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_no, e);
                }
                if args.verbose {
                    info!(
                        "Match {} complete: winner={:?}, points={:?}",
                        match_no, state.winner, state.match_points
                    );
                }
                results.push(state);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_no, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.matches);
    }

    Ok(())
}

fn build_agents(
    seat_types: &[AgentType; 4],
    match_seed: u64,
) -> Result<[Box<dyn PlayerAgent>; 4], Box<dyn std::error::Error>> {
    let mut agents: Vec<Box<dyn PlayerAgent>> = Vec::with_capacity(4);
    for (i, agent_type) in seat_types.iter().enumerate() {
        let config = AgentConfig::with_seed(match_seed.wrapping_mul(4).wrapping_add(i as u64));
        let agent = create_agent(agent_type.name(), &config)
            .ok_or_else(|| format!("Unknown agent type: {}", agent_type.name()))?;
        agents.push(agent);
    }
    agents
        .try_into()
        .map_err(|_| "expected exactly four agents".into())
}

fn run_match(
    match_seed: u64,
    seat_types: &[AgentType; 4],
    target: u16,
) -> Result<MatchState, Box<dyn std::error::Error>> {
    let agents = build_agents(seat_types, match_seed)?;
    let runner = MatchRunner::new(
        agents,
        Box::new(ShuffledDeckProvider::new(Some(match_seed))),
        MatchConfig {
            target_score: target,
            no_contract_policy: NoContractPolicy::Redeal,
        },
    );
    runner.run(Seat::Bottom).map_err(|e| e.into())
}

fn print_summary(results: &[MatchState], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!("Average time per match: {:?}", elapsed / results.len() as u32);

    let mut wins = [0u32; 2];
    let mut sweep_endings = 0u32;
    let mut total_deals = 0usize;
    for state in results {
        match state.winner {
            Some(Team::One) => wins[0] += 1,
            Some(Team::Two) => wins[1] += 1,
            None => {}
        }
        if state.deals.last().is_some_and(|d| d.instant_win) {
            sweep_endings += 1;
        }
        total_deals += state.deals.len();
    }

    println!("\n=== Results by Team ===");
    for (idx, team) in ["Team 1 (Bottom+Top)", "Team 2 (Left+Right)"].iter().enumerate() {
        let win_rate = (wins[idx] as f64 / results.len() as f64) * 100.0;
        println!("{}: wins={} ({:.1}%)", team, wins[idx], win_rate);
    }
    println!(
        "Average deals per match: {:.1}",
        total_deals as f64 / results.len() as f64
    );
    if sweep_endings > 0 {
        println!("Matches ended by a colour sweep: {}", sweep_endings);
    }
}
