//! Player agents - the decision interface the orchestrator consumes.
//!
//! This module provides:
//! - the `PlayerAgent` trait every strategy implements
//! - `RandomAgent`: uniformly random legal choices (seedable for tests)
//! - `Heuristic`: a deterministic rule-based baseline
//! - a static registry plus `create_agent` for name-based construction

mod config;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use config::AgentConfig;
pub use heuristic::Heuristic;
pub use random::RandomAgent;
pub use trait_def::{AgentError, CutChoice, PlayerAgent};

/// Create an agent from its registered name and a config.
///
/// Returns None if the name is unrecognized.
pub fn create_agent(name: &str, config: &AgentConfig) -> Option<Box<dyn PlayerAgent + Send + Sync>> {
    registry::by_name(name).map(|factory| (factory.make)(config.seed()))
}
