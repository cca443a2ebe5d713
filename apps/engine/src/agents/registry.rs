//! How to register your agent
//!
//! 1) Implement `PlayerAgent` for your type in its module.
//! 2) Add an `AgentFactory` entry to the static list with stable `name` and
//!    `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use crate::agents::{Heuristic, PlayerAgent, RandomAgent};

/// Factory definition for constructing agent implementations.
pub struct AgentFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn PlayerAgent + Send + Sync>,
}

static AGENT_FACTORIES: &[AgentFactory] = &[
    AgentFactory {
        name: RandomAgent::NAME,
        version: RandomAgent::VERSION,
        make: make_random_agent,
    },
    AgentFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
];

/// Returns the statically registered agent factories.
pub fn registered_agents() -> &'static [AgentFactory] {
    AGENT_FACTORIES
}

/// Finds a registered agent factory by its name.
pub fn by_name(name: &str) -> Option<&'static AgentFactory> {
    registered_agents()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_random_agent(seed: Option<u64>) -> Box<dyn PlayerAgent + Send + Sync> {
    Box::new(RandomAgent::new(seed))
}

fn make_heuristic(seed: Option<u64>) -> Box<dyn PlayerAgent + Send + Sync> {
    Box::new(Heuristic::new(seed))
}
