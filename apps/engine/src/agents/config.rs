//! Agent configuration handling.
//!
//! Typed interface over a JSON agent configuration: the standard `seed`
//! field is extracted, anything else is preserved for agent-specific use.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for player agents.
///
/// `seed` makes seedable agents reproducible (tests, replays, debugging);
/// unrecognized fields stay available through [`AgentConfig::get_custom`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Optional RNG seed for deterministic agent behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Agent-specific configuration fields preserved verbatim.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AgentConfig {
    /// Extract standard fields from an optional JSON value, preserving the
    /// rest. `None` (or malformed JSON) yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Get a custom configuration field by key.
    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::empty()
    }
}
