//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Per-match JSONL plus the summary CSV.
    Jsonl,
    /// Summary CSV only.
    Summary,
}
