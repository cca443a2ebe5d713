use thiserror::Error;

use crate::agents::AgentError;
use crate::domain::Seat;
use crate::errors::domain::DomainError;

/// Fatal errors surfaced by the match orchestrator.
///
/// Two classes per the engine's error model: precondition/rule failures
/// (wrapped `DomainError`) and agent protocol violations. Neither is
/// recoverable mid-match; graceful degradation belongs to the caller, which
/// may wrap a decision call and substitute a synthesized-but-legal response.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("domain rule violation: {0}")]
    Domain(#[from] DomainError),

    #[error("agent protocol violation at seat {seat:?}: {detail}")]
    Protocol { seat: Seat, detail: String },

    #[error("agent failure at seat {seat:?} during {phase}: {source}")]
    Agent {
        seat: Seat,
        phase: &'static str,
        #[source]
        source: AgentError,
    },

    #[error("match abandoned: {detail}")]
    Abandoned { detail: String },

    #[error("internal error: {detail}")]
    Internal { detail: String },
}

impl EngineError {
    pub fn protocol(seat: Seat, detail: impl Into<String>) -> Self {
        Self::Protocol {
            seat,
            detail: detail.into(),
        }
    }

    pub fn agent(seat: Seat, phase: &'static str, source: AgentError) -> Self {
        Self::Agent {
            seat,
            phase,
            source,
        }
    }

    pub fn abandoned(detail: impl Into<String>) -> Self {
        Self::Abandoned {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}
