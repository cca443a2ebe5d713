//! Domain-level error type used across the rules engine.
//!
//! Rule and validation failures inside the domain layer surface as
//! `DomainError`. The orchestration boundary converts them into
//! `crate::error::EngineError` via the provided `From` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Kinds of validation failure, so callers can match without string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    OutOfTurn,
    CardNotInHand,
    CardNotPlayable,
    ActionNotAllowed,
    BidTooLow,
    ColourAlreadyAnnounced,
    NegotiationClosed,
    TrickComplete,
    OutOfRangeCut,
    MalformedDeck,
    ParseCard,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other("INVARIANT".into()), detail.into())
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
