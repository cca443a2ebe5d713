//! Negotiation (bidding) state machine.
//!
//! Four action kinds — Announce, Accept, Double, Redouble — each validated
//! and applied independently. Every transition returns a fresh snapshot;
//! a settled state refuses further actions.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::modes::{GameMode, ModeCategory, Multiplier};
use super::seats::{Seat, Team};
use crate::errors::domain::{DomainError, ValidationKind};

/// Consecutive accepts that settle a standing bid.
const ACCEPTS_TO_SETTLE: u8 = 3;
/// Consecutive accepts that close a negotiation nobody bid in.
const ACCEPTS_TO_THROW_IN: u8 = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NegotiationAction {
    Announce(GameMode),
    Accept,
    Double(GameMode),
    Redouble(GameMode),
}

/// The settled (mode, multiplier, announcer) triple governing a deal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub mode: GameMode,
    pub multiplier: Multiplier,
    pub announcer: Team,
}

/// How a completed negotiation ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NegotiationOutcome {
    /// A bid stood and three consecutive accepts settled it.
    Contract(Contract),
    /// All four seats accepted with no bid standing.
    AllPassed,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct NegotiationState {
    turn: Seat,
    history: Vec<(Seat, NegotiationAction)>,
    current_bid: Option<(Seat, GameMode)>,
    /// Mode → team that doubled it (explicitly or via acceptance).
    doubled: BTreeMap<GameMode, Team>,
    redoubled: BTreeSet<GameMode>,
    /// Colour mode already announced by each team this deal, if any.
    colour_announced: [Option<GameMode>; 2],
    /// Seats that have accepted at least once.
    accepted: [bool; 4],
    consecutive_accepts: u8,
    /// Set once an explicit Double is played; blocks further announcing.
    explicit_double: bool,
    complete: bool,
}

impl NegotiationState {
    /// Fresh negotiation, opening at the seat clockwise of the dealer.
    pub fn new(first: Seat) -> Self {
        Self {
            turn: first,
            history: Vec::new(),
            current_bid: None,
            doubled: BTreeMap::new(),
            redoubled: BTreeSet::new(),
            colour_announced: [None, None],
            accepted: [false; 4],
            consecutive_accepts: 0,
            explicit_double: false,
            complete: false,
        }
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn history(&self) -> &[(Seat, NegotiationAction)] {
        &self.history
    }

    pub fn current_bid(&self) -> Option<(Seat, GameMode)> {
        self.current_bid
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn doubled_by(&self, mode: GameMode) -> Option<Team> {
        self.doubled.get(&mode).copied()
    }

    pub fn is_redoubled(&self, mode: GameMode) -> bool {
        self.redoubled.contains(&mode)
    }

    /// The outcome of a completed negotiation; None while still open.
    pub fn outcome(&self) -> Option<NegotiationOutcome> {
        if !self.complete {
            return None;
        }
        match self.current_bid {
            None => Some(NegotiationOutcome::AllPassed),
            Some((bidder, mode)) => {
                let multiplier = if self.redoubled.contains(&mode) {
                    Multiplier::Redoubled
                } else if self.doubled.contains_key(&mode) {
                    Multiplier::Doubled
                } else {
                    Multiplier::Normal
                };
                Some(NegotiationOutcome::Contract(Contract {
                    mode,
                    multiplier,
                    announcer: bidder.team(),
                }))
            }
        }
    }

    /// History position of the announcement of `mode`, if it was announced.
    fn announcement_index(&self, mode: GameMode) -> Option<usize> {
        self.history
            .iter()
            .position(|&(_, a)| a == NegotiationAction::Announce(mode))
    }

    /// History position of the seat's own first announcement, if any.
    fn first_announcement_by(&self, who: Seat) -> Option<usize> {
        self.history
            .iter()
            .position(|&(s, a)| s == who && matches!(a, NegotiationAction::Announce(_)))
    }

    fn announcer_of(&self, mode: GameMode) -> Option<Seat> {
        self.announcement_index(mode).map(|i| self.history[i].0)
    }

    /// Validate `action` for `who` without applying it.
    pub fn validate(&self, who: Seat, action: NegotiationAction) -> Result<(), DomainError> {
        if self.complete {
            return Err(DomainError::validation(
                ValidationKind::NegotiationClosed,
                "Negotiation already settled",
            ));
        }
        if who != self.turn {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "Out of turn",
            ));
        }
        match action {
            NegotiationAction::Announce(mode) => self.validate_announce(who, mode),
            NegotiationAction::Accept => Ok(()),
            NegotiationAction::Double(mode) => self.validate_double(who, mode),
            NegotiationAction::Redouble(mode) => self.validate_redouble(who, mode),
        }
    }

    fn validate_announce(&self, who: Seat, mode: GameMode) -> Result<(), DomainError> {
        if self.explicit_double {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                "Announcing is closed once a double has been played",
            ));
        }
        if self.accepted[who.index()] {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                "Seat already accepted this negotiation",
            ));
        }
        if let Some((_, bid)) = self.current_bid {
            if mode <= bid {
                return Err(DomainError::validation(
                    ValidationKind::BidTooLow,
                    format!("{mode:?} does not outbid {bid:?}"),
                ));
            }
        }
        if mode.category() == ModeCategory::Colour
            && self.colour_announced[who.team().index()].is_some()
        {
            return Err(DomainError::validation(
                ValidationKind::ColourAlreadyAnnounced,
                "Team already announced a colour this deal",
            ));
        }
        Ok(())
    }

    fn validate_double(&self, who: Seat, mode: GameMode) -> Result<(), DomainError> {
        if self.current_bid.is_none() {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                "No bid standing to double",
            ));
        }
        let Some(announced_at) = self.announcement_index(mode) else {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                format!("{mode:?} was never announced"),
            ));
        };
        let announcer = self.history[announced_at].0;
        if announcer.team() == who.team() {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                "Cannot double own side's bid",
            ));
        }
        if self.doubled.contains_key(&mode) {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                format!("{mode:?} is already doubled"),
            ));
        }
        // Announcing implicitly passes on every opposing bid made earlier.
        if let Some(own_first) = self.first_announcement_by(who) {
            if announced_at < own_first {
                return Err(DomainError::validation(
                    ValidationKind::ActionNotAllowed,
                    "Bid predates the seat's own announcement",
                ));
            }
        }
        Ok(())
    }

    fn validate_redouble(&self, who: Seat, mode: GameMode) -> Result<(), DomainError> {
        if !self.doubled.contains_key(&mode) {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                format!("{mode:?} is not doubled"),
            ));
        }
        if self.redoubled.contains(&mode) {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                format!("{mode:?} is already redoubled"),
            ));
        }
        if !mode.allows_redouble() {
            return Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                format!("{mode:?} cannot be redoubled"),
            ));
        }
        match self.announcer_of(mode) {
            Some(announcer) if announcer.team() == who.team() => Ok(()),
            _ => Err(DomainError::validation(
                ValidationKind::ActionNotAllowed,
                "Only the announcing team may redouble",
            )),
        }
    }

    /// Validate and apply `action`, returning the next snapshot.
    pub fn apply(&self, who: Seat, action: NegotiationAction) -> Result<Self, DomainError> {
        self.validate(who, action)?;
        let mut next = self.clone();
        match action {
            NegotiationAction::Announce(mode) => {
                next.current_bid = Some((who, mode));
                if mode.category() == ModeCategory::Colour {
                    next.colour_announced[who.team().index()] = Some(mode);
                }
                next.consecutive_accepts = 0;
            }
            NegotiationAction::Accept => {
                next.accepted[who.index()] = true;
                next.consecutive_accepts += 1;
                if let Some((bidder, mode)) = self.current_bid {
                    // Opposing acceptance of an auto-doubling mode is an
                    // implicit double; no separate action required.
                    if mode.auto_doubles_on_accept()
                        && who.team() != bidder.team()
                        && !next.doubled.contains_key(&mode)
                    {
                        next.doubled.insert(mode, who.team());
                    }
                    if next.consecutive_accepts >= ACCEPTS_TO_SETTLE {
                        next.complete = true;
                    }
                } else if next.consecutive_accepts >= ACCEPTS_TO_THROW_IN {
                    next.complete = true;
                }
            }
            NegotiationAction::Double(mode) => {
                next.doubled.insert(mode, who.team());
                next.explicit_double = true;
                next.consecutive_accepts = 0;
            }
            NegotiationAction::Redouble(mode) => {
                next.redoubled.insert(mode);
                next.consecutive_accepts = 0;
            }
        }
        next.history.push((who, action));
        if !next.complete {
            next.turn = who.next();
        }
        Ok(next)
    }

    /// Every action the seat on turn may legally take right now.
    ///
    /// Non-empty for every open state: Accept is always available.
    pub fn legal_actions(&self) -> Vec<NegotiationAction> {
        if self.complete {
            return Vec::new();
        }
        let who = self.turn;
        let mut actions = Vec::new();
        for mode in GameMode::ALL {
            let a = NegotiationAction::Announce(mode);
            if self.validate(who, a).is_ok() {
                actions.push(a);
            }
        }
        actions.push(NegotiationAction::Accept);
        for mode in GameMode::ALL {
            let a = NegotiationAction::Double(mode);
            if self.validate(who, a).is_ok() {
                actions.push(a);
            }
        }
        for mode in GameMode::ALL {
            let a = NegotiationAction::Redouble(mode);
            if self.validate(who, a).is_ok() {
                actions.push(a);
            }
        }
        actions
    }
}
