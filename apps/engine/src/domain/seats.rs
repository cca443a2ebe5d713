//! Seats, teams, and clockwise turn rotation.
//!
//! The table is a fixed clockwise cycle Bottom → Left → Top → Right. Team
//! One sits Bottom + Top, Team Two sits Left + Right. These helpers are the
//! single source of truth for "who acts next" across negotiation, trick
//! play, and the match loop.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Seat {
    Bottom,
    Left,
    Top,
    Right,
}

impl Seat {
    /// All seats in clockwise order starting from Bottom.
    pub const ALL: [Seat; 4] = [Seat::Bottom, Seat::Left, Seat::Top, Seat::Right];

    /// Stable 0..=3 index, clockwise from Bottom.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Seat::Bottom => 0,
            Seat::Left => 1,
            Seat::Top => 2,
            Seat::Right => 3,
        }
    }

    /// Next seat clockwise (Bottom → Left → Top → Right → Bottom).
    #[inline]
    pub fn next(self) -> Seat {
        Seat::ALL[(self.index() + 1) % 4]
    }

    /// Previous seat, i.e. the neighbour to this seat's right.
    #[inline]
    pub fn prev(self) -> Seat {
        Seat::ALL[(self.index() + 3) % 4]
    }

    /// The seat `n` steps clockwise from this one.
    #[inline]
    pub fn nth_next(self, n: usize) -> Seat {
        Seat::ALL[(self.index() + n) % 4]
    }

    /// Teammate across the table.
    #[inline]
    pub fn partner(self) -> Seat {
        self.nth_next(2)
    }

    #[inline]
    pub fn team(self) -> Team {
        match self {
            Seat::Bottom | Seat::Top => Team::One,
            Seat::Left | Seat::Right => Team::Two,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::One, Team::Two];

    /// Stable 0..=1 index for per-team arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::One => [Seat::Bottom, Seat::Top],
            Team::Two => [Seat::Left, Seat::Right],
        }
    }
}
