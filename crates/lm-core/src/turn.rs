//! Discrete turn counter.
//!
//! Turns are numbered from 1: the first turn in which ants can move is
//! `Turn(1)`.  `Turn::ZERO` is the state before anything has happened.

use std::fmt;

/// A simulation turn number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {}", self.0)
    }
}
