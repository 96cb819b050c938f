//! Move events and the finished schedule.

use lm_core::{AntId, RoomId, Turn};

/// One ant stepping from one room into the next during a turn.
///
/// A freshly spawned ant moves `from` the start room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub turn: Turn,
    pub ant:  AntId,
    pub from: RoomId,
    pub to:   RoomId,
}

/// Every move of a completed run, ordered by turn and then by ant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub moves:      Vec<Move>,
    /// Number of turns in which at least one ant moved.
    pub turn_count: u64,
}

impl Schedule {
    /// Moves grouped per turn, in turn order.
    pub fn turns(&self) -> impl Iterator<Item = &[Move]> + '_ {
        self.moves.chunk_by(|a, b| a.turn == b.turn)
    }

    /// Number of moves that ended in `end`.
    pub fn arrivals(&self, end: RoomId) -> usize {
        self.moves.iter().filter(|m| m.to == end).count()
    }
}
