//! Colony-subsystem error type.

use thiserror::Error;

use lm_core::RoomId;

/// Errors produced by `lm-colony`.
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("room {0} not found in colony")]
    RoomNotFound(RoomId),

    #[error("unknown room {0:?}")]
    UnknownRoom(String),

    #[error("duplicate room name {0:?}")]
    DuplicateRoom(String),

    #[error("invalid room name {0:?}")]
    InvalidRoomName(String),

    #[error("invalid tunnel: self-link on {0:?}")]
    SelfTunnel(String),

    #[error("duplicate tunnel between {a:?} and {b:?}")]
    DuplicateTunnel { a: String, b: String },

    #[error("no start room found")]
    MissingStart,

    #[error("no end room found")]
    MissingEnd,

    #[error("start and end are the same room {0:?}")]
    StartIsEnd(String),

    #[error("no path from {start:?} to {end:?}")]
    Unreachable { start: String, end: String },

    #[error("no route from {from} to {to}")]
    NoRoute { from: RoomId, to: RoomId },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("line {line}: {source}")]
    AtLine {
        line:   usize,
        #[source]
        source: Box<ColonyError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ColonyError {
    /// Attach a 1-based input line number to this error.
    pub fn at_line(self, line: usize) -> Self {
        ColonyError::AtLine { line, source: Box::new(self) }
    }
}

pub type ColonyResult<T> = Result<T, ColonyError>;
