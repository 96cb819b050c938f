//! Plain data rows written by the CSV and JSON writers.

use lm_colony::Colony;
use lm_sim::Move;
use serde::Serialize;

/// One move with rooms resolved to their names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    pub turn: u64,
    pub ant:  u32,
    pub from: String,
    pub to:   String,
}

impl MoveRow {
    pub fn new(m: &Move, colony: &Colony) -> Self {
        Self {
            turn: m.turn.0,
            ant:  m.ant.0,
            from: colony.name(m.from).to_owned(),
            to:   colony.name(m.to).to_owned(),
        }
    }
}

/// A room and its display coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomRow {
    pub name: String,
    pub x:    i64,
    pub y:    i64,
}

/// Document written to `simulation.json` for external visualisers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationDump {
    /// Name of the start room.
    pub start: String,
    /// Rooms in declaration order.
    pub rooms: Vec<RoomRow>,
    pub moves: Vec<MoveRow>,
}

impl SimulationDump {
    /// Dump with every room of `colony` and no moves yet.
    pub fn for_colony(colony: &Colony) -> Self {
        Self {
            start: colony.name(colony.start()).to_owned(),
            rooms: colony
                .rooms()
                .map(|(_, r)| RoomRow { name: r.name.clone(), x: r.x, y: r.y })
                .collect(),
            moves: Vec::new(),
        }
    }
}
