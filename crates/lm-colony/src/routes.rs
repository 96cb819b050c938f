//! Route type and route enumeration.
//!
//! # Pluggability
//!
//! The planner asks for routes through the [`RouteEnumerator`] trait, so an
//! application can swap in a bounded or heuristic search without touching
//! the rest of the pipeline.  The default [`DfsEnumerator`] lists every
//! simple route, which is exponential in the worst case but fine for the
//! colony sizes this tool targets (tens of rooms).

use lm_core::RoomId;

use crate::{Colony, ColonyError, ColonyResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A simple path through the colony: first room is the start, last room is
/// the end, and no room appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub rooms: Vec<RoomId>,
}

impl Route {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        debug_assert!(rooms.len() >= 2, "a route joins two distinct rooms");
        Self { rooms }
    }

    /// Number of tunnels traversed (room count − 1).
    #[inline]
    pub fn length(&self) -> usize {
        self.rooms.len() - 1
    }

    pub fn start(&self) -> RoomId {
        self.rooms[0]
    }

    pub fn end(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// The room right after the start.  Equals [`end`](Self::end) for a
    /// direct start–end tunnel.
    #[inline]
    pub fn first_hop(&self) -> RoomId {
        self.rooms[1]
    }

    /// Rooms strictly between start and end.
    pub fn interior(&self) -> &[RoomId] {
        &self.rooms[1..self.rooms.len() - 1]
    }

    /// Number of interior rooms shared with `other`.
    pub fn overlap(&self, other: &Route) -> usize {
        let theirs = other.interior();
        self.interior().iter().filter(|r| theirs.contains(r)).count()
    }

    /// Room names joined with `->`, for diagnostics.
    pub fn describe(&self, colony: &Colony) -> String {
        self.rooms
            .iter()
            .map(|&r| colony.name(r))
            .collect::<Vec<_>>()
            .join("->")
    }
}

// ── RouteEnumerator trait ─────────────────────────────────────────────────────

/// Pluggable route search.
pub trait RouteEnumerator {
    /// List routes from `from` to `to`.
    ///
    /// Returns [`ColonyError::NoRoute`] if no route exists.
    fn enumerate(&self, colony: &Colony, from: RoomId, to: RoomId) -> ColonyResult<Vec<Route>>;
}

// ── DfsEnumerator ─────────────────────────────────────────────────────────────

/// Exhaustive depth-first search over simple paths.
///
/// Rooms on the current path are marked and unmarked on backtrack, so every
/// simple route is reported exactly once.  Neighbours are visited in
/// declaration order, which makes the output order deterministic.
pub struct DfsEnumerator;

impl RouteEnumerator for DfsEnumerator {
    fn enumerate(&self, colony: &Colony, from: RoomId, to: RoomId) -> ColonyResult<Vec<Route>> {
        for id in [from, to] {
            if colony.room(id).is_none() {
                return Err(ColonyError::RoomNotFound(id));
            }
        }

        let mut search = Dfs {
            colony,
            to,
            on_path: vec![false; colony.room_count()],
            path:    Vec::new(),
            found:   Vec::new(),
        };
        search.visit(from);

        log::debug!(
            "found {} routes from {:?} to {:?}",
            search.found.len(),
            colony.name(from),
            colony.name(to),
        );

        if search.found.is_empty() {
            return Err(ColonyError::NoRoute { from, to });
        }
        Ok(search.found)
    }
}

struct Dfs<'a> {
    colony:  &'a Colony,
    to:      RoomId,
    on_path: Vec<bool>,
    path:    Vec<RoomId>,
    found:   Vec<Route>,
}

impl Dfs<'_> {
    fn visit(&mut self, room: RoomId) {
        self.on_path[room.index()] = true;
        self.path.push(room);

        if room == self.to {
            // A route never passes through the end room, so stop here.
            self.found.push(Route::new(self.path.clone()));
        } else {
            let colony = self.colony;
            for &next in colony.neighbors(room) {
                if !self.on_path[next.index()] {
                    self.visit(next);
                }
            }
        }

        self.path.pop();
        self.on_path[room.index()] = false;
    }
}
