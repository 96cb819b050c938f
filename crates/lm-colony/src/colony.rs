//! Room/tunnel graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format.  Every tunnel is
//! stored twice (once per direction), so the neighbours of `RoomId r` occupy
//! the slice:
//!
//! ```text
//! adj[ room_adj_start[r] .. room_adj_start[r+1] ]
//! ```
//!
//! Within that slice neighbours appear in tunnel declaration order.  Route
//! enumeration walks neighbours in slice order, so the declaration order of
//! the input fully determines route discovery order.

use std::collections::{HashMap, HashSet, VecDeque};

use lm_core::RoomId;

use crate::{ColonyError, ColonyResult};

// ── Room ──────────────────────────────────────────────────────────────────────

/// A named room with integer display coordinates.
///
/// Coordinates are only consumed by renderers; the planner ignores them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub name: String,
    pub x:    i64,
    pub y:    i64,
}

// ── Colony ────────────────────────────────────────────────────────────────────

/// Undirected room graph in CSR format with a designated start and end room.
///
/// Do not construct directly; use [`ColonyBuilder`].
#[derive(Debug, Clone)]
pub struct Colony {
    rooms:          Vec<Room>,
    by_name:        HashMap<String, RoomId>,
    /// CSR row pointer.  Length = `room_count + 1`.
    room_adj_start: Vec<u32>,
    adj:            Vec<RoomId>,
    start:          RoomId,
    end:            RoomId,
}

impl Colony {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of undirected tunnels.
    pub fn tunnel_count(&self) -> usize {
        self.adj.len() / 2
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn end(&self) -> RoomId {
        self.end
    }

    // ── Room lookup ───────────────────────────────────────────────────────

    /// The room behind `id`, or `None` if `id` is out of range.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// Name of `id`.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this colony.
    #[inline]
    pub fn name(&self, id: RoomId) -> &str {
        &self.rooms[id.index()].name
    }

    pub fn lookup(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// All rooms in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i as u32), r))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Rooms one tunnel away from `room`, in declaration order.
    ///
    /// A contiguous slice into the CSR array.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        let start = self.room_adj_start[room.index()] as usize;
        let end   = self.room_adj_start[room.index() + 1] as usize;
        &self.adj[start..end]
    }

    #[inline]
    pub fn degree(&self, room: RoomId) -> usize {
        self.neighbors(room).len()
    }

    /// `true` if a tunnel joins `a` and `b`.
    pub fn adjacent(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Confirm that the end room can be reached from the start room.
    ///
    /// Breadth-first search; O(rooms + tunnels).
    pub fn check_connectivity(&self) -> ColonyResult<()> {
        let mut seen  = vec![false; self.room_count()];
        let mut queue = VecDeque::from([self.start]);
        seen[self.start.index()] = true;

        while let Some(room) = queue.pop_front() {
            if room == self.end {
                return Ok(());
            }
            for &next in self.neighbors(room) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }

        Err(ColonyError::Unreachable {
            start: self.name(self.start).to_owned(),
            end:   self.name(self.end).to_owned(),
        })
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// Rooms must be added before the tunnels that reference them.  Every
/// mutation validates its input, so a successfully built colony has unique
/// room names, no self-links, no duplicate tunnels, and distinct start/end.
///
/// # Example
///
/// ```
/// use lm_colony::ColonyBuilder;
///
/// let mut b = ColonyBuilder::new();
/// let s = b.add_room("start", 0, 0).unwrap();
/// let e = b.add_room("end", 4, 0).unwrap();
/// b.add_tunnel(s, e).unwrap();
/// b.set_start(s);
/// b.set_end(e);
/// let colony = b.build().unwrap();
/// assert_eq!(colony.room_count(), 2);
/// assert_eq!(colony.tunnel_count(), 1);
/// ```
#[derive(Default)]
pub struct ColonyBuilder {
    rooms:     Vec<Room>,
    by_name:   HashMap<String, RoomId>,
    raw_edges: Vec<RawEdge>,
    tunnels:   HashSet<(RoomId, RoomId)>,
    start:     Option<RoomId>,
    end:       Option<RoomId>,
}

struct RawEdge {
    from: RoomId,
    to:   RoomId,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    ///
    /// Names must be non-empty, must not start with `L` (reserved for ant
    /// labels in the move listing) or `#`, and must not contain `-` or
    /// whitespace.
    pub fn add_room(&mut self, name: &str, x: i64, y: i64) -> ColonyResult<RoomId> {
        if !valid_room_name(name) {
            return Err(ColonyError::InvalidRoomName(name.to_owned()));
        }
        if self.by_name.contains_key(name) {
            return Err(ColonyError::DuplicateRoom(name.to_owned()));
        }
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room { name: name.to_owned(), x, y });
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Add an undirected tunnel between two existing rooms.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) -> ColonyResult<()> {
        for id in [a, b] {
            if id.index() >= self.rooms.len() {
                return Err(ColonyError::RoomNotFound(id));
            }
        }
        if a == b {
            return Err(ColonyError::SelfTunnel(self.rooms[a.index()].name.clone()));
        }
        if !self.tunnels.insert((a.min(b), a.max(b))) {
            return Err(ColonyError::DuplicateTunnel {
                a: self.rooms[a.index()].name.clone(),
                b: self.rooms[b.index()].name.clone(),
            });
        }
        self.raw_edges.push(RawEdge { from: a, to: b });
        self.raw_edges.push(RawEdge { from: b, to: a });
        Ok(())
    }

    /// Convenience: [`add_tunnel`](Self::add_tunnel) by room names.
    pub fn add_tunnel_by_name(&mut self, a: &str, b: &str) -> ColonyResult<()> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        self.add_tunnel(a, b)
    }

    pub fn set_start(&mut self, room: RoomId) {
        self.start = Some(room);
    }

    pub fn set_end(&mut self, room: RoomId) {
        self.end = Some(room);
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn tunnel_count(&self) -> usize { self.tunnels.len() }

    fn lookup(&self, name: &str) -> ColonyResult<RoomId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ColonyError::UnknownRoom(name.to_owned()))
    }

    /// Consume the builder and produce a [`Colony`].
    ///
    /// Fails if the start or end room is missing or if they coincide.
    pub fn build(self) -> ColonyResult<Colony> {
        let start = self.start.ok_or(ColonyError::MissingStart)?;
        let end   = self.end.ok_or(ColonyError::MissingEnd)?;
        for id in [start, end] {
            if id.index() >= self.rooms.len() {
                return Err(ColonyError::RoomNotFound(id));
            }
        }
        if start == end {
            return Err(ColonyError::StartIsEnd(self.rooms[start.index()].name.clone()));
        }

        let room_count = self.rooms.len();

        // Stable sort keeps each room's neighbours in declaration order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let adj: Vec<RoomId> = raw.iter().map(|e| e.to).collect();

        let mut room_adj_start = vec![0u32; room_count + 1];
        for e in &raw {
            room_adj_start[e.from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            room_adj_start[i] += room_adj_start[i - 1];
        }
        debug_assert_eq!(room_adj_start[room_count] as usize, adj.len());

        Ok(Colony {
            rooms: self.rooms,
            by_name: self.by_name,
            room_adj_start,
            adj,
            start,
            end,
        })
    }
}

fn valid_room_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('L')
        && !name.starts_with('#')
        && !name.contains('-')
        && !name.chars().any(char::is_whitespace)
}
