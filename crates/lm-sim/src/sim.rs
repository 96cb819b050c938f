//! The `Simulator` and its turn loop.

use lm_colony::Route;
use lm_core::{AntId, RoomId, Turn};

use crate::{EvacuationPlan, Move, Schedule, SimError, SimResult, TurnObserver};

#[cfg(feature = "fx-hash")]
type RoomSet = rustc_hash::FxHashSet<RoomId>;
#[cfg(not(feature = "fx-hash"))]
type RoomSet = std::collections::HashSet<RoomId>;

// ── Ant ───────────────────────────────────────────────────────────────────────

/// An ant between spawn and arrival.  Arrived ants are dropped.
#[derive(Debug, Clone, Copy)]
struct Ant {
    id:    AntId,
    /// Index into `Simulator::routes`.
    route: usize,
    /// Index of the ant's current room on its route; at least 1.
    pos:   usize,
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Moves ants down their assigned routes one room per turn.
///
/// Interior rooms take at most one arriving ant per turn; the start and end
/// rooms hold any number.  Each turn starts with an empty occupancy set and
/// runs two phases:
///
/// 1. **Advance**: ants in transit are visited from the back of the transit
///    list to the front.  Each vacates its room and steps into the next one
///    if that room is the end room, or is neither reserved nor already
///    entered this turn; otherwise it stays and re-reserves its room.
///    Survivors are re-listed in visit order.
/// 2. **Spawn**: in route order, every route with quota left releases one
///    new ant into its first room under the same rule.  New ants are
///    appended to the transit list.
///
/// The run ends with the first turn in which nothing moves.  The first ant
/// visited in a turn always finds its next room free, so that turn is only
/// reached once the whole fleet has arrived.
///
/// Create via [`Simulator::new`] or [`Simulator::from_plan`].
#[derive(Debug, Clone)]
pub struct Simulator {
    routes: Vec<Route>,
    quota:  Vec<u32>,
    start:  RoomId,
    end:    RoomId,
}

impl Simulator {
    /// Validate inputs and return a ready-to-run simulator.
    ///
    /// All routes must share the same start and end rooms, and `quota` must
    /// hold one entry per route.
    pub fn new(routes: Vec<Route>, quota: Vec<u32>) -> SimResult<Self> {
        let Some(first) = routes.first() else {
            return Err(SimError::NoRoutes);
        };
        if quota.len() != routes.len() {
            return Err(SimError::QuotaMismatch { expected: routes.len(), got: quota.len() });
        }
        let (start, end) = (first.start(), first.end());
        if let Some(index) = routes.iter().position(|r| r.start() != start || r.end() != end) {
            return Err(SimError::MismatchedRoute { index });
        }
        Ok(Self { routes, quota, start, end })
    }

    /// Simulator for the routes and quota chosen by [`plan`][crate::plan].
    pub fn from_plan(plan: &EvacuationPlan) -> SimResult<Self> {
        Self::new(plan.used.routes().to_vec(), plan.allocation.quota.clone())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn quota(&self) -> &[u32] {
        &self.quota
    }

    /// Run until a turn produces no moves.
    pub fn run<O: TurnObserver>(&self, observer: &mut O) -> SimResult<Schedule> {
        let fleet: u64 = self.quota.iter().map(|&q| q as u64).sum();

        let mut in_transit: Vec<Ant> = Vec::new();
        let mut spawned            = vec![0u32; self.routes.len()];
        let mut next_ant           = AntId::FIRST;
        let mut arrived: u64       = 0;
        let mut schedule           = Schedule::default();
        let mut turn               = Turn::ZERO;

        loop {
            let now = turn.next();
            let mut turn_moves: Vec<Move> = Vec::new();

            // Rooms reserved this turn.  An ant only keeps its room by
            // failing to leave it.
            let mut occupied = RoomSet::default();
            // Rooms entered this turn.  Never released, so no interior room
            // is entered twice in one turn.
            let mut entered = RoomSet::default();

            // ── Phase 1: advance ──────────────────────────────────────────
            let mut staying: Vec<Ant> = Vec::with_capacity(in_transit.len());
            for mut ant in in_transit.drain(..).rev() {
                let rooms = &self.routes[ant.route].rooms;
                let here  = rooms[ant.pos];
                // Ants in transit never stand on the end room, so a next
                // room always exists.
                let there = rooms[ant.pos + 1];

                occupied.remove(&here);
                if self.can_enter(there, &occupied, &entered) {
                    turn_moves.push(Move { turn: now, ant: ant.id, from: here, to: there });
                    ant.pos += 1;
                    if there == self.end {
                        arrived += 1;
                    } else {
                        occupied.insert(there);
                        entered.insert(there);
                        staying.push(ant);
                    }
                } else {
                    occupied.insert(here);
                    staying.push(ant);
                }
            }
            in_transit = staying;

            // ── Phase 2: spawn ────────────────────────────────────────────
            for (i, route) in self.routes.iter().enumerate() {
                let first = route.first_hop();
                if spawned[i] >= self.quota[i] || !self.can_enter(first, &occupied, &entered) {
                    continue;
                }

                spawned[i] += 1;
                turn_moves.push(Move { turn: now, ant: next_ant, from: self.start, to: first });
                if first == self.end {
                    arrived += 1;
                } else {
                    occupied.insert(first);
                    entered.insert(first);
                    in_transit.push(Ant { id: next_ant, route: i, pos: 1 });
                }
                next_ant = next_ant.next();
            }

            // ── Phase 3: report ───────────────────────────────────────────
            if turn_moves.is_empty() {
                break;
            }

            turn_moves.sort_by_key(|m| m.ant);
            observer.on_turn_end(now, &turn_moves);
            schedule.moves.extend(turn_moves);
            turn = now;
        }
        debug_assert_eq!(arrived, fleet);

        schedule.turn_count = turn.0;
        observer.on_sim_end(schedule.turn_count);
        log::debug!("Total number of turns: {}", schedule.turn_count);
        Ok(schedule)
    }

    #[inline]
    fn can_enter(&self, room: RoomId, occupied: &RoomSet, entered: &RoomSet) -> bool {
        room == self.end || !(occupied.contains(&room) || entered.contains(&room))
    }
}
