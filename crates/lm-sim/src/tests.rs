//! Tests for allocation, planning, and the turn loop.

use std::collections::{HashMap, HashSet};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lm_colony::{Colony, ColonyBuilder, Route};
use lm_core::{AntId, PlanConfig};

use crate::{EvacuationPlan, Move, NoopObserver, Schedule, Simulator, TurnObserver, plan};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// First room is the start, last room is the end.
fn colony(rooms: &[&str], tunnels: &[(&str, &str)]) -> Colony {
    let mut b = ColonyBuilder::new();
    let ids: Vec<_> = rooms
        .iter()
        .enumerate()
        .map(|(i, name)| b.add_room(name, i as i64, 0).unwrap())
        .collect();
    for (a, c) in tunnels {
        b.add_tunnel_by_name(a, c).unwrap();
    }
    b.set_start(ids[0]);
    b.set_end(ids[ids.len() - 1]);
    b.build().unwrap()
}

fn diamond() -> Colony {
    colony(&["S", "A", "B", "E"], &[("S", "A"), ("A", "E"), ("S", "B"), ("B", "E")])
}

fn line() -> Colony {
    colony(&["S", "A", "B", "E"], &[("S", "A"), ("A", "B"), ("B", "E")])
}

/// `n` parallel two-tunnel routes S-a<i>-E.
fn fan(n: usize) -> Colony {
    let mut b = ColonyBuilder::new();
    let s = b.add_room("S", 0, 0).unwrap();
    let e = b.add_room("E", 2, 0).unwrap();
    for i in 0..n {
        let a = b.add_room(&format!("a{i}"), 1, i as i64).unwrap();
        b.add_tunnel(s, a).unwrap();
        b.add_tunnel(a, e).unwrap();
    }
    b.set_start(s);
    b.set_end(e);
    b.build().unwrap()
}

fn random_colony(seed: u64) -> Colony {
    let mut rng = SmallRng::seed_from_u64(seed);
    let n: i64 = rng.gen_range(5..=10);
    let mut b = ColonyBuilder::new();
    let ids: Vec<_> = (0..n).map(|i| b.add_room(&format!("r{i}"), i, 0).unwrap()).collect();
    for i in 0..ids.len() {
        for j in i + 1..ids.len() {
            if rng.gen_bool(0.35) {
                b.add_tunnel(ids[i], ids[j]).unwrap();
            }
        }
    }
    b.set_start(ids[0]);
    b.set_end(ids[ids.len() - 1]);
    b.build().unwrap()
}

fn route(c: &Colony, names: &[&str]) -> Route {
    Route::new(names.iter().map(|n| c.lookup(n).unwrap()).collect())
}

fn run(c: &Colony, units: u32) -> (EvacuationPlan, Schedule) {
    let p = plan(c, units, &PlanConfig::default()).unwrap();
    let s = Simulator::from_plan(&p).unwrap().run(&mut NoopObserver).unwrap();
    (p, s)
}

/// One `L<ant>-<room>` line per turn.
fn render(c: &Colony, s: &Schedule) -> Vec<String> {
    s.turns()
        .map(|moves| {
            moves
                .iter()
                .map(|m| format!("L{}-{}", m.ant.0, c.name(m.to)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Replay `s` against `c` and assert every movement rule: moves start where
/// the ant stands, follow tunnels, never enter one interior room twice in a
/// turn, and deliver the whole fleet.
fn check_schedule(c: &Colony, units: u32, s: &Schedule) {
    let mut at: HashMap<AntId, lm_core::RoomId> = HashMap::new();
    let mut arrived = 0u32;

    for (i, moves) in s.turns().enumerate() {
        let turn = moves[0].turn;
        assert_eq!(turn.0, i as u64 + 1, "turns are contiguous from 1");
        assert!(moves.windows(2).all(|w| w[0].ant < w[1].ant), "ascending ants within a turn");

        let mut entered = HashSet::new();
        for m in moves {
            assert_eq!(m.turn, turn);
            let from = at.get(&m.ant).copied().unwrap_or(c.start());
            assert_eq!(m.from, from, "{:?} moves from where it stands", m.ant);
            assert!(c.adjacent(m.from, m.to), "moves follow tunnels");
            if m.to != c.end() {
                assert!(entered.insert(m.to), "room {} entered twice in {turn}", c.name(m.to));
            }
            if m.to == c.end() {
                at.remove(&m.ant);
                arrived += 1;
            } else {
                at.insert(m.ant, m.to);
            }
        }
    }

    assert!(at.is_empty(), "every ant arrives");
    assert_eq!(arrived, units);
    assert_eq!(s.arrivals(c.end()), units as usize);
    assert_eq!(s.turns().count() as u64, s.turn_count);
}

// ── Allocation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocation_tests {
    use crate::{SimError, allocate, capacity_for_turns};

    use super::*;

    #[test]
    fn single_route_takes_every_ant() {
        let a = allocate(&[1], 5).unwrap();
        assert_eq!(a.turns, 6);
        assert_eq!(a.quota, [5]);

        let a = allocate(&[3], 3).unwrap();
        assert_eq!(a.turns, 6);
        assert_eq!(a.quota, [3]);
    }

    #[test]
    fn two_equal_routes_split_evenly() {
        let a = allocate(&[2, 2], 2).unwrap();
        assert_eq!(a.turns, 3);
        assert_eq!(a.quota, [1, 1]);
    }

    #[test]
    fn surplus_trimmed_from_longest_route() {
        // Budget 5 gives [3, 2, 1] = 6 for 5 ants; budget 4 gives only 3.
        let a = allocate(&[2, 3, 4], 5).unwrap();
        assert_eq!(a.turns, 5);
        assert_eq!(a.quota, [3, 2, 0]);
        assert_eq!(capacity_for_turns(&[2, 3, 4], 4), 3);
    }

    #[test]
    fn long_route_gets_nothing_for_small_fleet() {
        let a = allocate(&[2, 9], 3).unwrap();
        assert_eq!(a.quota, [3, 0]);
        assert_eq!(a.turns, 5);
    }

    #[test]
    fn empty_lengths_and_zero_units_are_errors() {
        assert!(matches!(allocate(&[], 3), Err(SimError::NoRoutes)));
        assert!(matches!(allocate(&[2], 0), Err(SimError::NoUnits)));
    }

    #[test]
    fn random_allocations_are_exact_and_minimal() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let k = rng.gen_range(1..=6);
            let mut lengths: Vec<usize> = (0..k).map(|_| rng.gen_range(1..=12)).collect();
            lengths.sort_unstable();
            let units: u32 = rng.gen_range(1..=200);

            let a = allocate(&lengths, units).unwrap();
            assert_eq!(a.total(), units as u64, "{lengths:?} / {units}");
            assert!(capacity_for_turns(&lengths, a.turns) >= units as u64);
            assert!(capacity_for_turns(&lengths, a.turns - 1) < units as u64, "not minimal");
            for (q, &len) in a.quota.iter().zip(&lengths) {
                assert!(*q as u64 <= a.turns.saturating_sub(len as u64));
            }
        }
    }
}

// ── Turn simulation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use crate::SimError;

    use super::*;

    #[test]
    fn diamond_two_ants_two_turns() {
        let c = diamond();
        let (p, s) = run(&c, 2);
        assert_eq!(p.used.len(), 2);
        assert_eq!(s.turn_count, 2);
        assert_eq!(render(&c, &s), ["L1-A L2-B", "L1-E L2-E"]);
        check_schedule(&c, 2, &s);
    }

    #[test]
    fn single_path_drains_in_order() {
        let c = line();
        let (p, s) = run(&c, 3);
        assert_eq!(p.allocation.turns, 6);
        assert_eq!(s.turn_count, 5);
        assert_eq!(
            render(&c, &s),
            ["L1-A", "L1-B L2-A", "L1-E L2-B L3-A", "L2-E L3-B", "L3-E"],
        );
        assert_eq!(s.arrivals(c.end()), 3);
        check_schedule(&c, 3, &s);
    }

    #[test]
    fn direct_tunnel_delivers_one_ant_per_turn() {
        let c = colony(&["S", "E"], &[("S", "E")]);
        let (_, s) = run(&c, 3);
        assert_eq!(render(&c, &s), ["L1-E", "L2-E", "L3-E"]);
        assert!(s.moves.iter().all(|m| m.from == c.start()));
    }

    #[test]
    fn spawn_moves_start_from_start_room() {
        let c = diamond();
        let (_, s) = run(&c, 2);
        let first: Vec<&Move> = s.moves.iter().filter(|m| m.turn.0 == 1).collect();
        assert!(first.iter().all(|m| m.from == c.start()));
    }

    #[test]
    fn disjoint_routes_finish_in_budget_minus_one() {
        let c = fan(5);
        for units in [1, 2, 3, 5, 7, 12, 40] {
            let (p, s) = run(&c, units);
            assert_eq!(s.turn_count, p.allocation.turns - 1, "units = {units}");
            check_schedule(&c, units, &s);
        }
    }

    #[test]
    fn shared_room_goes_to_later_listed_ant() {
        // Two routes share room m.  Ant 2 is visited first and takes it.
        let c = colony(
            &["S", "a", "b", "m", "E"],
            &[("S", "a"), ("a", "m"), ("S", "b"), ("b", "m"), ("m", "E")],
        );
        let routes = vec![route(&c, &["S", "a", "m", "E"]), route(&c, &["S", "b", "m", "E"])];
        let s = Simulator::new(routes, vec![1, 1]).unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(render(&c, &s), ["L1-a L2-b", "L2-m", "L1-m L2-E", "L1-E"]);
        check_schedule(&c, 2, &s);
    }

    #[test]
    fn vacated_room_is_reused_in_the_same_turn() {
        // In turn 3 ant 2 enters m in the same turn ant 1 leaves it.
        let c = colony(
            &["S", "a", "b", "c", "m", "x", "y", "E"],
            &[
                ("S", "a"), ("a", "m"), ("m", "x"), ("x", "y"), ("y", "E"),
                ("S", "b"), ("b", "c"), ("c", "m"), ("m", "E"),
            ],
        );
        let routes = vec![
            route(&c, &["S", "a", "m", "x", "y", "E"]),
            route(&c, &["S", "b", "c", "m", "E"]),
        ];
        let s = Simulator::new(routes, vec![1, 2]).unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(
            render(&c, &s),
            [
                "L1-a L2-b",
                "L1-m L2-c L3-b",
                "L1-x L2-m L3-c",
                "L1-y L2-E L3-m",
                "L1-E L3-E",
            ],
        );
        assert_eq!(s.turn_count, 5);
        check_schedule(&c, 3, &s);
    }

    #[test]
    fn zero_quota_route_stays_empty() {
        let c = diamond();
        let routes = vec![route(&c, &["S", "A", "E"]), route(&c, &["S", "B", "E"])];
        let s = Simulator::new(routes, vec![3, 0]).unwrap().run(&mut NoopObserver).unwrap();
        let b = c.lookup("B").unwrap();
        assert!(s.moves.iter().all(|m| m.to != b));
        check_schedule(&c, 3, &s);
    }

    #[test]
    fn crossing_routes_swap_rooms() {
        let c = colony(
            &["S", "a", "b", "E"],
            &[("S", "a"), ("S", "b"), ("a", "b"), ("a", "E"), ("b", "E")],
        );
        let routes = vec![route(&c, &["S", "a", "b", "E"]), route(&c, &["S", "b", "a", "E"])];
        let s = Simulator::new(routes, vec![1, 1]).unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(render(&c, &s), ["L1-a L2-b", "L1-b L2-a", "L1-E L2-E"]);
        check_schedule(&c, 2, &s);
    }

    #[test]
    fn overlapping_routes_end_to_end() {
        // Selected routes S-x-E, S-a-m-E and S-b-m-E; the last two share m.
        let c = colony(
            &["S", "x", "a", "b", "m", "E"],
            &[("S", "x"), ("x", "E"), ("S", "a"), ("a", "m"), ("S", "b"), ("b", "m"), ("m", "E")],
        );
        let (p, s) = run(&c, 7);
        assert_eq!(p.used.lengths(), [2, 3, 3]);
        assert_eq!(p.allocation.turns, 5);
        assert_eq!(p.allocation.quota, [3, 2, 2]);
        assert_eq!(
            render(&c, &s),
            [
                "L1-x L2-a L3-b",
                "L1-E L3-m L4-x L5-b",
                "L3-E L4-E L5-m L6-x",
                "L2-m L5-E L6-E L7-a",
                "L2-E L7-m",
                "L7-E",
            ],
        );
        check_schedule(&c, 7, &s);
    }

    #[test]
    fn constructor_validates_inputs() {
        let c = diamond();
        assert!(matches!(Simulator::new(vec![], vec![]), Err(SimError::NoRoutes)));
        assert!(matches!(
            Simulator::new(vec![route(&c, &["S", "A", "E"])], vec![1, 2]),
            Err(SimError::QuotaMismatch { expected: 1, got: 2 })
        ));
        assert!(matches!(
            Simulator::new(vec![route(&c, &["S", "A", "E"]), route(&c, &["S", "A"])], vec![1, 1]),
            Err(SimError::MismatchedRoute { index: 1 })
        ));
    }

    #[test]
    fn observer_sees_every_productive_turn() {
        #[derive(Default)]
        struct Recorder {
            turns: Vec<(u64, usize)>,
            ended: Option<u64>,
        }
        impl TurnObserver for Recorder {
            fn on_turn_end(&mut self, turn: lm_core::Turn, moves: &[Move]) {
                self.turns.push((turn.0, moves.len()));
            }
            fn on_sim_end(&mut self, turn_count: u64) {
                self.ended = Some(turn_count);
            }
        }

        let c = line();
        let p = plan(&c, 3, &PlanConfig::default()).unwrap();
        let mut rec = Recorder::default();
        Simulator::from_plan(&p).unwrap().run(&mut rec).unwrap();
        assert_eq!(rec.turns, [(1, 1), (2, 2), (3, 3), (4, 2), (5, 1)]);
        assert_eq!(rec.ended, Some(5));
    }

    #[test]
    fn random_runs_obey_movement_rules() {
        for seed in 0..40 {
            let c = random_colony(seed);
            if c.check_connectivity().is_err() {
                continue;
            }
            for units in [1, 2, 4, 5, 7, 15] {
                let (p, s) = run(&c, units);
                check_schedule(&c, units, &s);
                assert!(s.turn_count + 1 >= p.allocation.turns, "seed {seed}: beat the budget");
            }
        }
    }

    #[test]
    fn reruns_are_identical() {
        for seed in 0..20 {
            let c = random_colony(seed);
            if c.check_connectivity().is_err() {
                continue;
            }
            let (_, a) = run(&c, 9);
            let (_, b) = run(&c, 9);
            assert_eq!(a, b, "seed {seed}");
        }
    }
}

// ── Planning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_tests {
    use lm_colony::ColonyError;

    use crate::SimError;

    use super::*;

    #[test]
    fn small_fleet_uses_three_routes() {
        let c = fan(5);
        for units in 4..=6 {
            let p = plan(&c, units, &PlanConfig::default()).unwrap();
            assert_eq!(p.route_set.len(), 5);
            assert_eq!(p.used.len(), 3, "units = {units}");
        }
    }

    #[test]
    fn other_fleets_use_every_route() {
        let c = fan(5);
        for units in [1, 2, 3, 7, 30] {
            let p = plan(&c, units, &PlanConfig::default()).unwrap();
            assert_eq!(p.used.len(), 5, "units = {units}");
            assert_eq!(p.allocation.total(), units as u64);
        }
    }

    #[test]
    fn small_fleet_clamped_to_available_routes() {
        let p = plan(&diamond(), 5, &PlanConfig::default()).unwrap();
        assert_eq!(p.used.len(), 2);
        assert_eq!(p.allocation.quota.iter().sum::<u32>(), 5);
    }

    #[test]
    fn allocation_example_for_five_ants_on_fan() {
        let p = plan(&fan(5), 5, &PlanConfig::default()).unwrap();
        assert_eq!(p.allocation.turns, 4);
        assert_eq!(p.allocation.quota, [2, 2, 1]);
    }

    #[test]
    fn max_routes_caps_selection() {
        let config = PlanConfig { max_routes: Some(2), ..PlanConfig::default() };
        let p = plan(&fan(5), 30, &config).unwrap();
        assert_eq!(p.route_set.len(), 2);
        assert_eq!(p.used.len(), 2);
    }

    #[test]
    fn unreachable_end_is_reported() {
        let c = colony(&["S", "A", "B", "E"], &[("S", "A"), ("B", "E")]);
        assert!(matches!(
            plan(&c, 3, &PlanConfig::default()),
            Err(SimError::Colony(ColonyError::Unreachable { .. }))
        ));
    }

    #[test]
    fn zero_ants_and_bad_config_are_rejected() {
        assert!(matches!(plan(&diamond(), 0, &PlanConfig::default()), Err(SimError::NoUnits)));
        let bad = PlanConfig { max_routes: Some(0), ..PlanConfig::default() };
        assert!(matches!(plan(&diamond(), 2, &bad), Err(SimError::Config(_))));
    }

    #[test]
    fn plan_records_endpoints() {
        let c = diamond();
        let p = plan(&c, 2, &PlanConfig::default()).unwrap();
        assert_eq!(p.start, c.start());
        assert_eq!(p.end, c.end());
        assert_eq!(p.used.best(), p.route_set.best());
    }
}
