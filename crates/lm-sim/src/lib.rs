//! `lm-sim`: allocation, planning, and the turn loop for the lemin planner.
//!
//! # Pipeline
//!
//! ```text
//! plan(colony, units, config):
//!   ① Connectivity: end must be reachable from start.
//!   ② Enumerate   : every simple route (RouteEnumerator).
//!   ③ Select      : near-disjoint RouteSet led by the shortest route.
//!   ④ Fleet policy: how many of the selected routes this fleet uses.
//!   ⑤ Allocate    : minimal turn budget and per-route quota.
//!
//! Simulator::run(observer):
//!   for each turn until a turn produces no moves:
//!     advance: back of the transit list first, one room each if free
//!     spawn  : one ant per route with quota left, if its first room is free
//!     report : moves in ascending ant order → TurnObserver
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | Uses FxHash for the per-turn occupancy set.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lm_core::PlanConfig;
//! use lm_sim::{NoopObserver, Simulator, plan};
//!
//! let plan = plan(&colony, ants, &PlanConfig::default())?;
//! let schedule = Simulator::from_plan(&plan)?.run(&mut NoopObserver)?;
//! ```

pub mod allocate;
pub mod error;
pub mod moves;
pub mod observer;
pub mod plan;
pub mod sim;

#[cfg(test)]
mod tests;

pub use allocate::{Allocation, allocate, capacity_for_turns};
pub use error::{SimError, SimResult};
pub use moves::{Move, Schedule};
pub use observer::{NoopObserver, TurnObserver};
pub use plan::{EvacuationPlan, plan, plan_with};
pub use sim::Simulator;
