//! The evacuation planner: everything between a validated colony and a
//! simulator.
//!
//! [`plan`] is a pure function of its inputs.  The returned
//! [`EvacuationPlan`] carries every intermediate result, so callers can log
//! or export them without re-running any stage.

use lm_colony::{Colony, DfsEnumerator, RouteEnumerator, RouteSet, select_routes};
use lm_core::{PlanConfig, RoomId};

use crate::{Allocation, SimError, SimResult, allocate};

/// Output of the planning stages for one colony and fleet size.
#[derive(Debug, Clone)]
pub struct EvacuationPlan {
    pub units:      u32,
    pub start:      RoomId,
    pub end:        RoomId,
    /// Every route the selector accepted, best route first.
    pub route_set:  RouteSet,
    /// The prefix of `route_set` the fleet policy kept.
    pub used:       RouteSet,
    /// Turn budget and quota over `used`.
    pub allocation: Allocation,
}

/// Plan an evacuation of `units` ants using the default DFS enumerator.
pub fn plan(colony: &Colony, units: u32, config: &PlanConfig) -> SimResult<EvacuationPlan> {
    plan_with(colony, units, config, &DfsEnumerator)
}

/// Like [`plan`] with a caller-supplied route enumerator.
pub fn plan_with<E: RouteEnumerator>(
    colony:     &Colony,
    units:      u32,
    config:     &PlanConfig,
    enumerator: &E,
) -> SimResult<EvacuationPlan> {
    config.validate()?;
    if units == 0 {
        return Err(SimError::NoUnits);
    }

    let (start, end) = (colony.start(), colony.end());
    colony.check_connectivity()?;

    let routes = enumerator.enumerate(colony, start, end)?;
    let route_set = select_routes(
        &routes,
        config.max_routes.unwrap_or(usize::MAX),
        config.overlap_tolerance,
    )?;
    for (i, route) in route_set.routes().iter().enumerate() {
        log::debug!("Step Path {} : {}", i + 1, route.describe(colony));
    }

    let fleet = &config.fleet;
    if fleet.in_window(units) && route_set.len() < fleet.small_fleet_routes {
        log::warn!(
            "only {} routes available, fleet policy asks for {}",
            route_set.len(),
            fleet.small_fleet_routes,
        );
    }
    let used = route_set.truncated(fleet.routes_for(units, route_set.len()));

    let allocation = allocate(&used.lengths(), units)?;
    log::debug!(
        "using {} of {} routes for {units} ants, budget {} turns",
        used.len(),
        route_set.len(),
        allocation.turns,
    );

    Ok(EvacuationPlan { units, start, end, route_set, used, allocation })
}
