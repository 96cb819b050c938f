//! Planning configuration.
//!
//! The route selector and the fleet policy are driven by two fixed heuristic
//! constants.  They live here as named values and a run can override them
//! from a JSON file.
//!
//! # Defaults
//!
//! | Setting                     | Default | Meaning                                    |
//! |-----------------------------|---------|--------------------------------------------|
//! | `overlap_tolerance`         | 1       | shared interior rooms allowed per route    |
//! | `max_routes`                | `None`  | no cap on accepted routes                  |
//! | `fleet.small_fleet_above`   | 3       | small-fleet window is `(3, 6]` ants        |
//! | `fleet.small_fleet_max`     | 6       |                                            |
//! | `fleet.small_fleet_routes`  | 3       | routes used inside the window              |

use crate::{LmError, LmResult};

/// Interior rooms a candidate route may share with already accepted routes.
pub const DEFAULT_OVERLAP_TOLERANCE: usize = 1;

/// Fleets strictly larger than this (and at most [`SMALL_FLEET_MAX`]) use
/// only [`SMALL_FLEET_ROUTES`] routes.
pub const SMALL_FLEET_ABOVE: u32 = 3;

/// Inclusive upper bound of the small-fleet window.
pub const SMALL_FLEET_MAX: u32 = 6;

/// Routes used for a fleet inside the small-fleet window.
pub const SMALL_FLEET_ROUTES: usize = 3;

// ── FleetPolicy ───────────────────────────────────────────────────────────────

/// How many of the selected routes a fleet of a given size actually uses.
///
/// This is an empirical rule with no derivation behind it: fleets in
/// `(small_fleet_above, small_fleet_max]` use `small_fleet_routes` routes,
/// every other fleet uses all selected routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct FleetPolicy {
    pub small_fleet_above:  u32,
    pub small_fleet_max:    u32,
    pub small_fleet_routes: usize,
}

impl FleetPolicy {
    /// `true` if a fleet of `units` ants falls in the small-fleet window.
    pub fn in_window(&self, units: u32) -> bool {
        units > self.small_fleet_above && units <= self.small_fleet_max
    }

    /// Number of routes to use for `units` ants when `available` routes were
    /// selected.  Never exceeds `available`.
    pub fn routes_for(&self, units: u32, available: usize) -> usize {
        if self.in_window(units) {
            self.small_fleet_routes.min(available)
        } else {
            available
        }
    }
}

impl Default for FleetPolicy {
    fn default() -> Self {
        Self {
            small_fleet_above:  SMALL_FLEET_ABOVE,
            small_fleet_max:    SMALL_FLEET_MAX,
            small_fleet_routes: SMALL_FLEET_ROUTES,
        }
    }
}

// ── PlanConfig ────────────────────────────────────────────────────────────────

/// Top-level planner configuration.
///
/// Typically built with `PlanConfig::default()` and adjusted from command
/// line flags, or loaded from a JSON file by the application crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct PlanConfig {
    /// Interior rooms a candidate may share with previously accepted routes.
    /// 0 demands strictly room-disjoint routes.
    pub overlap_tolerance: usize,

    /// Cap on the number of routes the selector accepts (best route
    /// included).  `None` accepts as many as the graph allows.
    pub max_routes: Option<usize>,

    /// Route-count rule applied after selection.
    pub fleet: FleetPolicy,
}

impl PlanConfig {
    /// Reject settings that would leave the planner with no route to use.
    pub fn validate(&self) -> LmResult<()> {
        if self.max_routes == Some(0) {
            return Err(LmError::Config("max_routes must be at least 1".into()));
        }
        if self.fleet.small_fleet_routes == 0 {
            return Err(LmError::Config("fleet.small_fleet_routes must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            overlap_tolerance: DEFAULT_OVERLAP_TOLERANCE,
            max_routes:        None,
            fleet:             FleetPolicy::default(),
        }
    }
}
