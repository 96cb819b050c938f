//! `lm-core`: foundational types for the `lemin` evacuation planner.
//!
//! This crate is a dependency of every other `lm-*` crate.  It has no `lm-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `RoomId`, `AntId`                                      |
//! | [`turn`]     | `Turn`                                                 |
//! | [`config`]   | `PlanConfig`, `FleetPolicy`, heuristic constants       |
//! | [`error`]    | `LmError`, `LmResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DEFAULT_OVERLAP_TOLERANCE, FleetPolicy, PlanConfig, SMALL_FLEET_ABOVE, SMALL_FLEET_MAX,
    SMALL_FLEET_ROUTES,
};
pub use error::{LmError, LmResult};
pub use ids::{AntId, RoomId};
pub use turn::Turn;
