//! `lm-colony`: the room/tunnel graph and everything that reads routes off it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`colony`]  | `Colony` (CSR adjacency), `ColonyBuilder`, `Room`           |
//! | [`loader`]  | `load_colony_file`, `load_colony_reader`, `ColonyFile`      |
//! | [`routes`]  | `Route`, `RouteEnumerator` trait, `DfsEnumerator`           |
//! | [`select`]  | `RouteSet`, `select_routes`                                 |
//! | [`error`]   | `ColonyError`, `ColonyResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod colony;
pub mod error;
pub mod loader;
pub mod routes;
pub mod select;


pub use colony::{Colony, ColonyBuilder, Room};
pub use error::{ColonyError, ColonyResult};
pub use loader::{ColonyFile, load_colony_file, load_colony_reader};
pub use routes::{DfsEnumerator, Route, RouteEnumerator};
pub use select::{RouteSet, select_routes};
