//! `lm-output`: move writers for the lemin planner.
//!
//! | Writer           | Output                                                  |
//! |------------------|---------------------------------------------------------|
//! | `TextWriter`     | one `L<ant>-<room>` line per turn to any `io::Write`    |
//! | `CsvWriter`      | `moves.csv` in a directory                              |
//! | `JsonDumpWriter` | `simulation.json`, the colony plus every move           |
//!
//! All writers implement [`MoveWriter`] and are driven by
//! [`MoveLogObserver`], which implements `lm_sim::TurnObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lm_output::{MoveLogObserver, TextWriter};
//!
//! let mut obs = MoveLogObserver::new(TextWriter::new(std::io::stdout(), &colony));
//! simulator.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonDumpWriter;
pub use observer::MoveLogObserver;
pub use row::{MoveRow, RoomRow, SimulationDump};
pub use text::{TextWriter, format_turn};
pub use writer::MoveWriter;
