//! Colony file loader.
//!
//! # File format
//!
//! ```text
//! 3
//! ##start
//! start 0 0
//! ##end
//! end 4 0
//! mid 2 1
//! # comments start with a single '#'
//! start-mid
//! mid-end
//! ```
//!
//! | Line kind   | Shape                                               |
//! |-------------|-----------------------------------------------------|
//! | ant count   | first line, positive integer                        |
//! | directive   | starts with `##start` / `##end`, tags the next room |
//! | room        | `name x y`, integer coordinates, no `-`             |
//! | tunnel      | `a-b`, both rooms declared earlier                  |
//! | comment     | any other line starting with `#`                    |
//!
//! Lines matching none of the above are ignored.  Every error carries the
//! 1-based line number it was found on.

use std::io::BufRead;
use std::path::Path;

use lm_core::RoomId;

use crate::{Colony, ColonyBuilder, ColonyError, ColonyResult};

/// A parsed colony description: the ant count and the validated graph.
#[derive(Debug, Clone)]
pub struct ColonyFile {
    pub ants:   u32,
    pub colony: Colony,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a colony description from a file on disk.
pub fn load_colony_file(path: &Path) -> ColonyResult<ColonyFile> {
    let file = std::fs::File::open(path)?;
    load_colony_reader(std::io::BufReader::new(file))
}

/// Like [`load_colony_file`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `&[u8]` or `std::io::Cursor`).
pub fn load_colony_reader<R: BufRead>(reader: R) -> ColonyResult<ColonyFile> {
    let mut parser = Parser::default();
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        parser.line(&line, line_no).map_err(|e| e.at_line(line_no))?;
    }

    let ants = parser.ants.ok_or_else(|| ColonyError::Parse("missing ant count".into()))?;
    let colony = parser.builder.build()?;
    log::debug!(
        "loaded colony: {} ants, {} rooms, {} tunnels, start {:?}, end {:?}",
        ants,
        colony.room_count(),
        colony.tunnel_count(),
        colony.name(colony.start()),
        colony.name(colony.end()),
    );
    Ok(ColonyFile { ants, colony })
}

// ── Line parser ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    Start,
    End,
}

#[derive(Default)]
struct Parser {
    builder:    ColonyBuilder,
    ants:       Option<u32>,
    seen_start: bool,
    seen_end:   bool,
    pending:    Vec<Pending>,
}

impl Parser {
    fn line(&mut self, line: &str, line_no: usize) -> ColonyResult<()> {
        if line_no == 1 {
            self.ants = Some(parse_ants(line)?);
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.starts_with("##start") {
            if self.seen_start {
                return Err(ColonyError::Parse("found more than one start room".into()));
            }
            self.seen_start = true;
            self.pending.push(Pending::Start);
            return Ok(());
        }
        if trimmed.starts_with("##end") {
            if self.seen_end {
                return Err(ColonyError::Parse("found more than one end room".into()));
            }
            self.seen_end = true;
            self.pending.push(Pending::End);
            return Ok(());
        }
        if trimmed.starts_with('#') {
            return Ok(());
        }

        if is_room_line(trimmed) {
            let id = self.room(trimmed)?;
            for tag in self.pending.drain(..) {
                match tag {
                    Pending::Start => self.builder.set_start(id),
                    Pending::End   => self.builder.set_end(id),
                }
            }
            return Ok(());
        }

        if is_tunnel_line(trimmed) {
            // `is_tunnel_line` guarantees exactly one '-'.
            let (a, b) = trimmed.split_once('-').unwrap_or((trimmed, ""));
            return self.builder.add_tunnel_by_name(a.trim(), b.trim());
        }

        Ok(())
    }

    fn room(&mut self, line: &str) -> ColonyResult<RoomId> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (name, x, y) = (fields[0], fields[1], fields[2]);
        let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
            return Err(ColonyError::Parse(format!("invalid coordinates for room: {line}")));
        };
        self.builder.add_room(name, x, y)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_ants(line: &str) -> ColonyResult<u32> {
    let n: i64 = line
        .trim()
        .parse()
        .map_err(|_| ColonyError::Parse(format!("number of ants must be an integer, got {line:?}")))?;
    if n <= 0 {
        return Err(ColonyError::Parse("number of ants must be > 0".into()));
    }
    u32::try_from(n).map_err(|_| ColonyError::Parse(format!("number of ants too large: {n}")))
}

fn is_room_line(line: &str) -> bool {
    line.split_whitespace().count() == 3 && !line.contains('-')
}

fn is_tunnel_line(line: &str) -> bool {
    line.matches('-').count() == 1
}
