//! Plain-text move listing.

use std::io::Write;

use lm_colony::Colony;
use lm_core::Turn;
use lm_sim::Move;

use crate::{MoveWriter, OutputResult};

/// Render one turn as `L<ant>-<room>` tokens separated by single spaces.
pub fn format_turn(colony: &Colony, moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| format!("L{}-{}", m.ant.0, colony.name(m.to)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes one line per turn to `out`.
pub struct TextWriter<'c, W: Write> {
    out:    W,
    colony: &'c Colony,
}

impl<'c, W: Write> TextWriter<'c, W> {
    pub fn new(out: W, colony: &'c Colony) -> Self {
        Self { out, colony }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MoveWriter for TextWriter<'_, W> {
    fn write_turn(&mut self, _turn: Turn, moves: &[Move]) -> OutputResult<()> {
        writeln!(self.out, "{}", format_turn(self.colony, moves))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
