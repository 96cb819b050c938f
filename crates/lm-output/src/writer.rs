//! The `MoveWriter` trait implemented by all writers.

use lm_core::Turn;
use lm_sim::Move;

use crate::OutputResult;

/// Sink for the moves of a simulation run, one turn at a time.
///
/// Turns arrive in order and each batch is sorted by ascending ant identity.
pub trait MoveWriter {
    /// Write every move made during `turn`.
    fn write_turn(&mut self, turn: Turn, moves: &[Move]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: MoveWriter + ?Sized> MoveWriter for Box<W> {
    fn write_turn(&mut self, turn: Turn, moves: &[Move]) -> OutputResult<()> {
        (**self).write_turn(turn, moves)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Fan out to several writers.  Stops at the first failing writer.
impl<W: MoveWriter> MoveWriter for Vec<W> {
    fn write_turn(&mut self, turn: Turn, moves: &[Move]) -> OutputResult<()> {
        for w in self.iter_mut() {
            w.write_turn(turn, moves)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        for w in self.iter_mut() {
            w.finish()?;
        }
        Ok(())
    }
}
