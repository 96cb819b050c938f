//! `MoveLogObserver<W>`: bridges `TurnObserver` to a `MoveWriter`.

use lm_core::Turn;
use lm_sim::{Move, TurnObserver};

use crate::writer::MoveWriter;
use crate::{OutputError, OutputResult};

/// A [`TurnObserver`] that forwards every turn to a [`MoveWriter`].
///
/// Errors from the writer are stored internally because `TurnObserver`
/// methods have no return value.  After `run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct MoveLogObserver<W: MoveWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: MoveWriter> MoveLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: MoveWriter> TurnObserver for MoveLogObserver<W> {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move]) {
        let result = self.writer.write_turn(turn, moves);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _turn_count: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
