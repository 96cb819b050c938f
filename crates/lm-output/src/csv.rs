//! CSV move log.
//!
//! Creates `moves.csv` in the configured output directory with one row per
//! move: `turn,ant,from,to`, rooms by name.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use lm_colony::Colony;
use lm_core::Turn;
use lm_sim::Move;

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputResult};

pub struct CsvWriter<'c> {
    moves:    Writer<File>,
    colony:   &'c Colony,
    finished: bool,
}

impl<'c> CsvWriter<'c> {
    /// Create `moves.csv` in `dir` and write the header row.
    pub fn new(dir: &Path, colony: &'c Colony) -> OutputResult<Self> {
        let mut moves = Writer::from_path(dir.join("moves.csv"))?;
        moves.write_record(["turn", "ant", "from", "to"])?;
        Ok(Self { moves, colony, finished: false })
    }
}

impl MoveWriter for CsvWriter<'_> {
    fn write_turn(&mut self, _turn: Turn, moves: &[Move]) -> OutputResult<()> {
        for m in moves {
            let row = MoveRow::new(m, self.colony);
            self.moves.write_record(&[
                row.turn.to_string(),
                row.ant.to_string(),
                row.from,
                row.to,
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
