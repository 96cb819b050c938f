//! JSON simulation dump for external visualisers.
//!
//! Moves are buffered in memory and the whole document is written, pretty
//! printed, on [`finish`][MoveWriter::finish].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use lm_colony::Colony;
use lm_core::Turn;
use lm_sim::Move;

use crate::writer::MoveWriter;
use crate::{MoveRow, OutputResult, SimulationDump};

pub struct JsonDumpWriter<'c> {
    path:   PathBuf,
    /// `None` once the dump has been written.
    file:   Option<BufWriter<File>>,
    colony: &'c Colony,
    dump:   SimulationDump,
}

impl<'c> JsonDumpWriter<'c> {
    /// Create (or truncate) `path` now so a bad path fails before the run.
    pub fn new(path: &Path, colony: &'c Colony) -> OutputResult<Self> {
        let file = BufWriter::new(File::create(path)?);
        Ok(Self {
            path: path.to_owned(),
            file: Some(file),
            colony,
            dump: SimulationDump::for_colony(colony),
        })
    }
}

impl MoveWriter for JsonDumpWriter<'_> {
    fn write_turn(&mut self, _turn: Turn, moves: &[Move]) -> OutputResult<()> {
        self.dump.moves.extend(moves.iter().map(|m| MoveRow::new(m, self.colony)));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        let Some(mut file) = self.file.take() else {
            return Ok(());
        };
        serde_json::to_writer_pretty(&mut file, &self.dump)?;
        file.write_all(b"\n")?;
        file.flush()?;
        log::debug!("wrote {} moves to {}", self.dump.moves.len(), self.path.display());
        Ok(())
    }
}
