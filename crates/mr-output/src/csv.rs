//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `turn_trace.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SummaryRow, TurnRow};

/// Writes the run trace to two CSV files.
pub struct CsvWriter {
    turns: Writer<File>,
    summary: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut turns = Writer::from_path(dir.join("turn_trace.csv"))?;
        turns.write_record([
            "turn", "step_a", "step_b", "frontier_a", "frontier_b",
            "explored_a", "explored_b", "phase_a", "phase_b",
        ])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["turns", "verdict"])?;

        Ok(Self {
            turns,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_turn(&mut self, row: &TurnRow) -> OutputResult<()> {
        self.turns.write_record(&[
            row.turn.to_string(),
            row.step_a.clone(),
            row.step_b.clone(),
            row.frontier_a.to_string(),
            row.frontier_b.to_string(),
            row.explored_a.to_string(),
            row.explored_b.to_string(),
            row.phase_a.to_string(),
            row.phase_b.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary
            .write_record(&[row.turns.to_string(), row.verdict.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.turns.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
