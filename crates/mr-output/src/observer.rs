//! `TraceObserver<W>` — bridges `TurnObserver` to an `OutputWriter`.

use mr_core::{Direction, Turn};
use mr_explore::Agent;
use mr_sim::{RunReport, TurnObserver};

use crate::row::{SummaryRow, TurnRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`TurnObserver`] that records every turn and the final verdict to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn step_label(step: Option<Direction>) -> String {
    match step {
        Some(dir) => dir.as_str().to_string(),
        None => "pass".to_string(),
    }
}

impl<W: OutputWriter> TurnObserver for TraceObserver<W> {
    fn on_turn_end(&mut self, turn: Turn, steps: [Option<Direction>; 2], agents: &[Agent; 2]) {
        let row = TurnRow {
            turn: turn.0,
            step_a: step_label(steps[0]),
            step_b: step_label(steps[1]),
            frontier_a: agents[0].map.frontier(),
            frontier_b: agents[1].map.frontier(),
            explored_a: agents[0].map.explored(),
            explored_b: agents[1].map.explored(),
            phase_a: agents[0].phase.as_str(),
            phase_b: agents[1].phase.as_str(),
        };
        let result = self.writer.write_turn(&row);
        self.store_err(result);
    }

    fn on_report(&mut self, report: &RunReport) {
        let summary = SummaryRow {
            turns: report.turns.0,
            verdict: report.verdict.label(),
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
