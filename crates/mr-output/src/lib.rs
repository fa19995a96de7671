//! `mr-output` — tabular run traces.
//!
//! Bridges the sim's [`TurnObserver`][mr_sim::TurnObserver] to an
//! [`OutputWriter`] backend.  The only built-in backend writes two CSV
//! files (`turn_trace.csv`, `run_summary.csv`); the writer trait is the
//! seam for adding other formats without touching the observer.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{SummaryRow, TurnRow};
pub use writer::OutputWriter;
