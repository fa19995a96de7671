//! The backend trait.

use crate::{OutputResult, SummaryRow, TurnRow};

/// A sink for trace rows.  Implementations decide format and storage.
pub trait OutputWriter {
    fn write_turn(&mut self, row: &TurnRow) -> OutputResult<()>;

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close.  Must be idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
