//! Turn observer trait for progress reporting and trace collection.

use mr_core::{Direction, Turn};
use mr_explore::Agent;
use mr_rendezvous::RendezvousSession;

use crate::RunReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// turn loop.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl TurnObserver for ProgressPrinter {
///     fn on_turn_end(&mut self, turn: Turn, steps: [Option<Direction>; 2], agents: &[Agent; 2]) {
///         println!("{turn}: A {:?} / B {:?}", steps[0], steps[1]);
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called after sensing, before the turn's branch is decided.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called after the paired-move call.  `steps` holds the directions
    /// requested from the oracle (`None` = pass); `agents` expose each
    /// agent's map counters and phase for trace output.
    fn on_turn_end(&mut self, _turn: Turn, _steps: [Option<Direction>; 2], _agents: &[Agent; 2]) {}

    /// Called exactly once, right after the merged map and route exist.
    fn on_merge(&mut self, _session: &RendezvousSession) {}

    /// Called once with the final report, after the run has an outcome.
    fn on_report(&mut self, _report: &RunReport) {}
}

/// A [`TurnObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
