//! Simulation error type.
//!
//! These are internal-consistency violations: the map model contradicting
//! the oracle's ground truth.  They are fatal, never retried, and distinct
//! from the terminal "never meet" verdicts, which are ordinary run
//! outcomes carried in the [`RunReport`][crate::RunReport].

use thiserror::Error;

use mr_core::{AgentId, Direction};
use mr_rendezvous::PlanError;

#[derive(Debug, Error)]
pub enum SimError {
    /// The oracle refused a move the merged map says is open.
    #[error("oracle refused {dir} for agent {agent} on the planned path")]
    MoveRejected { agent: AgentId, dir: Direction },

    /// The planner could not connect the two agents on a grid the
    /// congruence check accepted.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),

    /// The runaway guard tripped (defective oracle).
    #[error("no outcome after {0} turns; oracle and map model have diverged")]
    TurnLimit(u32),
}

pub type SimResult<T> = Result<T, SimError>;
