//! Planning-subsystem error type.

use thiserror::Error;

/// Fatal internal-consistency conditions raised by the planner.
///
/// These are not user outcomes: a passed congruence check guarantees the
/// rooms are equally connected, so hitting one of these means the map
/// model has diverged from the oracle's ground truth.  Never retried.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("agent B's cell is not reachable from agent A's in the merged map")]
    MeetingUnreachable,
}
