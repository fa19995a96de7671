//! The world-oracle contract.
//!
//! The maze itself — its topology and both agents' absolute positions — is
//! owned by an external collaborator (a simulator in production, small
//! fixtures in tests).  The framework core never sees absolute
//! coordinates; everything it learns arrives through the three queries
//! below.

use crate::{AgentId, Direction, Turn};

/// Movement-capability and movement-execution queries answered by the maze
/// simulator.
///
/// # Contract
///
/// - The maze is static: the same query from the same state always returns
///   the same answer.
/// - `can_go` must not move anything.
/// - `go` executes both requested moves in one turn; `None` means that
///   agent passes.  A move into a wall leaves the agent in place.  The
///   return value is `true` iff, after the attempt, both agents occupy the
///   same absolute cell.
/// - `turn_count` increases by exactly one per `go` call and is otherwise
///   constant.
pub trait WorldOracle {
    /// `true` iff `agent` could move one cell in `dir` from where it
    /// currently stands.
    fn can_go(&self, agent: AgentId, dir: Direction) -> bool;

    /// Execute one paired move.  Returns `true` iff both agents now share
    /// a cell.
    fn go(&mut self, a: Option<Direction>, b: Option<Direction>) -> bool;

    /// Monotone count of `go` calls so far.
    fn turn_count(&self) -> Turn;
}
