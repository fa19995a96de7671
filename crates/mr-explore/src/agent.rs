//! Per-agent exploration state.

use std::fmt;

use log::debug;

use mr_core::{AgentId, Direction, GridPos, WorldOracle, DIRECTION_ORDER};
use mr_map::{Cell, LocalMap};

use crate::policy;

/// Where an agent is in its lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Frontier remains; the agent moves or backtracks every turn.
    Exploring,
    /// Own frontier is empty; the partner is still exploring.
    Waiting,
    /// The merged map exists; the agent follows the planned path.
    Traversing,
    /// Standing on the meeting cell.
    Done,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Exploring => "exploring",
            Phase::Waiting => "waiting",
            Phase::Traversing => "traversing",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One explorer: identity, relative position, map, and backtrack trail.
///
/// The trail records every *forward* move since the start cell; a
/// backtrack pops one entry and walks its inverse without recording
/// anything, so `trail.len()` always equals forward moves minus
/// backtracks, and a fully explored region drains the trail back to the
/// start.
#[derive(Debug)]
pub struct Agent {
    pub id: AgentId,
    /// Position in the agent's own frame (start cell = origin).
    pub pos: GridPos,
    pub map: LocalMap,
    pub trail: Vec<Direction>,
    pub phase: Phase,
}

impl Agent {
    pub fn new(id: AgentId, half_extent: i32) -> Self {
        Self {
            id,
            pos: GridPos::ORIGIN,
            map: LocalMap::new(half_extent),
            trail: Vec::new(),
            phase: Phase::Exploring,
        }
    }

    /// Classify all four neighbours of the current cell.
    ///
    /// Only `Unknown` neighbours cost an oracle query; everything else is
    /// already settled, so sensing is idempotent and free once a cell's
    /// surroundings are known.
    pub fn sense<W: WorldOracle>(&mut self, world: &W) {
        for dir in DIRECTION_ORDER {
            if self.map.cell(self.pos.step(dir)) == Cell::Unknown {
                self.map.classify(self.pos, dir, world.can_go(self.id, dir));
            }
        }
    }

    /// Decide and record this turn's exploration move.
    ///
    /// Returns the direction to request from the oracle, or `None` for a
    /// pass.  A pass means this agent's exploration is complete and moves
    /// the phase to [`Phase::Waiting`].
    pub fn explore_step(&mut self) -> Option<Direction> {
        if let Some(dir) = policy::choose_move(&self.map, self.pos) {
            self.pos = self.pos.step(dir);
            self.map.record_forward(self.pos);
            self.trail.push(dir);
            return Some(dir);
        }

        if self.map.frontier() > 0 {
            return match self.trail.pop() {
                Some(last) => {
                    let back = last.inverse();
                    self.pos = self.pos.step(back);
                    Some(back)
                }
                None => {
                    debug_assert!(false, "frontier nonzero with an empty trail");
                    None
                }
            };
        }

        if self.phase == Phase::Exploring {
            debug!(
                "agent {} finished exploring: {} cells, trail drained to {}",
                self.id,
                self.map.explored(),
                self.trail.len(),
            );
            self.phase = Phase::Waiting;
        }
        None
    }
}
