//! The owned rendezvous state.

use mr_core::{AgentId, GridPos};

use crate::MergedMap;

/// Everything the rendezvous phase owns: the merged grid plus both agents'
/// absolute coordinates within it.
///
/// Created once by [`align`][crate::align], labelled and marked once by
/// [`plan`][crate::plan], then consumed step-by-step by
/// [`next_step`][crate::next_step].  Nothing else may mutate it.
#[derive(Debug)]
pub struct RendezvousSession {
    pub map: MergedMap,
    /// Current absolute position per agent (indexed by `AgentId::index`).
    pub pos: [GridPos; 2],
    /// Absolute position of each agent's start cell.
    pub start: [GridPos; 2],
    /// The chosen meeting cell; `None` until planning has run.
    pub meeting: Option<GridPos>,
}

impl RendezvousSession {
    /// `true` once `agent` stands on the meeting cell.
    #[inline]
    pub fn at_meeting(&self, agent: AgentId) -> bool {
        self.meeting == Some(self.pos[agent.index()])
    }

    /// `true` once both agents stand on the meeting cell.
    #[inline]
    pub fn both_at_meeting(&self) -> bool {
        AgentId::BOTH.iter().all(|&id| self.at_meeting(id))
    }
}
