//! Step-by-step consumption of the planned route.

use mr_core::{AgentId, Direction, DIRECTION_ORDER};

use crate::{MergedCell, RendezvousSession};

/// One navigation step for `agent`.
///
/// Standing on the meeting cell → `None` (pass).  Otherwise take the first
/// neighbouring `PathMarker` in the shared scan order, re-tag the vacated
/// cell `Traversed` so neither agent ever walks a segment twice, and
/// return the direction to request from the oracle.
///
/// The caller verifies the returned move against `can_go` before issuing
/// it; a refusal is a fatal consistency error, not a retry.
pub fn next_step(session: &mut RendezvousSession, agent: AgentId) -> Option<Direction> {
    if session.at_meeting(agent) {
        return None;
    }
    let here = session.pos[agent.index()];
    for dir in DIRECTION_ORDER {
        let next = here.step(dir);
        if session.map.cell(next) == Some(MergedCell::PathMarker) {
            session.map.set(here, MergedCell::Traversed);
            session.pos[agent.index()] = next;
            return Some(dir);
        }
    }
    None
}
