//! Breadth-first distance labelling, meeting-cell choice, and path
//! reconstruction.

use std::collections::VecDeque;

use log::debug;

use mr_core::{AgentId, DIRECTION_ORDER};

use crate::{MergedCell, PlanError, RendezvousSession};

/// Label the merged grid and carve the shared route.
///
/// Runs once, immediately after a successful alignment:
///
/// 1. Flood fill from agent A's cell over `Open` cells, label 1 at the
///    source and incrementing per BFS layer.  Expansion follows the shared
///    scan order, so layer contents are deterministic (label values are
///    order-independent either way).
/// 2. With `d` = agent B's label, the meeting distance is `d / 2` —
///    integer division, so an odd split leaves the extra step on A's side.
/// 3. Walk backward from B's cell along strictly-decreasing labels (first
///    match in scan order), re-tagging every vacated cell `PathMarker`.
///    The first cell whose label is `meeting_distance + 1` becomes the
///    meeting cell; the walk ends after marking A's label-1 cell.
pub fn plan(session: &mut RendezvousSession) -> Result<(), PlanError> {
    let source = session.pos[AgentId::A.index()];
    let target = session.pos[AgentId::B.index()];
    let map = &mut session.map;

    // ── Flood fill ────────────────────────────────────────────────────────
    let mut queue = VecDeque::new();
    if map.cell(source) == Some(MergedCell::Open) {
        map.set(source, MergedCell::Distance(1));
        queue.push_back(source);
    }
    while let Some(cur) = queue.pop_front() {
        let Some(label) = map.distance(cur) else { continue };
        for dir in DIRECTION_ORDER {
            let next = cur.step(dir);
            if map.cell(next) == Some(MergedCell::Open) {
                map.set(next, MergedCell::Distance(label + 1));
                queue.push_back(next);
            }
        }
    }

    let Some(d) = map.distance(target) else {
        return Err(PlanError::MeetingUnreachable);
    };
    let meeting_distance = d / 2;

    // ── Backward walk ─────────────────────────────────────────────────────
    let mut cur = target;
    let mut meeting = None;
    loop {
        let Some(label) = map.distance(cur) else {
            return Err(PlanError::MeetingUnreachable);
        };
        if label == meeting_distance + 1 {
            meeting = Some(cur);
        }
        map.set(cur, MergedCell::PathMarker);
        if label == 1 {
            break;
        }
        let next = DIRECTION_ORDER
            .into_iter()
            .map(|dir| cur.step(dir))
            .find(|&next| map.distance(next) == Some(label - 1));
        match next {
            Some(next) => cur = next,
            // A labelled cell above 1 always has a predecessor; losing it
            // means the labels no longer describe a connected route.
            None => return Err(PlanError::MeetingUnreachable),
        }
    }

    // The walk descends one label per step from d to 1, so it crossed
    // meeting_distance + 1 exactly once.
    let Some(meeting) = meeting else {
        return Err(PlanError::MeetingUnreachable);
    };
    debug!("meeting cell {meeting} chosen at distance {meeting_distance} of {d}");
    session.meeting = Some(meeting);
    Ok(())
}
