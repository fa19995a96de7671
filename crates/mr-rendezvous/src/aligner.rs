//! Cross-agent map congruence checking and merged-grid construction.

use std::fmt;

use log::{debug, info};

use mr_core::{AgentId, GridPos};
use mr_map::{Cell, LocalMap};

use crate::{MergedCell, MergedMap, RendezvousSession};

/// Why the two rooms can never contain a common cell.
///
/// Terminal verdict data, not an error type: the maze is static, so none
/// of these is retryable and each maps to one textual report.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mismatch {
    /// One agent finished a room strictly smaller than what its partner
    /// has already seen.
    Volume,
    /// Both rooms finished, but their bounding boxes differ in extent.
    Size,
    /// Equal extents, but walls fall on different cells.
    Shape,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Volume => write!(f, "one room is smaller than the other by volume"),
            Mismatch::Size => write!(f, "the rooms differ in size"),
            Mismatch::Shape => write!(f, "the rooms have the same volume and size but differ in shape"),
        }
    }
}

/// Early unreachability test, checked every turn while exploration runs.
///
/// A room that has been *completely* explored (`frontier == 0`) can never
/// equal a partner room whose seen volume is already strictly larger, so
/// the run can stop before the larger room is even finished — and long
/// before any bounding boxes exist to compare.
pub fn volume_mismatch(a: &LocalMap, b: &LocalMap) -> Option<Mismatch> {
    if (a.frontier() == 0 && a.explored() < b.volume())
        || (b.frontier() == 0 && b.explored() < a.volume())
    {
        return Some(Mismatch::Volume);
    }
    None
}

/// Validate congruence of two finished local maps and build the merged
/// absolute grid.
///
/// Preconditions: both frontiers are zero.  Runs exactly once per run.
///
/// The check is symmetric: swapping the two maps yields the same verdict
/// and, on success, the same merged grid (positions relabelled).
pub fn align(
    a: &LocalMap,
    a_pos: GridPos,
    b: &LocalMap,
    b_pos: GridPos,
) -> Result<RendezvousSession, Mismatch> {
    debug_assert_eq!(a.frontier(), 0);
    debug_assert_eq!(b.frontier(), 0);

    let box_a = a.known_bounds();
    let box_b = b.known_bounds();

    if box_a.width() != box_b.width() || box_a.height() != box_b.height() {
        info!(
            "rooms differ in extent: {}x{} vs {}x{}",
            box_a.width(), box_a.height(), box_b.width(), box_b.height(),
        );
        return Err(Mismatch::Size);
    }

    // Compare cell pairs at corresponding normalized offsets, reduced to
    // wall vs not-wall; build the merged grid in the same pass.
    let (width, height) = (box_a.width(), box_a.height());
    let mut map = MergedMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let offset = GridPos::new(x, y);
            let cell_a = a.cell(box_a.min + offset);
            let cell_b = b.cell(box_b.min + offset);
            if cell_a.is_wall() != cell_b.is_wall() {
                debug!("wall disagreement at normalized offset {offset}");
                return Err(Mismatch::Shape);
            }
            let merged = if cell_a.is_wall() {
                MergedCell::Wall
            } else if cell_a == Cell::Unknown && cell_b == Cell::Unknown {
                // Enclosed pocket invisible to both agents.
                MergedCell::Unknown
            } else {
                MergedCell::Open
            };
            map.set(offset, merged);
        }
    }

    debug!(
        "maps merged into a {width}x{height} grid; agent {} at {}, agent {} at {}",
        AgentId::A, a_pos - box_a.min,
        AgentId::B, b_pos - box_b.min,
    );

    Ok(RendezvousSession {
        map,
        pos: [a_pos - box_a.min, b_pos - box_b.min],
        start: [GridPos::ORIGIN - box_a.min, GridPos::ORIGIN - box_b.min],
        meeting: None,
    })
}
