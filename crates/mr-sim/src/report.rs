//! Terminal run reports and grid rendering.
//!
//! The rendered grid uses `?` for unknown cells, `#` for walls, `.` for
//! anything open (visited, planned, or traversed), and marks each agent's
//! resting cell with `A`/`B` — or a single `*` when both rest on the same
//! cell.  Mismatch reports carry no grid; there is no common frame to
//! render them in.

use std::fmt;

use mr_core::{GridPos, Turn};
use mr_explore::Agent;
use mr_rendezvous::{Mismatch, RendezvousSession};

/// How the run ended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Verdict {
    /// Both agents reached the planned meeting cell.
    MetAtPlanned,
    /// The oracle reported a shared cell before the planned meeting; the
    /// maps were merged by relative offset instead.
    MetEarly,
    /// The rooms can never contain a common cell.
    NeverMeet(Mismatch),
}

impl Verdict {
    pub fn is_met(&self) -> bool {
        !matches!(self, Verdict::NeverMeet(_))
    }

    /// Stable token for trace output.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::MetAtPlanned => "met-planned",
            Verdict::MetEarly => "met-early",
            Verdict::NeverMeet(Mismatch::Volume) => "volume-mismatch",
            Verdict::NeverMeet(Mismatch::Size) => "size-mismatch",
            Verdict::NeverMeet(Mismatch::Shape) => "shape-mismatch",
        }
    }
}

/// The final outcome of a run: verdict, oracle turns at detection time,
/// and (on success) the rendered merged grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RunReport {
    pub verdict: Verdict,
    pub turns: Turn,
    pub map: Vec<String>,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::NeverMeet(mismatch) => write!(
                f,
                "The agents will never meet: {}. Turns used: {}.",
                mismatch, self.turns.0,
            ),
            _ => {
                writeln!(f, "The agents met. Turns used: {}.", self.turns.0)?;
                for row in &self.map {
                    writeln!(f, "{row}")?;
                }
                Ok(())
            }
        }
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Success via the planned route: render the merged grid.
pub fn planned(session: &RendezvousSession, turns: Turn) -> RunReport {
    let map = &session.map;
    let mut rows: Vec<Vec<char>> = (0..map.height())
        .map(|y| (0..map.width()).map(|x| map.glyph(GridPos::new(x, y))).collect())
        .collect();
    mark_agents(&mut rows, GridPos::ORIGIN, session.pos[0], session.pos[1]);
    RunReport {
        verdict: Verdict::MetAtPlanned,
        turns,
        map: finish_rows(rows),
    }
}

/// Success via the early-meeting fallback: merge the two local maps by
/// the frame offset captured on the shared cell (`offset` maps B-frame
/// coordinates into A's frame).
pub fn early_meet(agents: &[Agent; 2], offset: GridPos, turns: Turn) -> RunReport {
    let (a, b) = (&agents[0], &agents[1]);
    let bounds = a
        .map
        .known_bounds()
        .union(b.map.known_bounds().translate(offset));

    let mut rows: Vec<Vec<char>> = (bounds.min.y..=bounds.max.y)
        .map(|y| {
            (bounds.min.x..=bounds.max.x)
                .map(|x| {
                    let p = GridPos::new(x, y);
                    let cell_a = a.map.cell(p);
                    if cell_a.is_classified() {
                        cell_a.glyph()
                    } else {
                        let cell_b = b.map.cell(p - offset);
                        if cell_b.is_classified() { cell_b.glyph() } else { '?' }
                    }
                })
                .collect()
        })
        .collect();
    mark_agents(&mut rows, bounds.min, a.pos, b.pos + offset);
    RunReport {
        verdict: Verdict::MetEarly,
        turns,
        map: finish_rows(rows),
    }
}

/// Terminal mismatch: verdict and turn count only.
pub fn never_meet(mismatch: Mismatch, turns: Turn) -> RunReport {
    RunReport {
        verdict: Verdict::NeverMeet(mismatch),
        turns,
        map: Vec::new(),
    }
}

// ── Rendering helpers ─────────────────────────────────────────────────────────

fn mark_agents(rows: &mut [Vec<char>], origin: GridPos, a: GridPos, b: GridPos) {
    if a == b {
        mark(rows, origin, a, '*');
    } else {
        mark(rows, origin, a, 'A');
        mark(rows, origin, b, 'B');
    }
}

fn mark(rows: &mut [Vec<char>], origin: GridPos, pos: GridPos, glyph: char) {
    let (x, y) = ((pos.x - origin.x) as usize, (pos.y - origin.y) as usize);
    if let Some(cell) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
        *cell = glyph;
    }
}

fn finish_rows(rows: Vec<Vec<char>>) -> Vec<String> {
    rows.into_iter().map(String::from_iter).collect()
}
