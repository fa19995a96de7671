//! ASCII-art maze worlds implementing the oracle contract.
//!
//! This is the "external collaborator" side of the system: it owns the
//! real topology and both agents' absolute positions, and answers only the
//! three oracle queries.  The framework never reads anything else.

use mr_core::{AgentId, Direction, Turn, WorldOracle};

/// A rectangular maze parsed from art rows: `#` wall, `.` open, `A`/`B`
/// the agents' start cells.  Cells outside the art are walls.  Agents
/// never block each other; only walls do.
pub struct GridWorld {
    rows: Vec<Vec<bool>>,
    pos: [(i32, i32); 2],
    turns: u32,
}

impl GridWorld {
    pub fn parse<S: AsRef<str>>(art: &[S]) -> Self {
        let mut pos = [(0, 0); 2];
        let rows = art
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(x, c)| {
                        match c {
                            'A' => pos[0] = (x as i32, y as i32),
                            'B' => pos[1] = (x as i32, y as i32),
                            _ => {}
                        }
                        c != '#'
                    })
                    .collect()
            })
            .collect();
        Self { rows, pos, turns: 0 }
    }

    fn open_at(&self, x: i32, y: i32) -> bool {
        y >= 0
            && (y as usize) < self.rows.len()
            && x >= 0
            && (x as usize) < self.rows[y as usize].len()
            && self.rows[y as usize][x as usize]
    }

    fn apply(&mut self, agent: AgentId, dir: Direction) {
        let (x, y) = self.pos[agent.index()];
        if self.open_at(x + dir.dx(), y + dir.dy()) {
            self.pos[agent.index()] = (x + dir.dx(), y + dir.dy());
        }
    }
}

impl WorldOracle for GridWorld {
    fn can_go(&self, agent: AgentId, dir: Direction) -> bool {
        let (x, y) = self.pos[agent.index()];
        self.open_at(x + dir.dx(), y + dir.dy())
    }

    fn go(&mut self, a: Option<Direction>, b: Option<Direction>) -> bool {
        if let Some(dir) = a {
            self.apply(AgentId::A, dir);
        }
        if let Some(dir) = b {
            self.apply(AgentId::B, dir);
        }
        self.turns += 1;
        self.pos[0] == self.pos[1]
    }

    fn turn_count(&self) -> Turn {
        Turn(self.turns)
    }
}
