//! End-to-end scenario tests for the turn loop.

use mr_core::{AgentId, Direction, Turn, WorldOracle};
use mr_explore::Phase;
use mr_rendezvous::{Mismatch, RendezvousSession};

use crate::{NoopObserver, RunReport, Sim, SimConfig, SimError, TurnObserver, Verdict};

// ── Fixture: an ASCII maze oracle ─────────────────────────────────────────────

/// `#` wall, `.` open, `A`/`B` the agents' start cells.  Cells outside the
/// art are walls.  Agents never block each other.
struct MazeWorld {
    rows: Vec<Vec<bool>>,
    pos: [(i32, i32); 2],
    turns: u32,
}

impl MazeWorld {
    fn parse(art: &[&str]) -> Self {
        let mut pos = [(0, 0); 2];
        let rows = art
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.chars()
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

impl WorldOracle for MazeWorld {
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

fn run(art: &[&str]) -> RunReport {
    Sim::new(MazeWorld::parse(art), SimConfig::default())
        .run(&mut NoopObserver)
        .unwrap()
}

// ── Success scenarios ─────────────────────────────────────────────────────────

#[cfg(test)]
mod success {
    use super::*;

    #[test]
    fn meets_on_the_first_turn_without_exploration() {
        // Two cells apart in a 1-wide corridor: both step inward and share
        // the middle cell on the very first paired move.
        let report = run(&["A.B"]);
        assert_eq!(report.verdict, Verdict::MetEarly);
        assert_eq!(report.turns, Turn(1));
        let joined = report.map.join("\n");
        assert!(joined.contains('A') && joined.contains('B'), "{joined}");
    }

    #[test]
    fn corridor_meets_early_at_the_middle_cell() {
        let report = run(&["A...B"]);
        assert_eq!(report.verdict, Verdict::MetEarly);
        assert_eq!(report.turns, Turn(2));
    }

    #[test]
    fn corridor_run_is_reproducible() {
        assert_eq!(run(&["A...B"]), run(&["A...B"]));
        assert_eq!(run(&["AB."]), run(&["AB."]));
    }

    #[test]
    fn adjacent_agents_resolve_via_the_planned_path() {
        // Simultaneous movement swaps the agents instead of meeting them;
        // both finish exploring, the maps merge, and the planner brings
        // them together.
        let report = run(&["AB"]);
        assert_eq!(report.verdict, Verdict::MetAtPlanned);
        assert_eq!(report.turns, Turn(2));
        assert_eq!(report.map, ["?##?", "#*.#", "?##?"]);
    }

    #[test]
    fn three_cell_room_meets_at_the_planned_middle() {
        // A and B chase each other through the little room, finish
        // exploring without colliding, and the planner picks the middle.
        let report = run(&["AB."]);
        assert_eq!(report.verdict, Verdict::MetAtPlanned);
        assert_eq!(report.turns, Turn(4));
        assert_eq!(report.map, ["?###?", "#.*.#", "?###?"]);
    }

    #[test]
    fn display_includes_turns_and_grid() {
        let text = run(&["AB"]).to_string();
        assert!(text.contains("Turns used: 2"), "{text}");
        assert!(text.contains("?##?"), "{text}");
    }
}

// ── Never-meet scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod mismatches {
    use super::*;

    #[test]
    fn smaller_finished_room_reports_volume_mismatch() {
        // A 2×2 room completes while the partner's 3×3 is still growing:
        // the volume check fires before the boxes are ever compared.
        let report = run(&["..#...", "A.#.B.", "###..."]);
        assert_eq!(report.verdict, Verdict::NeverMeet(Mismatch::Volume));
        assert_eq!(report.turns, Turn(3));
        assert!(report.map.is_empty());
    }

    #[test]
    fn equal_volume_different_extent_reports_size_mismatch() {
        // 1×6 corridor vs 2×3 block: the volume check can never catch
        // these, so both rooms finish and the box comparison decides.
        let report = run(&["A.....#B..", "#######..."]);
        assert_eq!(report.verdict, Verdict::NeverMeet(Mismatch::Size));
    }

    #[test]
    fn same_extent_different_walls_reports_shape_mismatch() {
        let report = run(&["A..#B..", ".#.##..", "...#..."]);
        assert_eq!(report.verdict, Verdict::NeverMeet(Mismatch::Shape));
    }

    #[test]
    fn mismatch_reports_never_issue_a_navigation_move() {
        // The size-mismatch world again, this time counting traversal
        // steps: the report must arrive without any post-merge move.
        struct NoTraversal;
        impl TurnObserver for NoTraversal {
            fn on_merge(&mut self, _session: &RendezvousSession) {
                panic!("mismatched maps must never merge");
            }
        }
        let mut sim = Sim::new(
            MazeWorld::parse(&["A.....#B..", "#######..."]),
            SimConfig::default(),
        );
        let report = sim.run(&mut NoTraversal).unwrap();
        assert!(!report.verdict.is_met());
    }
}

// ── Consistency errors ────────────────────────────────────────────────────────

#[cfg(test)]
mod consistency {
    use super::*;

    /// Delegates to an inner maze but can start refusing every move probe.
    struct LyingWorld {
        inner: MazeWorld,
        deny: bool,
    }

    impl WorldOracle for LyingWorld {
        fn can_go(&self, agent: AgentId, dir: Direction) -> bool {
            !self.deny && self.inner.can_go(agent, dir)
        }
        fn go(&mut self, a: Option<Direction>, b: Option<Direction>) -> bool {
            self.inner.go(a, b)
        }
        fn turn_count(&self) -> Turn {
            self.inner.turn_count()
        }
    }

    #[test]
    fn refused_planned_move_is_fatal() {
        let world = LyingWorld {
            inner: MazeWorld::parse(&["AB"]),
            deny: false,
        };
        let mut sim = Sim::new(world, SimConfig::default());

        // First turn: the agents swap ends while exploring.
        assert!(sim.step(&mut NoopObserver).unwrap().is_none());
        // From now on every capability probe is refused; the navigator's
        // first planned move must surface as a consistency error.
        sim.world.deny = true;
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(
            matches!(err, SimError::MoveRejected { agent: AgentId::A, dir: Direction::Left }),
            "{err}",
        );
    }

    #[test]
    fn indistinguishable_sealed_rooms_trip_the_turn_limit() {
        // Two sealed 1×1 rooms are congruent, so the merged model says the
        // agents already share the (single) cell — but the oracle never
        // agrees.  The runaway guard converts the stalemate into an error.
        let config = SimConfig { max_turns: 25, ..SimConfig::default() };
        let err = Sim::new(MazeWorld::parse(&["A#B"]), config)
            .run(&mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, SimError::TurnLimit(25)), "{err}");
    }
}

// ── Observer wiring ───────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts: usize,
        ends: usize,
        merges: usize,
        reports: usize,
        phases: Vec<(Phase, Phase)>,
    }

    impl TurnObserver for Recorder {
        fn on_turn_start(&mut self, _turn: Turn) {
            self.starts += 1;
        }
        fn on_turn_end(
            &mut self,
            _turn: Turn,
            _steps: [Option<Direction>; 2],
            agents: &[mr_explore::Agent; 2],
        ) {
            self.ends += 1;
            self.phases.push((agents[0].phase, agents[1].phase));
        }
        fn on_merge(&mut self, session: &RendezvousSession) {
            self.merges += 1;
            assert!(session.meeting.is_some(), "merge observed before planning");
        }
        fn on_report(&mut self, _report: &RunReport) {
            self.reports += 1;
        }
    }

    #[test]
    fn hooks_fire_once_per_turn_and_once_per_merge() {
        let mut recorder = Recorder::default();
        let report = Sim::new(MazeWorld::parse(&["AB"]), SimConfig::default())
            .run(&mut recorder)
            .unwrap();
        assert_eq!(report.turns, Turn(2));
        assert_eq!(recorder.starts, 2);
        assert_eq!(recorder.ends, 2);
        assert_eq!(recorder.merges, 1);
        assert_eq!(recorder.reports, 1);
    }

    #[test]
    fn phases_walk_the_state_machine() {
        let mut recorder = Recorder::default();
        Sim::new(MazeWorld::parse(&["AB."]), SimConfig::default())
            .run(&mut recorder)
            .unwrap();
        // A finishes first and waits one turn while B backtracks; the
        // merge turn runs with both agents traversing.
        assert_eq!(
            recorder.phases,
            [
                (Phase::Exploring, Phase::Exploring),
                (Phase::Exploring, Phase::Exploring),
                (Phase::Waiting, Phase::Exploring),
                (Phase::Traversing, Phase::Traversing),
            ],
        );
    }
}
