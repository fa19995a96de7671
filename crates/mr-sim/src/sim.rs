//! The `Sim` struct and its turn loop.

use log::info;

use mr_core::{AgentId, Turn, WorldOracle, NUDGE_ORDER};
use mr_explore::{Agent, Phase};
use mr_map::Cell;
use mr_rendezvous::{aligner, navigator, planner, RendezvousSession};

use crate::report::{self, RunReport};
use crate::{SimConfig, SimError, SimResult, TurnObserver};

/// The main run driver.
///
/// `Sim<W>` owns the two agents, the lazily created
/// [`RendezvousSession`], and the world oracle `W`.  One call to
/// [`step`][Self::step] is one turn: a single paired-move oracle call (or
/// a terminal verdict without one).  Create with [`Sim::new`], drive with
/// [`run`][Self::run].
pub struct Sim<W: WorldOracle> {
    /// The external maze simulator.
    pub world: W,

    pub config: SimConfig,

    /// Both explorers, indexed by `AgentId::index` (A first).
    pub agents: [Agent; 2],

    /// Created on the first turn both frontiers are empty; `None` before.
    pub session: Option<RendezvousSession>,
}

impl<W: WorldOracle> Sim<W> {
    pub fn new(world: W, config: SimConfig) -> Self {
        Self {
            world,
            config,
            agents: [
                Agent::new(AgentId::A, config.half_extent),
                Agent::new(AgentId::B, config.half_extent),
            ],
            session: None,
        }
    }

    /// Drive turns until the run has an outcome.
    ///
    /// Terminal verdicts — met, or one of the never-meet mismatches — are
    /// `Ok`; an `Err` always means the map model and the oracle disagree.
    pub fn run<O: TurnObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        loop {
            if let Some(report) = self.step(observer)? {
                observer.on_report(&report);
                return Ok(report);
            }
            if self.world.turn_count() >= Turn(self.config.max_turns) {
                return Err(SimError::TurnLimit(self.config.max_turns));
            }
        }
    }

    /// Execute exactly one turn.  `Ok(Some(..))` ends the run.
    pub fn step<O: TurnObserver>(&mut self, observer: &mut O) -> SimResult<Option<RunReport>> {
        // ── Phase 1: sense ────────────────────────────────────────────────
        for agent in &mut self.agents {
            agent.sense(&self.world);
        }
        observer.on_turn_start(self.world.turn_count());

        // ── Phase 2: branch on exploration progress ───────────────────────
        if self.agents.iter().all(|agent| agent.map.frontier() == 0) {
            return self.traverse_turn(observer);
        }

        // One finished room strictly smaller than the partner's seen
        // volume can never be congruent; stop before exploring further.
        if let Some(mismatch) = aligner::volume_mismatch(&self.agents[0].map, &self.agents[1].map)
        {
            let turns = self.world.turn_count();
            info!("terminal verdict at {turns}: {mismatch}");
            return Ok(Some(report::never_meet(mismatch, turns)));
        }

        Ok(self.explore_turn(observer))
    }

    // ── Exploration turns ─────────────────────────────────────────────────

    fn explore_turn<O: TurnObserver>(&mut self, observer: &mut O) -> Option<RunReport> {
        let steps = [
            self.agents[0].explore_step(),
            self.agents[1].explore_step(),
        ];
        let met = self.world.go(steps[0], steps[1]);
        observer.on_turn_end(self.world.turn_count(), steps, &self.agents);
        met.then(|| self.early_meet_report())
    }

    // ── Traversal turns ───────────────────────────────────────────────────

    fn traverse_turn<O: TurnObserver>(
        &mut self,
        observer: &mut O,
    ) -> SimResult<Option<RunReport>> {
        if self.session.is_none() {
            let aligned = {
                let [a, b] = &self.agents;
                aligner::align(&a.map, a.pos, &b.map, b.pos)
            };
            match aligned {
                Ok(mut session) => {
                    planner::plan(&mut session)?;
                    for agent in &mut self.agents {
                        agent.phase = Phase::Traversing;
                    }
                    observer.on_merge(&session);
                    self.session = Some(session);
                }
                Err(mismatch) => {
                    let turns = self.world.turn_count();
                    info!("terminal verdict at {turns}: {mismatch}");
                    return Ok(Some(report::never_meet(mismatch, turns)));
                }
            }
        }
        let Some(session) = self.session.as_mut() else {
            // Installed just above; only here to avoid unwrap.
            return Ok(None);
        };

        let mut steps = [None, None];
        for id in AgentId::BOTH {
            let step = navigator::next_step(session, id);
            if let Some(dir) = step {
                if !self.world.can_go(id, dir) {
                    return Err(SimError::MoveRejected { agent: id, dir });
                }
                // Keep the agent's own frame in sync for early-meet reports.
                let agent = &mut self.agents[id.index()];
                agent.pos = agent.pos.step(dir);
            }
            steps[id.index()] = step;
        }

        let met = self.world.go(steps[0], steps[1]);
        observer.on_turn_end(self.world.turn_count(), steps, &self.agents);
        if met {
            if session.both_at_meeting() {
                let turns = self.world.turn_count();
                for agent in &mut self.agents {
                    agent.phase = Phase::Done;
                }
                info!("agents met at the planned cell after {turns}");
                return Ok(Some(report::planned(session, turns)));
            }
            return Ok(Some(self.early_meet_report()));
        }
        Ok(None)
    }

    // ── Early-meeting fallback ────────────────────────────────────────────

    /// The oracle reported a shared cell before both agents stood on the
    /// planned meeting cell.  Capture the frame offset (one physical cell,
    /// two frames), nudge agent A one open step to re-create a one-cell
    /// gap, and merge the local maps directly.
    fn early_meet_report(&mut self) -> RunReport {
        let turns = self.world.turn_count();
        let offset = self.agents[0].pos - self.agents[1].pos;
        info!("agents met unplanned at {turns}; separating for the merged view");

        for dir in NUDGE_ORDER {
            if self.world.can_go(AgentId::A, dir) {
                self.world.go(Some(dir), None);
                let agent = &mut self.agents[0];
                let to = agent.pos.step(dir);
                if agent.map.cell(to) == Cell::Unknown {
                    agent.map.classify(agent.pos, dir, true);
                }
                if agent.map.cell(to) == Cell::Open {
                    agent.map.record_forward(to);
                }
                agent.pos = to;
                break;
            }
        }

        report::early_meet(&self.agents, offset, turns)
    }
}
