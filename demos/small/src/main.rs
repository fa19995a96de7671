//! small — smallest demo for the rust_mr rendezvous framework.
//!
//! Runs a handful of built-in mazes plus one seeded random maze, printing
//! the final report of each.  Pass `--watch` to get a per-turn line with a
//! short, purely cosmetic delay (not part of the algorithmic contract).
//! Pass `--trace <dir>` to also write the CSV turn trace.

mod world;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use mr_core::{Direction, Turn, DIRECTION_ORDER};
use mr_explore::Agent;
use mr_output::{CsvWriter, TraceObserver};
use mr_sim::{NoopObserver, Sim, SimConfig, TurnObserver};

use world::GridWorld;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const WATCH_DELAY_MS: u64 = 100;
const RANDOM_SIDE: i32 = 9; // must stay well inside the 21×21 map window
const RANDOM_CARVE_STEPS: usize = 120;

// ── Built-in mazes ────────────────────────────────────────────────────────────

const CORRIDOR: &[&str] = &["A...B"];

const DIVIDED: &[&str] = &[
    "A....",
    ".##.#",
    ".#..#",
    "...#B",
    "##...",
];

const TWO_ROOMS: &[&str] = &[
    "..#...",
    "A.#.B.",
    "###...",
];

// ── Watch observer ────────────────────────────────────────────────────────────

struct WatchObserver {
    delay: Duration,
}

impl TurnObserver for WatchObserver {
    fn on_turn_end(&mut self, turn: Turn, steps: [Option<Direction>; 2], agents: &[Agent; 2]) {
        let label = |step: Option<Direction>| step.map_or("pass", Direction::as_str);
        println!(
            "{turn}: A {:<5} [{} / frontier {}]  B {:<5} [{} / frontier {}]",
            label(steps[0]),
            agents[0].phase,
            agents[0].map.frontier(),
            label(steps[1]),
            agents[1].phase,
            agents[1].map.frontier(),
        );
        thread::sleep(self.delay);
    }
}

// ── Random maze ───────────────────────────────────────────────────────────────

/// Carve a random walk through an all-wall grid.  Everything carved is one
/// connected region, so the run always ends in a meeting.
fn random_maze(rng: &mut SmallRng) -> Vec<String> {
    let side = RANDOM_SIDE;
    let mut open = vec![vec![false; side as usize]; side as usize];
    let (mut x, mut y) = (side / 2, side / 2);
    let start = (x, y);
    open[y as usize][x as usize] = true;

    for _ in 0..RANDOM_CARVE_STEPS {
        let dir = DIRECTION_ORDER[rng.gen_range(0..4)];
        let (nx, ny) = (x + dir.dx(), y + dir.dy());
        if nx >= 0 && nx < side && ny >= 0 && ny < side {
            (x, y) = (nx, ny);
            open[y as usize][x as usize] = true;
        }
    }

    // Put B on the carved cell farthest from A (ties: scan order).
    let mut far = start;
    let mut best = -1;
    for (cy, row) in open.iter().enumerate() {
        for (cx, &is_open) in row.iter().enumerate() {
            let dist = (cx as i32 - start.0).abs() + (cy as i32 - start.1).abs();
            if is_open && dist > best {
                best = dist;
                far = (cx as i32, cy as i32);
            }
        }
    }

    (0..side)
        .map(|cy| {
            (0..side)
                .map(|cx| match (cx, cy) {
                    p if p == start => 'A',
                    p if p == far => 'B',
                    _ if open[cy as usize][cx as usize] => '.',
                    _ => '#',
                })
                .collect()
        })
        .collect()
}

// ── Driver ────────────────────────────────────────────────────────────────────

fn run_maze<S: AsRef<str>>(name: &str, art: &[S], options: &Options) -> Result<()> {
    println!("== {name} ==");
    for row in art {
        println!("   {}", row.as_ref());
    }

    let mut sim = Sim::new(GridWorld::parse(art), SimConfig::default());
    let report = match (&options.trace_dir, options.watch) {
        (Some(dir), _) => {
            let run_dir = dir.join(name.replace(' ', "-").replace(['(', ')'], ""));
            std::fs::create_dir_all(&run_dir)?;
            let mut observer = TraceObserver::new(CsvWriter::new(&run_dir)?);
            let report = sim.run(&mut observer)?;
            if let Some(err) = observer.take_error() {
                return Err(err.into());
            }
            report
        }
        (None, true) => sim.run(&mut WatchObserver {
            delay: Duration::from_millis(WATCH_DELAY_MS),
        })?,
        (None, false) => sim.run(&mut NoopObserver)?,
    };

    println!("{report}");
    println!();
    Ok(())
}

struct Options {
    watch: bool,
    trace_dir: Option<PathBuf>,
}

fn parse_args() -> Options {
    let mut options = Options { watch: false, trace_dir: None };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--watch" => options.watch = true,
            "--trace" => options.trace_dir = args.next().map(PathBuf::from),
            other => eprintln!("ignoring unknown argument: {other}"),
        }
    }
    options
}

fn main() -> Result<()> {
    let options = parse_args();

    run_maze("corridor", CORRIDOR, &options)?;
    run_maze("divided room", DIVIDED, &options)?;
    run_maze("two rooms (never meet)", TWO_ROOMS, &options)?;

    let mut rng = SmallRng::seed_from_u64(SEED);
    let maze = random_maze(&mut rng);
    run_maze("random walk maze", &maze, &options)?;

    Ok(())
}
