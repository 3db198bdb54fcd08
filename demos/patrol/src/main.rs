//! patrol: one agent patrolling a walled courtyard.
//!
//! The agent loops a four-corner tour, detours to goals within its interest
//! radius, and follows a short script: switch to hunt mode, watch a goal
//! appear, switch back to patrol, and finally run at a coarser tick rate.
//!
//! Run with `RUST_LOG=debug` for per-waypoint logging.  An optional first
//! argument names a JSON file overriding [`DemoConfig`].

mod world;

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use nav_control::{ModeToggle, NavConfig, NavState, NavStatus, NavigationController, NavigationStrategy};
use nav_core::{SimConfig, SimRng, Tick};
use nav_mobility::SimpleBody;
use nav_sim::{EventSchedule, SimBuilder, SimEvent, SimObserver};
use nav_spatial::GoalCandidate;
use nav_tour::load_grid_tour_reader;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:          SimConfig,
    nav:          NavConfig,
    /// Body speed in world units per second.
    speed:        f32,
    /// Log the controller status every this many ticks (0 disables).
    report_every: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:          SimConfig { tick_duration_ms: 50, total_ticks: 4_000, seed: 42 },
            nav:          NavConfig::default().with_interest_radius(12.0),
            speed:        4.0,
            report_every: 250,
        }
    }
}

fn load_config() -> Result<DemoConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(Path::new(&path))
        .with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

fn script() -> EventSchedule {
    EventSchedule::new()
        .at(1_200, SimEvent::Toggle(ModeToggle::Hunt))
        .at(1_800, SimEvent::SpawnGoal(world::late_goal()))
        .at(2_600, SimEvent::Toggle(ModeToggle::Patrol))
        .at(3_200, SimEvent::SetTickDuration(100))
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Summary {
    report_every: u64,
    ticks_in:     BTreeMap<&'static str, u64>,
    transitions:  usize,
    collected:    Vec<(Tick, GoalCandidate)>,
    halted_ticks: u64,
}

impl SimObserver for Summary {
    fn on_tick_end(&mut self, tick: Tick, status: &NavStatus) {
        *self.ticks_in.entry(status.state.name()).or_default() += 1;
        if status.halted {
            self.halted_ticks += 1;
        }
        if self.report_every > 0 && tick.0.is_multiple_of(self.report_every) {
            info!(%tick, "{status}");
        }
    }

    fn on_state_change(&mut self, _tick: Tick, _from: NavState, _to: NavState) {
        self.transitions += 1;
    }

    fn on_goal_collected(&mut self, tick: Tick, goal: &GoalCandidate) {
        self.collected.push((tick, *goal));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = load_config()?;
    println!("=== patrol: courtyard navigation demo ===");
    println!(
        "Ticks: {}  |  Tick: {} ms  |  Speed: {}  |  Seed: {}",
        cfg.sim.total_ticks, cfg.sim.tick_duration_ms, cfg.speed, cfg.sim.seed
    );

    // 1. World.
    let graph = world::build_graph();
    println!("Nav graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    // 2. Tour from the embedded CSV, started at a seeded random waypoint.
    let mut tour = load_grid_tour_reader(Cursor::new(world::TOUR_CSV), world::PLACEMENT)?;
    tour.randomize_start(&mut SimRng::new(cfg.sim.seed));
    println!("Tour: {} waypoints, lap {:.1}, starting at #{}", tour.len(), tour.lap_length(), tour.cursor());

    // 3. Controller and body.
    let start = tour.current().position();
    let controller = NavigationController::with_graph(cfg.nav.clone(), tour, graph)?;
    let body = SimpleBody::new(start, cfg.speed)?;

    // 4. Sim.
    let mut sim = SimBuilder::new(cfg.sim.clone(), controller, body)
        .goals(world::initial_goals())
        .collect_distance(cfg.nav.collect_distance)
        .events(script())
        .build()?;
    println!();

    // 5. Run.
    let mut summary = Summary { report_every: cfg.report_every, ..Summary::default() };
    let t0 = Instant::now();
    sim.run(&mut summary)?;
    let elapsed = t0.elapsed();

    // 6. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  distance travelled : {:.1}", sim.distance_travelled());
    println!("  state transitions  : {}", summary.transitions);
    println!("  halted ticks       : {}", summary.halted_ticks);
    println!("  goals left         : {}", sim.goals.len());
    println!();

    println!("{:<12} {:>8}", "State", "Ticks");
    println!("{}", "-".repeat(21));
    for (state, ticks) in &summary.ticks_in {
        println!("{state:<12} {ticks:>8}");
    }
    println!();

    println!("{:<8} {:<8} {:<24}", "Tick", "Goal", "Position");
    println!("{}", "-".repeat(40));
    for (tick, goal) in &summary.collected {
        println!("{:<8} {:<8} {:<24}", tick.to_string(), goal.id.to_string(), goal.position.to_string());
    }
    println!();

    println!("Final status:");
    println!("{}", serde_json::to_string_pretty(&sim.strategy.status())?);

    Ok(())
}
