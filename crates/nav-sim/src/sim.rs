//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace, warn};

use nav_control::{ModeToggle, NavState, NavigationStrategy, TickContext};
use nav_core::{SimClock, SimConfig, Tick};
use nav_mobility::{MobileEntity, MotionIntegrator};
use nav_spatial::GoalCandidate;

use crate::{EventSchedule, GoalField, SimEvent, SimObserver, SimResult};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S, B>` owns one navigation strategy, the body it steers and the
/// world around them, and drives the four-phase tick loop:
///
/// 1. **Events**: scripted toggles, goal spawns/removals and tick-duration
///    changes due this tick are applied.
/// 2. **Decide**: the strategy sees a [`TickContext`] snapshot and returns
///    its intents.
/// 3. **Act**: the [`MotionIntegrator`] executes the intents on the body.
/// 4. **Collect**: goals within collect distance of the body's new position
///    are removed from the world.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: NavigationStrategy, B: MobileEntity> {
    /// Global configuration (total ticks, seed, tick duration).
    pub config: SimConfig,

    /// Simulation clock: tracks the current tick and the tick duration.
    pub clock: SimClock,

    /// The navigation strategy.  Called exactly once per tick.
    pub strategy: S,

    /// The body the strategy steers.
    pub body: B,

    /// Live goals.  The strategy only sees a read-only snapshot.
    pub goals: GoalField,

    /// Scripted events still to fire.
    pub events: EventSchedule,

    /// Executes intents and tracks the distance travelled.
    pub integrator: MotionIntegrator,

    /// Controller state observed at the end of the previous tick.
    pub(crate) last_state: NavState,
}

impl<S: NavigationStrategy, B: MobileEntity> Sim<S, B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Run until `done` returns `true` after a tick, or `limit` ticks have
    /// passed.  Returns the number of ticks executed.
    pub fn run_until<O, F>(&mut self, limit: u64, observer: &mut O, mut done: F) -> SimResult<u64>
    where
        O: SimObserver,
        F: FnMut(&Self) -> bool,
    {
        for n in 1..=limit {
            self.step(observer)?;
            if done(self) {
                return Ok(n);
            }
        }
        Ok(limit)
    }

    /// Total planar distance the body has covered.
    pub fn distance_travelled(&self) -> f64 {
        self.integrator.odometer()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let collected = self.process_tick(now);
        for goal in &collected {
            observer.on_goal_collected(now, goal);
        }

        let status = self.strategy.status();
        if status.state != self.last_state {
            observer.on_state_change(now, self.last_state, status.state);
            self.last_state = status.state;
        }
        observer.on_tick_end(now, &status);

        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> Vec<GoalCandidate> {
        // ── Phase 1: scripted events ──────────────────────────────────────
        let toggle = match self.events.drain_tick(now) {
            Some(events) => self.apply_events(now, events),
            None         => None,
        };

        // ── Phase 2: decide ───────────────────────────────────────────────
        //
        // Field-level borrows: the context holds the goal slice while the
        // strategy is borrowed mutably.
        let tick_secs = self.clock.tick_secs();
        let ctx = TickContext::new(
            now,
            tick_secs,
            self.body.position(),
            self.body.travel_per_tick(tick_secs),
            self.goals.candidates(),
        );
        let intents = self.strategy.tick(&ctx, toggle);

        // ── Phase 3: act ──────────────────────────────────────────────────
        let report = self.integrator.apply(&mut self.body, &intents, tick_secs);
        trace!(tick = %now, moved = report.moved, intents = intents.len(), "motion applied");

        // ── Phase 4: collect ──────────────────────────────────────────────
        let collected = self.goals.collect_near(self.body.position());
        for goal in &collected {
            info!(tick = %now, goal = %goal.id, at = %goal.position, "goal collected");
        }

        collected
    }

    /// Apply this tick's events and return the toggle to deliver, if any.
    fn apply_events(&mut self, now: Tick, events: Vec<SimEvent>) -> Option<ModeToggle> {
        let mut toggle = None;
        for event in events {
            match event {
                SimEvent::Toggle(t) => {
                    if toggle.is_some() {
                        debug!(tick = %now, "multiple toggles this tick, last one wins");
                    }
                    toggle = Some(t);
                }
                SimEvent::SpawnGoal(pos) => {
                    let id = self.goals.spawn(pos);
                    debug!(tick = %now, goal = %id, at = %pos, "goal spawned");
                }
                SimEvent::RemoveGoal(id) => {
                    if !self.goals.remove(id) {
                        debug!(tick = %now, goal = %id, "remove for unknown goal ignored");
                    }
                }
                SimEvent::SetTickDuration(0) => {
                    warn!(tick = %now, "ignoring zero tick duration");
                }
                SimEvent::SetTickDuration(ms) => {
                    if self.clock.set_tick_duration_ms(ms) {
                        info!(tick = %now, ms, "tick duration changed");
                    }
                }
            }
        }
        toggle
    }
}
