//! Simulation observer trait for progress reporting and data collection.

use nav_control::{NavState, NavStatus};
use nav_core::{GoalId, Tick};
use nav_spatial::GoalCandidate;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, status: &NavStatus) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {status}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before scripted events fire.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the controller's status after the
    /// decide phase.
    fn on_tick_end(&mut self, _tick: Tick, _status: &NavStatus) {}

    /// Called when the controller's state differs from the previous tick.
    fn on_state_change(&mut self, _tick: Tick, _from: NavState, _to: NavState) {}

    /// Called for every goal the agent collected this tick.
    fn on_goal_collected(&mut self, _tick: Tick, _goal: &GoalCandidate) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Records state transitions and goal collections in tick order.
#[derive(Clone, Debug, Default)]
pub struct TransitionLog {
    pub transitions: Vec<(Tick, NavState, NavState)>,
    pub collected:   Vec<(Tick, GoalId)>,
    pub ticks:       u64,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence of states entered, starting with the first transition's
    /// source state.
    pub fn states(&self) -> Vec<NavState> {
        let mut out = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(&(_, from, _)) = self.transitions.first() {
            out.push(from);
        }
        out.extend(self.transitions.iter().map(|&(_, _, to)| to));
        out
    }
}

impl SimObserver for TransitionLog {
    fn on_tick_end(&mut self, _tick: Tick, _status: &NavStatus) {
        self.ticks += 1;
    }

    fn on_state_change(&mut self, tick: Tick, from: NavState, to: NavState) {
        self.transitions.push((tick, from, to));
    }

    fn on_goal_collected(&mut self, tick: Tick, goal: &GoalCandidate) {
        self.collected.push((tick, goal.id));
    }
}
