//! Read-only per-tick snapshot passed to the navigation strategy.

use nav_core::{Tick, Vec3};
use nav_spatial::GoalCandidate;

/// Everything the controller may read during one tick.
///
/// Built by nav-sim from the body and the goal field immediately before the
/// decide phase.  The goal slice is a snapshot: the owner may add or remove
/// goals between ticks but never during one.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Seconds represented by one tick.
    pub tick_secs: f32,

    /// The agent's position at the start of the tick.
    pub position: Vec3,

    /// Distance the agent covers in one tick at its default speed.
    /// The controller derives its snap distance from this value.
    pub travel_per_tick: f32,

    /// Candidate goals currently in the world.
    pub goals: &'a [GoalCandidate],
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        tick:            Tick,
        tick_secs:       f32,
        position:        Vec3,
        travel_per_tick: f32,
        goals:           &'a [GoalCandidate],
    ) -> Self {
        Self { tick, tick_secs, position, travel_per_tick, goals }
    }
}
