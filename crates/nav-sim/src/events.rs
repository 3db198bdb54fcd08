//! `EventSchedule`: scripted world events keyed by tick.
//!
//! Stands in for everything outside the agent that changes over time: an
//! operator flipping the mode, goals appearing or being taken by someone
//! else, the host changing its frame time.  Events for tick `t` are applied
//! before the controller's decide phase of tick `t`.

use std::collections::BTreeMap;

use nav_control::ModeToggle;
use nav_core::{GoalId, Tick, Vec3};

/// One scripted change to the world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    /// Deliver a mode toggle with this tick.  If several land on one tick
    /// the last one wins.
    Toggle(ModeToggle),

    /// Add a goal at a world position.
    SpawnGoal(Vec3),

    /// Remove a goal without it being collected by the agent.
    RemoveGoal(GoalId),

    /// Change the simulated duration of one tick.
    SetTickDuration(u32),
}

/// Sparse map of ticks to the events that fire on them.
#[derive(Clone, Debug, Default)]
pub struct EventSchedule {
    inner: BTreeMap<Tick, Vec<SimEvent>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `tick`.  Events on the same tick keep insertion
    /// order.
    pub fn push(&mut self, tick: Tick, event: SimEvent) {
        self.inner.entry(tick).or_default().push(event);
        self.total += 1;
    }

    /// Builder-style [`push`](Self::push).
    pub fn at(mut self, tick: u64, event: SimEvent) -> Self {
        self.push(Tick(tick), event);
        self
    }

    /// Remove and return all events scheduled for exactly `tick`.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<SimEvent>> {
        let events = self.inner.remove(&tick)?;
        self.total -= events.len();
        Some(events)
    }

    /// The earliest tick with at least one event, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
