//! Fluent builder for constructing a [`Sim`].

use nav_control::{NavConfig, NavigationStrategy};
use nav_core::{SimConfig, Tick, Vec3};
use nav_mobility::{MobileEntity, MotionIntegrator};

use crate::{EventSchedule, GoalField, Sim, SimError, SimEvent, SimResult};

/// Fluent builder for [`Sim<S, B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, tick duration
/// - `S: NavigationStrategy`: usually a
///   [`NavigationController`][nav_control::NavigationController]
/// - `B: MobileEntity`: the body being steered
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                 |
/// |-------------------------|-----------------------------------------|
/// | `.goals(it)`            | no goals                                |
/// | `.collect_distance(d)`  | `NavConfig::default().collect_distance` |
/// | `.events(schedule)`     | empty schedule                          |
/// | `.event(tick, e)`       | adds to the schedule                    |
///
/// The world's collect distance should match the controller's; a smaller
/// value leaves goals in place after the controller has turned back.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, controller, body)
///     .goals([Vec3::planar(4.0, 6.0)])
///     .event(120, SimEvent::Toggle(ModeToggle::Hunt))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: NavigationStrategy, B: MobileEntity> {
    config:           SimConfig,
    strategy:         S,
    body:             B,
    goals:            Vec<Vec3>,
    collect_distance: f32,
    events:           EventSchedule,
}

impl<S: NavigationStrategy, B: MobileEntity> SimBuilder<S, B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, strategy: S, body: B) -> Self {
        Self {
            config,
            strategy,
            body,
            goals:            Vec::new(),
            collect_distance: NavConfig::default().collect_distance,
            events:           EventSchedule::new(),
        }
    }

    /// Goals present from tick 0.  Ids are assigned in iteration order.
    pub fn goals<I: IntoIterator<Item = Vec3>>(mut self, goals: I) -> Self {
        self.goals.extend(goals);
        self
    }

    pub fn collect_distance(mut self, distance: f32) -> Self {
        self.collect_distance = distance;
        self
    }

    /// Replace the event schedule.
    pub fn events(mut self, events: EventSchedule) -> Self {
        self.events = events;
        self
    }

    /// Schedule one event.
    pub fn event(mut self, tick: u64, event: SimEvent) -> Self {
        self.events.push(Tick(tick), event);
        self
    }

    /// Validate inputs, populate the goal field and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim<S, B>> {
        self.config.validate()?;
        if !(self.collect_distance.is_finite() && self.collect_distance > 0.0) {
            return Err(SimError::Config(format!(
                "collect_distance must be finite and > 0, got {}",
                self.collect_distance
            )));
        }

        let mut goals = GoalField::new(self.collect_distance);
        for pos in self.goals {
            goals.spawn(pos);
        }

        let last_state = self.strategy.status().state;
        Ok(Sim {
            clock:      self.config.make_clock(),
            config:     self.config,
            strategy:   self.strategy,
            body:       self.body,
            goals,
            events:     self.events,
            integrator: MotionIntegrator::new(),
            last_state,
        })
    }
}
