//! `nav-sim`: tick loop orchestrator for the patrol navigation workspace.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Events  : drain EventSchedule for this tick:
//!                  Toggle(t)            → delivered to the strategy (last wins)
//!                  SpawnGoal / RemoveGoal → GoalField updated
//!                  SetTickDuration(ms)  → SimClock updated (0 is ignored)
//!   ② Decide  : NavigationStrategy::tick(TickContext, toggle) → intents
//!   ③ Act     : MotionIntegrator applies the intents to the body
//!   ④ Collect : goals within collect distance of the body are removed
//! ```
//!
//! The strategy never mutates the world; it only reads the goal snapshot and
//! returns intents.  All world changes happen in phases ①, ③ and ④.
//!
//! # Modules
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`sim`]      | `Sim` and the tick loop                       |
//! | [`builder`]  | `SimBuilder`                                  |
//! | [`goals`]    | `GoalField`, the world's goal set             |
//! | [`events`]   | `SimEvent`, `EventSchedule`                   |
//! | [`observer`] | `SimObserver`, `NoopObserver`, `TransitionLog`|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_control::NavigationController;
//! use nav_mobility::SimpleBody;
//! use nav_sim::{NoopObserver, SimBuilder};
//!
//! let controller = NavigationController::with_graph(nav_cfg, tour, graph)?;
//! let body = SimpleBody::new(start, 4.0)?;
//! let mut sim = SimBuilder::new(sim_cfg, controller, body).goals(goals).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod events;
pub mod goals;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use events::{EventSchedule, SimEvent};
pub use goals::GoalField;
pub use observer::{NoopObserver, SimObserver, TransitionLog};
pub use sim::Sim;
