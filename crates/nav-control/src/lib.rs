//! `nav-control`: the patrol/seek navigation controller.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`intent`]      | `Intent` enum (`FaceToward`, `MoveToward`, `Halt`, `RestoreSpeed`) |
//! | [`context`]     | `TickContext<'a>`: read-only per-tick snapshot               |
//! | [`config`]      | `NavConfig`, `NavMode`, `ModeToggle`                          |
//! | [`status`]      | `NavState`, `NavStatus` (diagnostic view)                     |
//! | [`strategy`]    | `NavigationStrategy` trait                                    |
//! | [`planner`]     | `RoutePlanner` trait, `InlinePlanner`, `BackgroundPlanner`    |
//! | [`controller`]  | `NavigationController`: the three-state machine              |
//! | [`error`]       | `ControlError`, `ControlResult<T>`                            |
//!
//! # Design notes
//!
//! The tick is split the same way everywhere in the workspace:
//!
//! 1. **Decide**: `NavigationStrategy::tick` reads a `&TickContext` (agent
//!    position, per-tick travel distance, goal snapshot) plus an optional
//!    `ModeToggle`, updates only the strategy's own state, and returns a
//!    `Vec<Intent>`.
//!
//! 2. **Apply**: the caller (nav-mobility's integrator, driven by nav-sim)
//!    executes the intents against the body.
//!
//! The controller never touches the body or the goal set directly, so it can
//! be tested by feeding hand-written contexts.

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod intent;
pub mod planner;
pub mod status;
pub mod strategy;


pub use config::{ModeToggle, NavConfig, NavMode};
pub use context::TickContext;
pub use controller::NavigationController;
pub use error::{ControlError, ControlResult};
pub use intent::Intent;
pub use planner::{BackgroundPlanner, InlinePlanner, RoutePlanner, SearchRequest};
pub use status::{NavState, NavStatus};
pub use strategy::NavigationStrategy;
