//! `nav-mobility`: the body side of navigation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `MotionState`: position, heading, current and default speed      |
//! | [`body`]    | `MobileEntity` trait, `SimpleBody`                                |
//! | [`engine`]  | `MotionIntegrator`: executes a tick's `Intent`s against a body   |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                              |
//!
//! # Movement model (continuous planar stepping)
//!
//! Speeds are in world units per second.  Each tick the integrator:
//!
//! 1. turns the body to face the `FaceToward` target (yaw about the vertical
//!    axis, so height differences never tilt the body);
//! 2. moves it toward the `MoveToward` target by at most
//!    `speed × tick_secs` in the ground plane, never overshooting;
//! 3. applies `Halt` / `RestoreSpeed` to the current speed.
//!
//! The body keeps its own height: terrain following belongs to whatever
//! owns the world, not to navigation.

pub mod body;
pub mod engine;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use body::{MobileEntity, SimpleBody};
pub use engine::{MotionIntegrator, MotionReport};
pub use error::{MobilityError, MobilityResult};
pub use state::MotionState;
