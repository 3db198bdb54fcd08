//! The `MobileEntity` capability and a simple implementation.

use nav_core::Vec3;

use crate::{MobilityError, MobilityResult, MotionState};

/// Anything the navigation controller can steer.
///
/// This is the body half of the body/strategy split: a renderer's model, a
/// physics proxy, or [`SimpleBody`] in tests all implement it, and the same
/// controller drives any of them.
pub trait MobileEntity: Send {
    fn position(&self) -> Vec3;

    /// Turn to face `target` in the ground plane.  No-op if `target` is
    /// directly above or below.
    fn face_toward(&mut self, target: Vec3);

    /// Move toward `target` for one tick of `tick_secs` at the current speed.
    /// Returns the planar distance actually covered.
    fn move_toward(&mut self, target: Vec3, tick_secs: f32) -> f32;

    /// Force the current speed to zero.
    fn halt(&mut self);

    /// Return to the default speed.
    fn restore_default_speed(&mut self);

    /// Distance covered per tick at the default speed.
    fn travel_per_tick(&self, tick_secs: f32) -> f32;
}

/// A point body that moves in straight planar steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBody {
    state: MotionState,
}

impl SimpleBody {
    /// A body at `position` with the given default speed (units per second).
    pub fn new(position: Vec3, default_speed: f32) -> MobilityResult<Self> {
        if !default_speed.is_finite() || default_speed < 0.0 {
            return Err(MobilityError::InvalidSpeed(default_speed));
        }
        Ok(Self { state: MotionState::at(position, default_speed) })
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn yaw(&self) -> f32 {
        self.state.yaw
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    /// Change the default speed.  The current speed follows unless halted.
    pub fn set_default_speed(&mut self, speed: f32) -> MobilityResult<()> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(MobilityError::InvalidSpeed(speed));
        }
        let halted = self.state.is_halted();
        self.state.default_speed = speed;
        if !halted {
            self.state.speed = speed;
        }
        Ok(())
    }

    /// Teleport without moving through the world (initial placement).
    pub fn place(&mut self, position: Vec3) {
        self.state.position = position;
    }
}

impl MobileEntity for SimpleBody {
    fn position(&self) -> Vec3 {
        self.state.position
    }

    fn face_toward(&mut self, target: Vec3) {
        if let Some(yaw) = self.state.position.yaw_toward(target) {
            self.state.yaw = yaw;
        }
    }

    fn move_toward(&mut self, target: Vec3, tick_secs: f32) -> f32 {
        let from = self.state.position;
        self.state.position = from.step_toward(target, self.state.speed * tick_secs);
        from.planar_distance(self.state.position)
    }

    fn halt(&mut self) {
        self.state.speed = 0.0;
    }

    fn restore_default_speed(&mut self) {
        self.state.speed = self.state.default_speed;
    }

    fn travel_per_tick(&self, tick_secs: f32) -> f32 {
        self.state.travel_per_tick(tick_secs)
    }
}
