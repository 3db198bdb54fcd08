//! Kinematic state of one body.

use nav_core::Vec3;

/// Where a body is, which way it faces, and how fast it moves.
///
/// `speed` is the current travel speed; `default_speed` is what
/// `RestoreSpeed` returns it to.  Both are world units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionState {
    pub position:      Vec3,
    /// Heading about the vertical axis, radians; `0` faces +z.
    pub yaw:           f32,
    pub speed:         f32,
    pub default_speed: f32,
}

impl MotionState {
    /// A body at rest at `position`, ready to move at `default_speed`.
    #[inline]
    pub fn at(position: Vec3, default_speed: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            speed: default_speed,
            default_speed,
        }
    }

    /// Distance covered in one tick of `tick_secs` at the default speed.
    ///
    /// Uses the default rather than the current speed so that the
    /// controller's snap distance does not collapse to zero while halted.
    #[inline]
    pub fn travel_per_tick(&self, tick_secs: f32) -> f32 {
        self.default_speed * tick_secs
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.speed == 0.0
    }
}
