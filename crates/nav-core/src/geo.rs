//! World-space vector type and planar distance utilities.
//!
//! `Vec3` uses `f32` components.  The world is laid out on the `x`/`z`
//! ground plane with `y` as the vertical axis; terrain height only ever
//! shows up in `y`.
//!
//! Every proximity check in the navigation stack goes through
//! [`Vec3::planar_distance`], which ignores `y`.  An agent walking over
//! uneven terrain therefore "arrives" at a waypoint as soon as it is above or
//! below it, regardless of how far apart the two heights are.

/// A point in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A point on the ground plane at height `0`.
    #[inline]
    pub const fn planar(x: f32, z: f32) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Distance in the horizontal `x`/`z` plane.  The vertical axis is
    /// ignored entirely.
    #[inline]
    pub fn planar_distance(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Yaw (radians, about the vertical axis) that faces from `self` toward
    /// `target`.  `0` faces `+z`; positive angles turn toward `+x`.
    ///
    /// Returns `None` when the two points coincide in the ground plane.
    pub fn yaw_toward(self, target: Vec3) -> Option<f32> {
        let dx = target.x - self.x;
        let dz = target.z - self.z;
        if dx == 0.0 && dz == 0.0 {
            return None;
        }
        Some(dx.atan2(dz))
    }

    /// Step from `self` toward `target` in the ground plane by at most
    /// `max_step`.  Never overshoots; `y` is carried over from `self`.
    pub fn step_toward(self, target: Vec3, max_step: f32) -> Vec3 {
        let dist = self.planar_distance(target);
        if dist <= max_step || dist == 0.0 {
            return Vec3::new(target.x, self.y, target.z);
        }
        let t = max_step / dist;
        Vec3::new(
            self.x + (target.x - self.x) * t,
            self.y,
            self.z + (target.z - self.z) * t,
        )
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
