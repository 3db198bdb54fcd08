//! Motion intents: what the controller asks the body to do this tick.

use nav_core::Vec3;

/// One instruction for the mobile entity.
///
/// Intents are produced by [`NavigationStrategy::tick`][crate::NavigationStrategy::tick]
/// and executed in order by the motion integrator (nav-mobility).  A normal
/// tick yields `FaceToward(p)` followed by `MoveToward(p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Turn to face `p` before moving.
    FaceToward(Vec3),

    /// Step toward `p` at the body's current speed.
    MoveToward(Vec3),

    /// Force travel speed to zero.  The body stays in place until a
    /// `RestoreSpeed` arrives.
    Halt,

    /// Return travel speed to the body's default.
    RestoreSpeed,
}

impl Intent {
    /// The world position this intent refers to, if any.
    pub fn target(&self) -> Option<Vec3> {
        match self {
            Intent::FaceToward(p) | Intent::MoveToward(p) => Some(*p),
            Intent::Halt | Intent::RestoreSpeed => None,
        }
    }
}
