//! Mapping from authored grid coordinates to world positions.

use nav_core::Vec3;

/// How a `(col, row)` grid cell maps into world space.
///
/// ```text
/// world = (col * spacing, height, row * spacing)
/// ```
///
/// Waypoint tours and grid-shaped navigation graphs are both authored in
/// cell coordinates and share one placement so that they line up.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPlacement {
    /// World units between adjacent cells.
    pub spacing: f32,
    /// Fixed vertical placement of every generated position.
    pub height: f32,
}

impl GridPlacement {
    pub const fn new(spacing: f32, height: f32) -> Self {
        Self { spacing, height }
    }

    #[inline]
    pub fn to_world(&self, col: i32, row: i32) -> Vec3 {
        Vec3::new(col as f32 * self.spacing, self.height, row as f32 * self.spacing)
    }
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self { spacing: 1.0, height: 0.0 }
    }
}
