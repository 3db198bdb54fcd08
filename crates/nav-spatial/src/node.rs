//! `NavNode`: a single addressable point in the navigable world.

use nav_core::Vec3;

/// A navigation vertex holding a world-space position.
///
/// Nodes are plain values: copy them freely between the graph, a patrol
/// tour, and search results.  Two nodes are equal when their positions are.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavNode {
    position: Vec3,
}

impl NavNode {
    #[inline]
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Distance to `other` in the horizontal plane.  Used for every arrival
    /// and proximity check; vertical separation never matters.
    #[inline]
    pub fn planar_distance(&self, other: Vec3) -> f32 {
        self.position.planar_distance(other)
    }
}

impl std::fmt::Display for NavNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NavNode{}", self.position)
    }
}
