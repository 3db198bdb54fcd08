//! `LoopPath`: the authored, cyclic patrol tour.

use nav_core::{SimRng, Vec3};
use nav_spatial::{GridPlacement, NavNode};

use crate::{TourError, TourResult};

/// An ordered, non-empty, cyclic sequence of waypoints plus a cursor.
///
/// Insertion order is tour order.  The only mutation after construction is
/// cursor movement; the waypoints themselves never change.
///
/// With the `serde` feature a deserialized tour goes through the same checks
/// as [`from_points`](Self::from_points), plus a cursor range check.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LoopPathRepr"))]
pub struct LoopPath {
    nodes:  Vec<NavNode>,
    cursor: usize,
}

impl LoopPath {
    /// Build a tour from explicit world positions.
    ///
    /// Fails with [`TourError::Empty`] when `points` is empty and with
    /// [`TourError::NonFinite`] when any coordinate is NaN or infinite.
    pub fn from_points(points: Vec<Vec3>) -> TourResult<Self> {
        if points.is_empty() {
            return Err(TourError::Empty);
        }
        if let Some((index, &point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(TourError::NonFinite { index, point });
        }
        Ok(Self {
            nodes:  points.into_iter().map(NavNode::new).collect(),
            cursor: 0,
        })
    }

    /// Build a tour from authored `(col, row)` grid cells.
    ///
    /// Each cell maps to `(col * spacing, height, row * spacing)` through
    /// `placement`, so a grid tour and the equivalent point tour are equal.
    pub fn from_grid(cells: &[(i32, i32)], placement: GridPlacement) -> TourResult<Self> {
        Self::from_points(
            cells
                .iter()
                .map(|&(col, row)| placement.to_world(col, row))
                .collect(),
        )
    }

    /// Move the cursor to a uniformly random waypoint.
    pub fn randomize_start(&mut self, rng: &mut SimRng) {
        self.cursor = rng.index(self.nodes.len());
    }

    /// The waypoint under the cursor.
    #[inline]
    pub fn current(&self) -> NavNode {
        self.nodes[self.cursor]
    }

    /// Advance the cursor by one, wrapping past the end, and return the new
    /// current waypoint.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> NavNode {
        self.cursor = (self.cursor + 1) % self.nodes.len();
        self.nodes[self.cursor]
    }

    /// The waypoint `next()` would return, without moving.
    pub fn peek_next(&self) -> NavNode {
        self.nodes[(self.cursor + 1) % self.nodes.len()]
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; tours are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Planar length of one full lap, including the closing leg.
    pub fn lap_length(&self) -> f32 {
        let n = self.nodes.len();
        (0..n)
            .map(|i| self.nodes[i].planar_distance(self.nodes[(i + 1) % n].position()))
            .sum()
    }
}

// ── Deserialization ───────────────────────────────────────────────────────────

/// Unchecked wire form of a [`LoopPath`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LoopPathRepr {
    nodes:  Vec<NavNode>,
    cursor: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<LoopPathRepr> for LoopPath {
    type Error = TourError;

    fn try_from(repr: LoopPathRepr) -> TourResult<Self> {
        let mut tour = Self::from_points(repr.nodes.iter().map(NavNode::position).collect())?;
        if repr.cursor >= tour.len() {
            return Err(TourError::CursorOutOfRange { cursor: repr.cursor, len: tour.len() });
        }
        tour.cursor = repr.cursor;
        Ok(tour)
    }
}
