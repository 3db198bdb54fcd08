//! Points of interest and nearest-candidate selection.

use nav_core::{GoalId, Vec3};

use crate::NavNode;

/// One point of interest in the externally owned candidate set.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalCandidate {
    pub id:       GoalId,
    pub position: Vec3,
}

impl GoalCandidate {
    pub fn new(id: GoalId, position: Vec3) -> Self {
        Self { id, position }
    }

    pub fn node(&self) -> NavNode {
        NavNode::new(self.position)
    }
}

/// Read-only view over one tick's snapshot of the candidate set.
///
/// The selector never mutates or caches candidates; the owner may add and
/// remove goals freely between ticks.
#[derive(Copy, Clone, Debug)]
pub struct GoalSelector<'a> {
    candidates: &'a [GoalCandidate],
}

impl<'a> GoalSelector<'a> {
    pub fn new(candidates: &'a [GoalCandidate]) -> Self {
        Self { candidates }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// The candidate nearest to `from` in the ground plane.
    ///
    /// `radius == 0.0` means "no limit"; otherwise only candidates at a
    /// planar distance `<= radius` qualify.  Equidistant candidates resolve
    /// to the lower `GoalId`.  Returns `None` when the set is empty or
    /// nothing qualifies.
    pub fn closest_node(&self, from: Vec3, radius: f32) -> Option<GoalCandidate> {
        let unlimited = radius <= 0.0;
        self.candidates
            .iter()
            .map(|c| (from.planar_distance(c.position), c))
            .filter(|(d, _)| unlimited || *d <= radius)
            .min_by(|(da, a), (db, b)| da.total_cmp(db).then(a.id.cmp(&b.id)))
            .map(|(_, c)| *c)
    }

    /// The candidate with `id`, if it is still in the snapshot.
    pub fn get(&self, id: GoalId) -> Option<GoalCandidate> {
        self.candidates.iter().find(|c| c.id == id).copied()
    }
}
