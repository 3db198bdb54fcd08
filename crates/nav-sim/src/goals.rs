//! `GoalField`: the world's set of points of interest.

use nav_core::{GoalId, Vec3};
use nav_spatial::GoalCandidate;

/// Owns the live goals and decides when the agent has collected one.
///
/// The controller only ever sees [`candidates`](Self::candidates) as a
/// read-only snapshot.  Collection is the world's decision: after motion,
/// every goal within `collect_distance` (planar, inclusive) of the body is
/// removed.
#[derive(Clone, Debug)]
pub struct GoalField {
    goals:            Vec<GoalCandidate>,
    next_id:          u32,
    collect_distance: f32,
    collected:        usize,
}

impl GoalField {
    pub fn new(collect_distance: f32) -> Self {
        Self { goals: Vec::new(), next_id: 0, collect_distance, collected: 0 }
    }

    /// Add a goal and return its fresh id.  Ids are never reused.
    pub fn spawn(&mut self, position: Vec3) -> GoalId {
        let id = GoalId(self.next_id);
        self.next_id += 1;
        self.goals.push(GoalCandidate::new(id, position));
        id
    }

    /// Remove a goal without collecting it.  Returns `false` if absent.
    pub fn remove(&mut self, id: GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }

    /// Remove and return every goal within collect distance of `position`.
    pub fn collect_near(&mut self, position: Vec3) -> Vec<GoalCandidate> {
        let reach = self.collect_distance;
        let (taken, kept): (Vec<_>, Vec<_>) = self
            .goals
            .iter()
            .partition(|g| g.position.planar_distance(position) <= reach);
        self.goals = kept;
        self.collected += taken.len();
        taken
    }

    pub fn candidates(&self) -> &[GoalCandidate] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Goals collected by the agent so far.
    pub fn collected(&self) -> usize {
        self.collected
    }

    pub fn collect_distance(&self) -> f32 {
        self.collect_distance
    }
}
