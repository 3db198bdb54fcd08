//! `SearchRoute`: the node sequence produced by one path search.

use nav_core::Vec3;

use crate::NavNode;

/// An ordered, non-cyclic node sequence plus a cursor.
///
/// The cursor starts on the first node.  Advancing past the last node does
/// not wrap: [`advance`](Self::advance) returns `None` and the cursor stays
/// on the final node, which the controller reads as "arrived".
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRoute {
    nodes:      Vec<NavNode>,
    cursor:     usize,
    total_cost: f32,
}

impl SearchRoute {
    /// Build a route from a non-empty node list.
    ///
    /// # Panics
    ///
    /// Panics if `nodes` is empty.
    pub fn new(nodes: Vec<NavNode>, total_cost: f32) -> Self {
        assert!(!nodes.is_empty(), "a search route needs at least one node");
        Self { nodes, cursor: 0, total_cost }
    }

    /// The node currently being travelled to.
    #[inline]
    pub fn current(&self) -> NavNode {
        self.nodes[self.cursor]
    }

    /// Move the cursor to the next node and return it, or `None` if the
    /// cursor is already on the final node.
    pub fn advance(&mut self) -> Option<NavNode> {
        if self.cursor + 1 >= self.nodes.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.nodes[self.cursor])
    }

    /// `true` once the cursor sits on the final node.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cursor + 1 == self.nodes.len()
    }

    /// The final node of the route.
    #[inline]
    pub fn destination(&self) -> NavNode {
        self.nodes[self.nodes.len() - 1]
    }

    /// Nodes not yet reached, counting the current one.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.nodes.len() - self.cursor
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; routes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Sum of edge costs along the route, in world units.
    pub fn total_cost(&self) -> f32 {
        self.total_cost
    }

    /// Planar length of the polyline through all nodes.
    pub fn planar_length(&self) -> f32 {
        self.nodes
            .windows(2)
            .map(|w| w[0].planar_distance(w[1].position()))
            .sum()
    }

    /// Positions in traversal order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.nodes.iter().map(NavNode::position)
    }
}
