//! Path search trait and default A* implementation.
//!
//! # Pluggability
//!
//! The controller reaches path search only through the [`PathFinder`] trait,
//! so applications can swap in a different search (jump-point, hierarchical,
//! cached) without touching the state machine.
//!
//! # Endpoints
//!
//! Agents and goals sit at arbitrary world positions, not on graph vertices.
//! Both endpoints are snapped to their nearest node through the graph's
//! R-tree.  The search runs node-to-node; when the goal position does not
//! coincide with its snapped node, the exact goal position is appended as a
//! final leg so the agent ends up on the goal itself.
//!
//! # Determinism
//!
//! A* is a pure function of graph and endpoints.  Open-set ties break on
//! lower `f`, then lower `h`, then earlier insertion (a monotone sequence
//! number), so equal-cost alternatives always resolve the same way.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use nav_core::{NodeId, Vec3};

use crate::{NavGraph, NavNode, SearchRoute, SpatialError, SpatialResult};

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a search can be shipped to a
/// background worker thread.
pub trait PathFinder: Send + Sync {
    /// Compute a route from `from` to `goal` through `graph`.
    ///
    /// Returns [`SpatialError::NoRoute`] when the endpoints lie in
    /// disconnected components and [`SpatialError::EmptyGraph`] when there is
    /// nothing to search.  Both are recoverable for the caller.
    fn find_path(
        &self,
        graph: &NavGraph,
        from:  Vec3,
        goal:  NavNode,
    ) -> SpatialResult<SearchRoute>;
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// Classic A* over the CSR graph with a planar-distance heuristic.
///
/// The heuristic never overestimates because every edge costs at least the
/// planar distance it spans (see [`crate::network`]).
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarPathFinder;

impl PathFinder for AStarPathFinder {
    fn find_path(
        &self,
        graph: &NavGraph,
        from:  Vec3,
        goal:  NavNode,
    ) -> SpatialResult<SearchRoute> {
        let start = graph.snap_to_node(from).ok_or(SpatialError::EmptyGraph)?;
        let end   = graph.snap_to_node(goal.position()).ok_or(SpatialError::EmptyGraph)?;

        let (mut nodes, mut cost) = astar(graph, start, end)?;

        let last = nodes[nodes.len() - 1];
        if last.position() != goal.position() {
            cost += last.planar_distance(goal.position());
            nodes.push(goal);
        }
        Ok(SearchRoute::new(nodes, cost))
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Open-set entry.  `Ord` is reversed so `BinaryHeap` pops the best entry.
struct OpenEntry {
    f:    f32,
    h:    f32,
    seq:  u64,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[inline]
fn heuristic(graph: &NavGraph, node: NodeId, goal: NodeId) -> f32 {
    graph.nodes[node.index()].planar_distance(graph.nodes[goal.index()].position())
}

/// Node-to-node A*.  Returns the vertex sequence (start and goal inclusive)
/// and its total edge cost.
fn astar(graph: &NavGraph, start: NodeId, goal: NodeId) -> SpatialResult<(Vec<NavNode>, f32)> {
    if start == goal {
        return Ok((vec![graph.nodes[start.index()]], 0.0));
    }

    let n = graph.node_count();
    let mut g_score   = vec![f32::INFINITY; n];
    let mut came_from = vec![NodeId::INVALID; n];
    let mut closed    = vec![false; n];
    let mut seq: u64  = 0;

    g_score[start.index()] = 0.0;

    let mut open = BinaryHeap::new();
    let h0 = heuristic(graph, start, goal);
    open.push(OpenEntry { f: h0, h: h0, seq, node: start });

    while let Some(OpenEntry { node, .. }) = open.pop() {
        if node == goal {
            let path = reconstruct(graph, &came_from, goal);
            return Ok((path, g_score[goal.index()]));
        }
        if closed[node.index()] {
            continue;
        }
        closed[node.index()] = true;

        let g = g_score[node.index()];
        for edge in graph.out_edges(node) {
            let next = graph.edge_to[edge.index()];
            if closed[next.index()] {
                continue;
            }
            let tentative = g + graph.edge_cost[edge.index()];
            if tentative < g_score[next.index()] {
                g_score[next.index()]   = tentative;
                came_from[next.index()] = node;
                let h = heuristic(graph, next, goal);
                seq += 1;
                open.push(OpenEntry { f: tentative + h, h, seq, node: next });
            }
        }
    }

    Err(SpatialError::NoRoute { from: start, to: goal })
}

fn reconstruct(graph: &NavGraph, came_from: &[NodeId], goal: NodeId) -> Vec<NavNode> {
    let mut path = vec![graph.nodes[goal.index()]];
    let mut cur = goal;
    while came_from[cur.index()] != NodeId::INVALID {
        cur = came_from[cur.index()];
        path.push(graph.nodes[cur.index()]);
    }
    path.reverse();
    path
}
