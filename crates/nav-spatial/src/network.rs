//! Navigation graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Both edge arrays (`edge_to`, `edge_cost`) are sorted by source
//! node and indexed by `EdgeId`, so iterating a node's neighbours in the A*
//! inner loop is a contiguous scan.
//!
//! # Edge costs
//!
//! A* uses planar distance as its heuristic, which is only admissible when
//! no edge is cheaper than the straight-line distance it spans.
//! [`NavGraphBuilder::add_link`] uses exactly that distance; custom costs
//! passed to [`NavGraphBuilder::add_directed_edge`] must not be lower.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the ground-plane `[x, z]` coordinates maps an
//! arbitrary world position to the nearest `NodeId`.  Search endpoints (agent
//! position, goal position) are snapped with it.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use nav_core::{EdgeId, NodeId, Vec3};

use crate::{GridPlacement, NavNode, SpatialError, SpatialResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [x, z]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared planar distance; height plays no part in snapping.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dz = self.point[1] - point[1];
        dx * dx + dz * dz
    }
}

// ── NavGraph ──────────────────────────────────────────────────────────────────

/// Directed navigation graph in CSR format plus a spatial index for snapping.
///
/// Edge arrays are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`NavGraphBuilder`].
pub struct NavGraph {
    /// Vertex of each node.  Indexed by `NodeId`.
    pub nodes: Vec<NavNode>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Traversal cost of each edge, in world units.
    pub edge_cost: Vec<f32>,

    spatial_idx: RTree<NodeEntry>,
}

impl NavGraph {
    /// A graph with no nodes.  Every search against it fails with
    /// [`SpatialError::EmptyGraph`].
    pub fn empty() -> Self {
        NavGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> SpatialResult<NavNode> {
        self.nodes
            .get(id.index())
            .copied()
            .ok_or(SpatialError::NodeNotFound(id))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// `EdgeId`s of all outgoing edges from `node`.  No allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node nearest to `pos` in the ground plane.
    ///
    /// Returns `None` only if the graph has no nodes.
    pub fn snap_to_node(&self, pos: Vec3) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.z])
            .map(|e| e.id)
    }

    /// Up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: Vec3, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.z])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── NavGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NavGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use nav_core::Vec3;
/// use nav_spatial::NavGraphBuilder;
///
/// let mut b = NavGraphBuilder::new();
/// let a = b.add_node(Vec3::planar(0.0, 0.0));
/// let c = b.add_node(Vec3::planar(3.0, 4.0));
/// b.add_link(a, c); // cost 5.0 both ways
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct NavGraphBuilder {
    nodes:     Vec<Vec3>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to:   NodeId,
    cost: f32,
}

impl NavGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Vec3) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge with an explicit cost.
    ///
    /// `cost` must be at least the planar distance between the endpoints.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, cost: f32) {
        debug_assert!(
            cost + 1e-4 >= self.nodes[from.index()].planar_distance(self.nodes[to.index()]),
            "edge cost below planar distance breaks the A* heuristic"
        );
        self.raw_edges.push(RawEdge { from, to, cost });
    }

    /// Bidirectional link costed at the planar distance between `a` and `b`.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) {
        let cost = self.nodes[a.index()].planar_distance(self.nodes[b.index()]);
        self.add_link_with_cost(a, b, cost);
    }

    /// Bidirectional link with an explicit cost.
    pub fn add_link_with_cost(&mut self, a: NodeId, b: NodeId, cost: f32) {
        self.add_directed_edge(a, b, cost);
        self.add_directed_edge(b, a, cost);
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Build a regular 8-connected grid of `cols × rows` cells.
    ///
    /// Cells for which `blocked(col, row)` returns `true` get no node.
    /// Diagonal links are only added when both orthogonal neighbours they
    /// pass between are open, so paths never clip a blocked corner.
    pub fn grid<F>(cols: u32, rows: u32, placement: GridPlacement, blocked: F) -> NavGraph
    where
        F: Fn(u32, u32) -> bool,
    {
        let cells = cols as usize * rows as usize;
        let mut b = Self::with_capacity(cells, cells * 8);
        let mut cell_node: Vec<Option<NodeId>> = vec![None; cells];
        let cell = |c: u32, r: u32| r as usize * cols as usize + c as usize;

        for r in 0..rows {
            for c in 0..cols {
                if !blocked(c, r) {
                    cell_node[cell(c, r)] =
                        Some(b.add_node(placement.to_world(c as i32, r as i32)));
                }
            }
        }

        for r in 0..rows {
            for c in 0..cols {
                let Some(here) = cell_node[cell(c, r)] else { continue };
                let right = (c + 1 < cols).then(|| cell_node[cell(c + 1, r)]).flatten();
                let down  = (r + 1 < rows).then(|| cell_node[cell(c, r + 1)]).flatten();

                if let Some(n) = right {
                    b.add_link(here, n);
                }
                if let Some(n) = down {
                    b.add_link(here, n);
                }
                // Down-right diagonal: needs both right and down open.
                if let (Some(_), Some(_)) = (right, down) {
                    if let Some(n) = cell_node[cell(c + 1, r + 1)] {
                        b.add_link(here, n);
                    }
                }
                // Down-left diagonal: needs left and down open.
                if c > 0 && r + 1 < rows {
                    let left = cell_node[cell(c - 1, r)];
                    if let (Some(_), Some(_), Some(n)) = (left, down, cell_node[cell(c - 1, r + 1)]) {
                        b.add_link(here, n);
                    }
                }
            }
        }

        b.build()
    }

    /// Consume the builder and produce a [`NavGraph`].
    ///
    /// O(E log E) for the edge sort + O(N log N) for the R-tree bulk load.
    pub fn build(self) -> NavGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Stable sort keeps insertion order among a node's edges, which keeps
        // A* neighbour expansion (and therefore tie-breaking) reproducible.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_to:   Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_cost: Vec<f32>    = raw.iter().map(|e| e.cost).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, pos)| NodeEntry {
                point: [pos.x, pos.z],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        NavGraph {
            nodes: self.nodes.into_iter().map(NavNode::new).collect(),
            node_out_start,
            edge_to,
            edge_cost,
            spatial_idx,
        }
    }
}

impl Default for NavGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
