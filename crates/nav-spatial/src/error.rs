//! Spatial-subsystem error type.

use thiserror::Error;

use nav_core::NodeId;

/// Errors produced by `nav-spatial`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpatialError {
    /// The open set emptied without reaching the goal.  Recoverable: the
    /// caller keeps its current mode and may retry later.
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("navigation graph has no nodes")]
    EmptyGraph,

    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
