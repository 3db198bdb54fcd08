//! `nav-spatial`: navigation graph, spatial indexing, and path search.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`node`]        | `NavNode`: a graph vertex with a world position            |
//! | [`grid`]        | `GridPlacement`: grid cell → world position mapping        |
//! | [`network`]     | `NavGraph` (CSR + R-tree), `NavGraphBuilder`                |
//! | [`route`]       | `SearchRoute`: one search result plus its cursor           |
//! | [`pathfinder`]  | `PathFinder` trait, `AStarPathFinder`                       |
//! | [`goals`]       | `GoalCandidate`, `GoalSelector`                             |
//! | [`error`]       | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod goals;
pub mod grid;
pub mod network;
pub mod node;
pub mod pathfinder;
pub mod route;


pub use error::{SpatialError, SpatialResult};
pub use goals::{GoalCandidate, GoalSelector};
pub use grid::GridPlacement;
pub use network::{NavGraph, NavGraphBuilder};
pub use node::NavNode;
pub use pathfinder::{AStarPathFinder, PathFinder};
pub use route::SearchRoute;
