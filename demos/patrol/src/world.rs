//! The demo world: a walled courtyard, a patrol tour around it and a few
//! points of interest.

use std::sync::Arc;

use nav_core::Vec3;
use nav_spatial::{GridPlacement, NavGraph, NavGraphBuilder};

pub const COLS: u32 = 32;
pub const ROWS: u32 = 32;

/// One-unit cells on the ground plane.
pub const PLACEMENT: GridPlacement = GridPlacement::new(1.0, 0.0);

// Tour around the courtyard, counter-clockwise from the south-west corner.
pub const TOUR_CSV: &str = "\
col,row\n\
2,2\n\
29,2\n\
29,29\n\
2,29\n\
";

/// The inner wall: column 16 from row 6 to row 25, with a gap at row 16.
fn blocked(col: u32, row: u32) -> bool {
    col == 16 && (6..=25).contains(&row) && row != 16
}

pub fn build_graph() -> Arc<NavGraph> {
    Arc::new(NavGraphBuilder::grid(COLS, ROWS, PLACEMENT, blocked))
}

/// Goals present from the first tick.
pub fn initial_goals() -> Vec<Vec3> {
    vec![
        PLACEMENT.to_world(8, 10),  // near the west leg
        PLACEMENT.to_world(22, 20), // behind the wall
        PLACEMENT.to_world(27, 27),
    ]
}

/// A goal spawned mid-run while hunting.
pub fn late_goal() -> Vec3 {
    PLACEMENT.to_world(20, 12)
}
