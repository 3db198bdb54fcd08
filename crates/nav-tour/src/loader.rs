//! CSV tour loaders.
//!
//! # CSV formats
//!
//! Grid tours list authored cells, one waypoint per row, in tour order:
//!
//! ```csv
//! col,row
//! 160,420
//! 15,240
//! 20,220
//! ```
//!
//! Point tours list explicit world positions (`y` is the vertical axis):
//!
//! ```csv
//! x,y,z
//! 0.0,0.0,0.0
//! 10.0,2.5,0.0
//! ```
//!
//! Both produce a [`LoopPath`]; an input with a header but no rows is
//! rejected with [`TourError::Empty`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::Vec3;
use nav_spatial::GridPlacement;

use crate::{LoopPath, TourError, TourResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GridRecord {
    col: i32,
    row: i32,
}

#[derive(Deserialize)]
struct PointRecord {
    x: f32,
    y: f32,
    z: f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a grid-cell tour from a CSV file.
pub fn load_grid_tour_csv(path: &Path, placement: GridPlacement) -> TourResult<LoopPath> {
    let file = std::fs::File::open(path).map_err(TourError::Io)?;
    load_grid_tour_reader(file, placement)
}

/// Like [`load_grid_tour_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tours embedded in
/// the binary.
pub fn load_grid_tour_reader<R: Read>(reader: R, placement: GridPlacement) -> TourResult<LoopPath> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cells = Vec::new();
    for result in csv_reader.deserialize::<GridRecord>() {
        let row = result.map_err(|e| TourError::Parse(e.to_string()))?;
        cells.push((row.col, row.row));
    }
    LoopPath::from_grid(&cells, placement)
}

/// Load an explicit-point tour from a CSV file.
pub fn load_point_tour_csv(path: &Path) -> TourResult<LoopPath> {
    let file = std::fs::File::open(path).map_err(TourError::Io)?;
    load_point_tour_reader(file)
}

/// Like [`load_point_tour_csv`] but accepts any `Read` source.
pub fn load_point_tour_reader<R: Read>(reader: R) -> TourResult<LoopPath> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for result in csv_reader.deserialize::<PointRecord>() {
        let row = result.map_err(|e| TourError::Parse(e.to_string()))?;
        points.push(Vec3::new(row.x, row.y, row.z));
    }
    LoopPath::from_points(points)
}
