//! `nav-tour`: authored patrol tours and CSV tour loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`tour`]     | `LoopPath`: cyclic waypoint sequence plus cursor          |
//! | [`loader`]   | `load_grid_tour_csv`, `load_point_tour_csv` (+ `_reader`)  |
//! | [`error`]    | `TourError`, `TourResult<T>`                               |
//!
//! # Cursor model (summary)
//!
//! A tour of length `n` keeps a cursor `c` in `0..n`:
//!
//! ```text
//! current() = nodes[c]
//! next()    : c = (c + 1) % n; return nodes[c]
//! ```
//!
//! Calling `next()` `n` times always lands back on the starting node.

pub mod error;
pub mod loader;
pub mod tour;

#[cfg(test)]
mod tests;

pub use error::{TourError, TourResult};
pub use loader::{
    load_grid_tour_csv, load_grid_tour_reader, load_point_tour_csv, load_point_tour_reader,
};
pub use tour::LoopPath;
