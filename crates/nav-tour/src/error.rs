use nav_core::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TourError {
    /// A tour needs at least one waypoint.  No fallback tour is invented.
    #[error("patrol tour has no waypoints")]
    Empty,

    /// Waypoint `index` has a NaN or infinite coordinate.
    #[error("tour waypoint {index} is not finite: {point}")]
    NonFinite { index: usize, point: Vec3 },

    #[error("tour cursor {cursor} out of range for {len} waypoints")]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("tour parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TourResult<T> = Result<T, TourError>;
