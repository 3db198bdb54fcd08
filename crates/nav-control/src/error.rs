use thiserror::Error;

use nav_tour::TourError;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("navigation configuration error: {0}")]
    Config(String),

    #[error("patrol tour error: {0}")]
    Tour(#[from] TourError),

    #[error("failed to start planner worker: {0}")]
    Spawn(#[source] std::io::Error),
}

pub type ControlResult<T> = Result<T, ControlError>;
