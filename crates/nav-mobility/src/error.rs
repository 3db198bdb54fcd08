use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MobilityError {
    #[error("speed must be finite and >= 0, got {0}")]
    InvalidSpeed(f32),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
