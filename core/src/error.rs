use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position is outside the board")]
    InvalidPosition,
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
}

pub type Result<T> = core::result::Result<T, GameError>;
