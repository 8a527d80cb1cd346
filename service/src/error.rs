use sweepd_core::{Coord, GameError, GameStatus};
use thiserror::Error;

/// Coarse classification the transport maps to a response category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("size, mines, and gameId are required")]
    MissingCreateField,
    #[error("gameId, row, and col are required")]
    MissingMoveField,
    #[error("gameId is required")]
    MissingGameId,
    #[error("size must be a positive number")]
    NonPositiveSize,
    #[error("size must not exceed {0}")]
    SizeOverLimit(Coord),
    #[error("mines must be a positive number")]
    NonPositiveMines,
    #[error("number of mines must be less than the total number of cells")]
    TooManyMines,
    #[error("game not found")]
    GameNotFound,
    #[error("game is already over, you {0}")]
    GameOver(GameStatus),
    #[error("invalid coordinates")]
    InvalidCoords,
    #[error("cell already revealed")]
    AlreadyRevealed,
}

impl ServiceError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::GameNotFound => ErrorKind::NotFound,
            _ => ErrorKind::Validation,
        }
    }
}

impl From<GameError> for ServiceError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidCoords => Self::InvalidCoords,
            GameError::AlreadyRevealed => Self::AlreadyRevealed,
            GameError::AlreadyEnded(status) => Self::GameOver(status),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
