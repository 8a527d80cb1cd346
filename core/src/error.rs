use crate::GameStatus;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid coordinates")]
    InvalidCoords,
    #[error("cell already revealed")]
    AlreadyRevealed,
    #[error("game already ended: {0}")]
    AlreadyEnded(GameStatus),
}

pub type Result<T> = core::result::Result<T, GameError>;
