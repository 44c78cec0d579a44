use crate::store::StoreError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is already revealed")]
    AlreadyRevealed { row: usize, col: usize },

    #[error("game {0} has not been started")]
    NotStarted(String),

    #[error("game {0} has already ended")]
    GameEnded(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, GameError>;
