use thiserror::Error;

/// Rejections from `start`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Both players need a name")]
    EmptyName,

    #[error("Names can't be the same")]
    DuplicateName,
}

/// Rejections from `move`. State is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("The game has not started")]
    SessionNotActive,

    #[error("Cell {0} is already taken")]
    CellOccupied(usize),

    #[error("Cell {0} is off the board")]
    OutOfBounds(usize),
}

/// Failures of the name cache backend. Never surfaced to players.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("name cache I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("name cache is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
