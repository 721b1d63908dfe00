use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MoveError, ValidationError};

use super::models::Player;

/// Inbound events from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    StartClicked { name1: String, name2: String },
    CellClicked { index: usize },
    SurrenderClicked { now_millis: u64 },
    ResetClicked,
}

/// Transient, user-facing messages produced by a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notice {
    GameStarted { first: Player, name: String },
    Win { name: String },
    Draw,
    Surrendered { loser: String, winner: String },
    EmptyName,
    DuplicateName,
    SessionNotActive,
    CellOccupied { index: usize },
    OutOfBounds { index: usize },
    NoActiveSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLength {
    Short,
    Long,
}

impl Notice {
    /// Game results linger; everything else is a quick hint.
    pub fn length(&self) -> NoticeLength {
        match self {
            Notice::Win { .. } | Notice::Surrendered { .. } => NoticeLength::Long,
            _ => NoticeLength::Short,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::EmptyName
                | Notice::DuplicateName
                | Notice::SessionNotActive
                | Notice::CellOccupied { .. }
                | Notice::OutOfBounds { .. }
                | Notice::NoActiveSession
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::GameStarted { name, .. } => write!(f, "Game started, {name} goes first"),
            Notice::Win { name } => write!(f, "🏆 Winner: {name}"),
            Notice::Draw => write!(f, "🤝 It's a draw"),
            Notice::Surrendered { loser, winner } => {
                write!(f, "🏳 {loser} surrendered. Winner: {winner}")
            }
            Notice::EmptyName | Notice::SessionNotActive => write!(f, "The game has not started"),
            Notice::DuplicateName => write!(f, "Names can't be the same"),
            Notice::CellOccupied { .. } => write!(f, "That cell is already taken"),
            Notice::OutOfBounds { index } => write!(f, "Cell {index} is off the board"),
            Notice::NoActiveSession => write!(f, "No game in progress"),
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Notice::EmptyName,
            ValidationError::DuplicateName => Notice::DuplicateName,
        }
    }
}

impl From<MoveError> for Notice {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::SessionNotActive => Notice::SessionNotActive,
            MoveError::CellOccupied(index) => Notice::CellOccupied { index },
            MoveError::OutOfBounds(index) => Notice::OutOfBounds { index },
        }
    }
}
