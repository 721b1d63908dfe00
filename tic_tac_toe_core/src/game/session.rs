use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MoveError;
use crate::escalation::{Escalation, EscalationStep};
use crate::game::models::{Board, Player, Players, BOARD_CELLS};

/// Consecutive surrender clicks needed to concede.
pub const SURRENDER_CLICKS: u32 = 5;
/// Maximum gap between two surrender clicks that still counts as consecutive.
pub const SURRENDER_WINDOW_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStarted {
    pub first: Player,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Continue {
        next: Player,
        name: String,
    },
    Win {
        player: Player,
        name: String,
        pattern: [usize; 3],
    },
    Draw,
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurrenderStatus {
    NoActiveSession,
    Pending {
        remaining: u32,
        count: u32,
    },
    Surrendered {
        loser: Player,
        loser_name: String,
        winner_name: String,
    },
}

/// One game between two named players.
///
/// Every transition returns a new `Session` with a bumped `version`; the
/// receiver is never mutated, so callers can keep the previous value around
/// and diff against it. A finished session keeps its final board with
/// `active == false` until it is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    players: Option<Players>,
    turn: Player,
    active: bool,
    surrender: Escalation,
    version: u64,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            board: Board::default(),
            players: None,
            turn: Player::O,
            active: false,
            surrender: Escalation::new(SURRENDER_CLICKS, SURRENDER_WINDOW_MS),
            version: 0,
        }
    }
}

impl Session {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> Option<&Players> {
        self.players.as_ref()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn surrender(&self) -> &Escalation {
        &self.surrender
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn name_of(&self, player: Player) -> String {
        self.players
            .as_ref()
            .map(|p| p.name(player).to_string())
            .unwrap_or_default()
    }

    /// Fresh board for `players` with `first` to move.
    pub fn start(&self, players: Players, first: Player) -> Session {
        Session {
            players: Some(players),
            turn: first,
            active: true,
            version: self.version + 1,
            ..Session::default()
        }
    }

    pub fn apply_move(&self, index: usize) -> Result<(Session, MoveOutcome), MoveError> {
        if !self.active {
            debug!("Move rejected: no active session.");
            return Err(MoveError::SessionNotActive);
        }
        if index >= BOARD_CELLS {
            debug!("Move rejected: cell {} out of bounds.", index);
            return Err(MoveError::OutOfBounds(index));
        }

        let mover = self.turn;
        let board = self.board.place(index, mover).ok_or_else(|| {
            debug!("Move rejected: cell {} already taken.", index);
            MoveError::CellOccupied(index)
        })?;

        let mut next = self.clone();
        next.board = board;
        next.surrender.reset();
        next.version += 1;

        // Only the mover can have completed a line with this placement.
        let outcome = if let Some(pattern) = board.winning_pattern(mover) {
            next.active = false;
            debug!("Game over: {} wins with {:?}.", mover, pattern);
            MoveOutcome::Win {
                player: mover,
                name: self.name_of(mover),
                pattern,
            }
        } else if board.is_full() {
            next.active = false;
            debug!("Game over: it's a draw.");
            MoveOutcome::Draw
        } else {
            next.turn = mover.opposite();
            debug!("Turn switched: now it's {}'s turn.", next.turn);
            MoveOutcome::Continue {
                next: next.turn,
                name: self.name_of(next.turn),
            }
        };

        Ok((next, outcome))
    }

    pub fn surrender_click(&self, now_ms: u64) -> (Session, SurrenderStatus) {
        if !self.active {
            return (self.clone(), SurrenderStatus::NoActiveSession);
        }

        let mut next = self.clone();
        next.version += 1;

        let status = match next.surrender.register(now_ms) {
            EscalationStep::Pending { count, remaining } => {
                debug!("Surrender click {}/{}.", count, SURRENDER_CLICKS);
                SurrenderStatus::Pending { remaining, count }
            }
            EscalationStep::Triggered => {
                next.active = false;
                let loser = self.turn;
                SurrenderStatus::Surrendered {
                    loser,
                    loser_name: self.name_of(loser),
                    winner_name: self.name_of(loser.opposite()),
                }
            }
        };

        (next, status)
    }

    /// Empty board, no players, inactive.
    pub fn cleared(&self) -> Session {
        Session {
            version: self.version + 1,
            ..Session::default()
        }
    }
}
