use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_CELLS: usize = 9;

/// The eight index triples that make three in a row, row-major.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    O,
    X,
}

impl Player {
    pub fn opposite(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::O => write!(f, "O"),
            Player::X => write!(f, "X"),
        }
    }
}

/// 3x3 grid stored row-major; `None` is an empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; BOARD_CELLS],
}

impl Board {
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Player>; BOARD_CELLS] {
        &self.cells
    }

    /// Writes `player` into an empty, in-range cell and returns the updated board.
    /// Returns `None` when the index is out of range or the cell is taken.
    pub fn place(&self, index: usize, player: Player) -> Option<Board> {
        match self.cells.get(index) {
            Some(None) => {
                let mut next = *self;
                next.cells[index] = Some(player);
                Some(next)
            }
            _ => None,
        }
    }

    /// First win pattern fully held by `player`.
    pub fn winning_pattern(&self, player: Player) -> Option<[usize; 3]> {
        WIN_PATTERNS
            .iter()
            .copied()
            .find(|line| line.iter().all(|&i| self.cells[i] == Some(player)))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                match cell {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Display names for both symbols. O is always the first entrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub o: String,
    pub x: String,
}

impl Players {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::O => &self.o,
            Player::X => &self.x,
        }
    }
}
