use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Whether the cell is alive.
    #[inline]
    #[must_use]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The trace character for this cell.
    #[inline]
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Cell::Dead => '0',
            Cell::Alive => '1',
        }
    }

    /// Parses a trace character. Anything other than `0`/`1` is rejected.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Cell::Dead),
            '1' => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(other),
        }
    }
}
