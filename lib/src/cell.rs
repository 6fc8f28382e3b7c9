#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::Not;

/// The state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    /// The cell is dead.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "0"))]
    Dead,

    /// The cell is alive.
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    Alive,
}

impl CellState {
    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl Not for CellState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl From<CellState> for bool {
    #[inline]
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}
