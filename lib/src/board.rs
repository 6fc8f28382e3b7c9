use crate::{cell::CellState, error::BoardError, rule};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A grid snapshot plus its generation index.
///
/// A board starts empty; the caller appends rows with [`push_row`](Self::push_row).
/// Rows may have different lengths. Cells beyond the end of a short row, and
/// cells outside the grid entirely, always read as dead.
///
/// [`step`](Self::step) produces a fresh board one generation later and leaves
/// this one untouched, so a board never observes its own successor.
///
/// # Example
///
/// ```
/// use lifegrid_lib::{Board, CellState};
///
/// // A blinker in its horizontal phase.
/// let mut board = Board::new(0);
/// board.push_row([false, false, false].map(CellState::from));
/// board.push_row([true, true, true].map(CellState::from));
/// board.push_row([false, false, false].map(CellState::from));
///
/// let next = board.step();
/// assert_eq!(next.generation(), 1);
/// // The blinker has flipped to its vertical phase.
/// assert!(next.get(0, 1).is_alive());
/// assert!(!next.get(1, 0).is_alive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    /// The number of steps taken since the initial board.
    generation: u64,

    /// The grid, as a list of rows.
    fields: Vec<Vec<CellState>>,
}

impl Board {
    /// Create a board with no rows at the given generation.
    #[inline]
    pub const fn new(generation: u64) -> Self {
        Self {
            generation,
            fields: Vec::new(),
        }
    }

    /// The generation index of this board.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The rows of the grid.
    #[inline]
    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.fields
    }

    /// Append a row to the bottom of the grid.
    pub fn push_row(&mut self, row: impl IntoIterator<Item = CellState>) {
        self.fields.push(row.into_iter().collect());
    }

    /// Get the state of a cell.
    ///
    /// Cells outside the grid, including cells beyond the end of a short row,
    /// are considered dead.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.fields
            .get(row)
            .and_then(|row| row.get(col))
            .copied()
            .unwrap_or(CellState::Dead)
    }

    /// The number of living cells on the board.
    pub fn population(&self) -> usize {
        self.fields
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Count the living cells in the Moore neighborhood of `(row, col)`.
    ///
    /// The cell itself is never counted, whatever its state. Neighbors outside
    /// the grid are considered dead, so the result is always in `0..=8`.
    ///
    /// Returns [`BoardError::OutOfRange`] if `row` is not a valid row index.
    /// `col` may point past the end of the row; the count then only covers the
    /// neighbors that exist.
    pub fn count_living_neighbours(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        if row >= self.fields.len() {
            return Err(BoardError::OutOfRange {
                row,
                rows: self.fields.len(),
            });
        }

        Ok(self.moore_sum(row, col))
    }

    /// Sum the 8 neighbors of `(row, col)`, skipping the center cell.
    fn moore_sum(&self, row: usize, col: usize) -> u8 {
        let mut sum = 0;

        for row_offset in -1..=1 {
            for col_offset in -1..=1 {
                if row_offset == 0 && col_offset == 0 {
                    continue;
                }

                let Some(r) = row.checked_add_signed(row_offset) else {
                    continue;
                };
                let Some(c) = col.checked_add_signed(col_offset) else {
                    continue;
                };

                if self.get(r, c).is_alive() {
                    sum += 1;
                }
            }
        }

        sum
    }

    /// Advance the board by one generation.
    ///
    /// The returned board has the same row count and per-row lengths as this
    /// one, ragged rows included, and a generation index one higher.
    #[must_use]
    pub fn step(&self) -> Self {
        let mut next = Self::new(self.generation + 1);

        for (r, row) in self.fields.iter().enumerate() {
            next.push_row(
                row.iter()
                    .enumerate()
                    .map(|(c, &state)| rule::next_state(state, self.moore_sum(r, c))),
            );
        }

        next
    }

    /// Output the board in RLE-like plain text.
    ///
    /// - Dead cells are represented by `.`.
    /// - Living cells are represented by `o`.
    /// - Each row is terminated by `$`.
    /// - The whole pattern is terminated by `!`.
    pub fn rle(&self) -> String {
        let mut s = String::new();

        let rows = self.fields.len();
        let cols = self.fields.iter().map(Vec::len).max().unwrap_or(0);

        writeln!(s, "x = {cols}, y = {rows}, rule = B3/S23").unwrap();

        for (r, row) in self.fields.iter().enumerate() {
            for &cell in row {
                s.push(if cell.is_alive() { 'o' } else { '.' });
            }

            if r < rows - 1 {
                s.push('$');
            } else {
                s.push('!');
            }
            s.push('\n');
        }

        s
    }
}
