use thiserror::Error;

/// An error that can occur when querying a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The row index is outside the board.
    #[error("row {row} is outside a board with {rows} rows")]
    OutOfRange {
        /// The offending row index.
        row: usize,

        /// The number of rows in the board.
        rows: usize,
    },
}
