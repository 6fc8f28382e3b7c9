//! A library for simulating Conway's Game of Life on a finite grid.
//!
//! A [`Board`] is a snapshot of the grid together with its generation index.
//! [`Board::step`] computes the next generation under the standard B3/S23
//! rule; the input board is never mutated.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod board;
mod cell;
mod error;
mod rule;

pub use board::Board;
pub use cell::CellState;
pub use error::BoardError;
pub use rule::{next_state, BIRTH, NEIGHBORHOOD_SIZE, SURVIVAL};
