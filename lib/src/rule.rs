//! The standard Life rule, B3/S23.
//!
//! In this rule, a cell has 8 neighbors in the Moore neighborhood.
//! - A dead cell comes to life if it has exactly 3 living neighbors.
//! - A living cell stays alive if it has 2 or 3 living neighbors.
//! - Every other cell is dead in the next generation.

use crate::cell::CellState;

/// The size of the Moore neighborhood, excluding the center cell.
pub const NEIGHBORHOOD_SIZE: u8 = 8;

/// Numbers of living neighbors that bring a dead cell to life.
pub const BIRTH: &[u8] = &[3];

/// Numbers of living neighbors that keep a living cell alive.
pub const SURVIVAL: &[u8] = &[2, 3];

/// Apply the rule to a single cell.
///
/// `living_neighbours` is the number of living cells in the Moore
/// neighborhood of the cell, not counting the cell itself.
#[inline]
pub fn next_state(state: CellState, living_neighbours: u8) -> CellState {
    let next = if state.is_alive() {
        SURVIVAL.contains(&living_neighbours)
    } else {
        BIRTH.contains(&living_neighbours)
    };

    next.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState::{Alive, Dead};

    #[test]
    fn test_rule_table() {
        for n in 0..=NEIGHBORHOOD_SIZE {
            let survives = if n == 2 || n == 3 { Alive } else { Dead };
            let born = if n == 3 { Alive } else { Dead };

            assert_eq!(next_state(Alive, n), survives);
            assert_eq!(next_state(Dead, n), born);
        }
    }
}
