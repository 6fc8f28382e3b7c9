use clap::ValueEnum;
use lifegrid_lib::{Board, CellState};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// The pattern to seed the board with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Pattern {
    /// A glider moving towards the bottom right corner.
    #[default]
    Glider,

    /// A period-2 oscillator of three cells in a row.
    Blinker,

    /// A period-2 oscillator of two offset rows of three cells.
    Toad,

    /// A random fill with the given density.
    Random,
}

/// Living cells of the glider, relative to the top left corner of the board.
const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Living cells of the blinker.
const BLINKER: &[(usize, usize)] = &[(1, 0), (1, 1), (1, 2)];

/// Living cells of the toad.
const TOAD: &[(usize, usize)] = &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)];

impl Pattern {
    /// Seed a `width` × `height` board at generation 0 with this pattern.
    ///
    /// Pattern cells that fall outside the board are dropped. `density` and
    /// `seed` are only used by [`Random`](Self::Random); when `seed` is
    /// [`None`], the generator is seeded from entropy.
    pub fn seed(self, width: usize, height: usize, density: f64, seed: Option<u64>) -> Board {
        let cells = match self {
            Self::Glider => GLIDER,
            Self::Blinker => BLINKER,
            Self::Toad => TOAD,
            Self::Random => return seed_random(width, height, density, seed),
        };

        let mut board = Board::new(0);
        for r in 0..height {
            board.push_row((0..width).map(|c| CellState::from(cells.contains(&(r, c)))));
        }
        board
    }
}

/// Fill a board at random, with each cell alive with probability `density`.
fn seed_random(width: usize, height: usize, density: f64, seed: Option<u64>) -> Board {
    let mut rng = match seed {
        Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
        None => Xoshiro256StarStar::from_entropy(),
    };

    let mut board = Board::new(0);
    for _ in 0..height {
        board.push_row((0..width).map(|_| CellState::from(rng.gen_bool(density))));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_boards_have_the_requested_shape() {
        for pattern in [Pattern::Glider, Pattern::Blinker, Pattern::Toad, Pattern::Random] {
            let board = pattern.seed(7, 4, 0.5, Some(1));

            assert_eq!(board.generation(), 0);
            assert_eq!(board.rows().len(), 4);
            assert!(board.rows().iter().all(|row| row.len() == 7));
        }
    }

    #[test]
    fn pattern_cells_outside_the_board_are_dropped() {
        // Only (1, 1) of the toad fits on a 2 × 2 board.
        let board = Pattern::Toad.seed(2, 2, 0.0, None);

        assert_eq!(board.population(), 1);
    }

    #[test]
    fn a_glider_returns_after_four_generations() {
        let board = Pattern::Glider.seed(10, 10, 0.0, None);

        let mut stepped = board.clone();
        for _ in 0..4 {
            stepped = stepped.step();
        }

        // After four generations the glider has moved one cell down and right.
        for r in 0..10 {
            for c in 0..10 {
                let expected = if r == 0 || c == 0 {
                    CellState::Dead
                } else {
                    board.get(r - 1, c - 1)
                };
                assert_eq!(stepped.get(r, c), expected);
            }
        }
    }

    #[test]
    fn random_seeding_is_reproducible() {
        let a = Pattern::Random.seed(8, 8, 0.5, Some(42));
        let b = Pattern::Random.seed(8, 8, 0.5, Some(42));

        assert_eq!(a.rows(), b.rows());
    }

    #[test]
    fn density_bounds_are_respected() {
        assert_eq!(Pattern::Random.seed(5, 5, 0.0, Some(1)).population(), 0);
        assert_eq!(Pattern::Random.seed(5, 5, 1.0, Some(1)).population(), 25);
    }
}
