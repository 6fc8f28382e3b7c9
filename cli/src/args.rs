use crate::patterns::Pattern;
use clap::{error::ErrorKind, CommandFactory, Parser};

/// A simple tool to run Conway's Game of Life and print each generation.
#[derive(Debug, Parser)]
pub struct Args {
    /// Width of the board.
    #[arg(short = 'x', long, default_value = "40")]
    pub width: usize,

    /// Height of the board.
    #[arg(short = 'y', long, default_value = "20")]
    pub height: usize,

    /// Number of generations to advance.
    #[arg(short = 'n', long, default_value = "10")]
    pub generations: u64,

    /// The pattern to seed the board with.
    #[arg(short, long, value_enum, default_value = "glider")]
    pub pattern: Pattern,

    /// Probability that a cell starts alive when the pattern is `random`.
    #[arg(long, default_value = "0.3")]
    pub density: f64,

    /// Random seed for the `random` pattern.
    ///
    /// If this is not set, the seed is randomly generated.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the final generation.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let args = Self::parse();

        if args.width == 0 || args.height == 0 {
            Self::command()
                .error(ErrorKind::ValueValidation, "width and height must be > 0")
                .exit();
        }

        if !(0.0..=1.0).contains(&args.density) {
            Self::command()
                .error(ErrorKind::ValueValidation, "density must be between 0 and 1")
                .exit();
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lifegrid"]).unwrap();

        assert_eq!(args.width, 40);
        assert_eq!(args.height, 20);
        assert_eq!(args.generations, 10);
        assert_eq!(args.pattern, Pattern::Glider);
        assert_eq!(args.seed, None);
        assert!(!args.quiet);
    }

    #[test]
    fn test_pattern_names() {
        let args = Args::try_parse_from(["lifegrid", "--pattern", "random", "--seed", "42"]).unwrap();

        assert_eq!(args.pattern, Pattern::Random);
        assert_eq!(args.seed, Some(42));
    }
}
