mod args;
mod patterns;

use crate::args::Args;
use color_eyre::Result;
use log::info;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse_and_validate();

    let mut board = args
        .pattern
        .seed(args.width, args.height, args.density, args.seed);

    info!(
        "seeded a {}x{} board with {} living cells",
        args.width,
        args.height,
        board.population()
    );

    if !args.quiet {
        println!("{}", board.rle());
    }

    for _ in 0..args.generations {
        board = board.step();

        if !args.quiet {
            println!("{}", board.rle());
        }
    }

    if args.quiet {
        println!("{}", board.rle());
    }

    info!(
        "generation {}: {} living cells",
        board.generation(),
        board.population()
    );

    Ok(())
}
