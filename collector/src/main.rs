//! `yantra` — solve a yantra collection puzzle and print the path.

use clap::Parser;

use yantra_collector::config::Cli;
use yantra_collector::{Config, Puzzle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::try_from(Cli::parse())?;
    let grid = config.load_grid()?;
    log::debug!("solving with {} on\n{grid}", config.strategy);

    let mut puzzle = Puzzle::new(grid);
    let solution = puzzle.solve_with(config.strategy);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{solution}");
    }
    Ok(())
}
