#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::time::Instant;

use anyhow::Result;

use gridsolve::puzzle::Puzzle;
use gridsolve::solve::{PuzzleSolver, SolveResult};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args();
    println!("Reading puzzle from \"{}\"", options.input().display());
    let mut puzzle = Puzzle::from_file(options.input())?;
    println!();
    println!("{}", puzzle);
    println!();
    let mut solver = PuzzleSolver::new();
    let start = Instant::now();
    let result = solver.solve(&mut puzzle)?;
    let elapsed = start.elapsed();
    match result {
        SolveResult::Solved => println!("{}", puzzle),
        SolveResult::Unsolved { unsolved_cells } => println!(
            "Failed to solve puzzle, {} cells left unsolved",
            unsolved_cells
        ),
    }
    println!();
    println!("Time taken: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}
