//! Solve puzzles with constraint propagation and backtracking search

use log::{error, info};

use crate::error::SolveError;
use crate::puzzle::{CellId, Puzzle, Value};
use crate::solve::search::search_solution;

pub use self::partitions::{calculate_distinct_partitions, PartitionCache};

mod magic_numbers;
mod partitions;
mod search;

/// The outcome of an attempted solve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveResult {
    Solved,
    Unsolved { unsolved_cells: usize },
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved)
    }
}

/// Solves puzzles, keeping a partition cache across solves
pub struct PuzzleSolver {
    cache: PartitionCache,
}

impl PuzzleSolver {
    pub fn new() -> Self {
        Self {
            cache: PartitionCache::new(),
        }
    }

    /// Solves the puzzle in place. A failed solve leaves the partial
    /// assignment in the puzzle.
    pub fn solve(&mut self, puzzle: &mut Puzzle) -> Result<SolveResult, SolveError> {
        match self.solve_inner(puzzle) {
            Ok(()) => (),
            Err(SolveError::DeadEnd(dead_end)) => {
                error!("contradiction outside search: {}", dead_end);
            }
            Err(e) => return Err(e),
        }
        if puzzle.is_solved() {
            Ok(SolveResult::Solved)
        } else {
            Ok(SolveResult::Unsolved {
                unsolved_cells: puzzle.unsolved_cell_count(),
            })
        }
    }

    fn solve_inner(&mut self, puzzle: &mut Puzzle) -> Result<(), SolveError> {
        self.propagate(puzzle)?;
        let pending = puzzle.unsolved_cell_ids();
        if !pending.is_empty() {
            info!("Begin backtracking with {} unsolved cells", pending.len());
            let _ = search_solution(puzzle, pending, &mut self.cache)?;
        }
        Ok(())
    }

    /// Repeatedly assigns every unsolved cell with a single possible value
    /// until no more remain
    fn propagate(&mut self, puzzle: &mut Puzzle) -> Result<(), SolveError> {
        loop {
            let mut assignments: Vec<(CellId, Value)> = Vec::new();
            for id in puzzle.unsolved_cell_ids() {
                let possible = puzzle.cell_possible_values(id, &mut self.cache)?;
                if let [value] = possible[..] {
                    assignments.push((id, value));
                }
            }
            if assignments.is_empty() {
                return Ok(());
            }
            for (id, value) in assignments {
                puzzle.set_cell_value(id, value)?;
            }
        }
    }
}

impl Default for PuzzleSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{PuzzleSolver, SolveResult};
    use crate::puzzle::{Cell, Puzzle, PuzzleCell, Section};

    fn two_cell_puzzle(clue: u32) -> Puzzle {
        let mut puzzle = Puzzle::new(2, 1);
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::new()));
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::new()));
        puzzle
            .add_section(Section::sum(clue, vec![0, 1]).unwrap())
            .unwrap();
        puzzle
    }

    #[test]
    fn solves_two_cell_run() {
        let mut puzzle = two_cell_puzzle(17);
        let result = PuzzleSolver::new().solve(&mut puzzle).unwrap();
        assert!(result.is_solved());
        assert_eq!(9, puzzle.cell(0).puzzle_cell().unwrap().value());
        assert_eq!(8, puzzle.cell(1).puzzle_cell().unwrap().value());
    }

    #[test]
    fn unsolvable_run() {
        let mut puzzle = two_cell_puzzle(18);
        let result = PuzzleSolver::new().solve(&mut puzzle).unwrap();
        assert_eq!(SolveResult::Unsolved { unsolved_cells: 2 }, result);
    }

    #[test]
    fn contradiction_during_propagation() {
        // the solved cells already consume the whole clue
        let mut puzzle = Puzzle::new(3, 1);
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::with_value(3)));
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::with_value(1)));
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::new()));
        puzzle
            .add_section(Section::sum(4, vec![0, 1, 2]).unwrap())
            .unwrap();
        let result = PuzzleSolver::new().solve(&mut puzzle).unwrap();
        assert_eq!(SolveResult::Unsolved { unsolved_cells: 1 }, result);
    }
}
