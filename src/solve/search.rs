//! Backtracking search

use log::debug;

use crate::error::SolveError;
use crate::puzzle::{CellId, Puzzle};
use crate::solve::PartitionCache;

/// Searches for an assignment of the pending cells completing the puzzle.
/// Returns whether a solution was found; a found solution is left in the
/// puzzle, a failed search resets every pending cell.
pub(crate) fn search_solution(
    puzzle: &mut Puzzle,
    pending: Vec<CellId>,
    cache: &mut PartitionCache,
) -> Result<bool, SolveError> {
    search_next(1, puzzle, pending, cache)
}

fn search_next(
    depth: u32,
    puzzle: &mut Puzzle,
    pending: Vec<CellId>,
    cache: &mut PartitionCache,
) -> Result<bool, SolveError> {
    if pending.is_empty() {
        return Ok(true);
    }
    debug!("Backtracking (depth={})", depth);
    let mut domains = Vec::with_capacity(pending.len());
    for &id in &pending {
        let domain = match puzzle.cell_possible_values(id, cache) {
            Ok(domain) => domain,
            Err(SolveError::DeadEnd(dead_end)) => {
                debug!("Dead branch: {}", dead_end);
                return Ok(false);
            }
            Err(e) => return Err(e),
        };
        if domain.is_empty() {
            return Ok(false);
        }
        domains.push(domain);
    }
    let guess_index = domains
        .iter()
        .enumerate()
        .min_by_key(|(_, domain)| domain.len())
        .map(|(i, _)| i)
        .expect("pending is not empty");
    let candidates = domains.swap_remove(guess_index);
    let mut rest = pending;
    let guess_id = rest.remove(guess_index);
    for (i, &value) in candidates.iter().enumerate() {
        debug!(
            "Guessing with {} at {:?}, guess #: {}",
            value,
            puzzle.coord_at(guess_id),
            i + 1
        );
        puzzle.set_cell_value(guess_id, value)?;
        if search_next(depth + 1, puzzle, rest.clone(), cache)? {
            return Ok(true);
        }
        puzzle.clear_cell_value(guess_id);
    }
    debug!("Exhausted guesses at {:?}", puzzle.coord_at(guess_id));
    Ok(false)
}

#[cfg(test)]
mod test {
    use super::search_solution;
    use crate::puzzle::{Cell, Puzzle, PuzzleCell, Section};
    use crate::solve::PartitionCache;

    #[test]
    fn finds_assignment() {
        let mut puzzle = Puzzle::new(2, 1);
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::new()));
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::new()));
        puzzle
            .add_section(Section::sum(4, vec![0, 1]).unwrap())
            .unwrap();
        let mut cache = PartitionCache::new();
        let pending = puzzle.unsolved_cell_ids();
        assert!(search_solution(&mut puzzle, pending, &mut cache).unwrap());
        assert_eq!(3, puzzle.cell(0).puzzle_cell().unwrap().value());
        assert_eq!(1, puzzle.cell(1).puzzle_cell().unwrap().value());
    }

    #[test]
    fn failed_search_resets_cells() {
        // two sum sections over the same cells with incompatible clues
        let mut puzzle = Puzzle::new(2, 1);
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::new()));
        puzzle.add_cell(Cell::Puzzle(PuzzleCell::new()));
        puzzle
            .add_section(Section::sum(4, vec![0, 1]).unwrap())
            .unwrap();
        puzzle
            .add_section(Section::sum(5, vec![0, 1]).unwrap())
            .unwrap();
        let mut cache = PartitionCache::new();
        let pending = puzzle.unsolved_cell_ids();
        assert!(!search_solution(&mut puzzle, pending, &mut cache).unwrap());
        assert_eq!(2, puzzle.unsolved_cell_count());
    }
}
