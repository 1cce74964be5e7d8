//! Parse the Kakuro text format
//!
//! Rows are `|`-delimited lists of 5-character cells: `  x  ` is a blank
//! cell, `  -  ` an unsolved cell, `  N  ` a solved cell, and `NN\MM` a clue
//! cell (`down\across`, a blank side meaning no clue in that direction).

use crate::error::{ParseError, ParsePuzzleError, ParsePuzzleErrorType};
use crate::puzzle::{Cell, CellId, ClueCell, Puzzle, PuzzleCell, Section, Value};

pub fn parse_kakuro(text: &str) -> Result<Puzzle, ParsePuzzleError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return Err(ParseError::from_type(ParsePuzzleErrorType::EmptyFile).into());
    }
    let width = cell_tokens(lines[0]).len();
    if width < 2 {
        return Err(ParseError::from_type(ParsePuzzleErrorType::TooNarrow).into());
    }
    let mut puzzle = Puzzle::new(width, lines.len());
    for (i, line) in lines.iter().enumerate() {
        let tokens = cell_tokens(line);
        if tokens.len() != width {
            return Err(ParseError::new(
                ParsePuzzleErrorType::RaggedRow,
                line,
                Some(i + 1),
            )
            .into());
        }
        for token in tokens {
            let cell = parse_cell(token, i + 1)?;
            puzzle.add_cell(cell);
        }
    }
    add_sections(&mut puzzle)?;
    Ok(puzzle)
}

/// The cell tokens of a row, dropping the text outside the outer delimiters
fn cell_tokens(line: &str) -> Vec<&str> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1].to_vec()
}

fn parse_cell(token: &str, line: usize) -> Result<Cell, ParseError> {
    if token == "  x  " {
        return Ok(Cell::Blank);
    }
    if token == "  -  " {
        return Ok(Cell::Puzzle(PuzzleCell::new()));
    }
    if let Some(backslash) = token.find('\\') {
        let down = parse_clue(&token[..backslash], token, line)?;
        let across = parse_clue(&token[backslash + 1..], token, line)?;
        return Ok(Cell::Clue(ClueCell { down, across }));
    }
    match token.trim().parse::<Value>() {
        Ok(value) if value >= 1 && value <= 9 => Ok(Cell::Puzzle(PuzzleCell::with_value(value))),
        _ => Err(ParseError::new(
            ParsePuzzleErrorType::InvalidToken,
            token,
            Some(line),
        )),
    }
}

fn parse_clue(side: &str, token: &str, line: usize) -> Result<u32, ParseError> {
    let side = side.trim();
    if side.is_empty() {
        return Ok(0);
    }
    side.parse().map_err(|_| {
        ParseError::new(ParsePuzzleErrorType::InvalidClue, token, Some(line))
    })
}

/// Builds a sum section from each clue: the across clue constrains the run of
/// puzzle cells to the clue's right, the down clue the run below it
fn add_sections(puzzle: &mut Puzzle) -> Result<(), ParsePuzzleError> {
    let width = puzzle.width();
    let clues: Vec<(CellId, ClueCell)> = puzzle
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(id, cell)| match cell {
            Cell::Clue(clue) => Some((id, *clue)),
            _ => None,
        })
        .collect();
    for (id, clue) in clues {
        if clue.down > 0 {
            let run = collect_run(puzzle, id + width, width, puzzle.cells().len());
            puzzle.add_section(Section::sum(clue.down, run)?)?;
        }
        if clue.across > 0 {
            let row_end = (id / width + 1) * width;
            let run = collect_run(puzzle, id + 1, 1, row_end);
            puzzle.add_section(Section::sum(clue.across, run)?)?;
        }
    }
    Ok(())
}

fn collect_run(puzzle: &Puzzle, start: CellId, step: usize, end: CellId) -> Vec<CellId> {
    let mut run = Vec::new();
    let mut id = start;
    while id < end && puzzle.cell(id).is_puzzle() {
        run.push(id);
        id += step;
    }
    run
}
