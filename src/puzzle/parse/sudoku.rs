//! Parse the Sudoku text format
//!
//! Nine `|`-delimited rows of nine cells, each cell a digit `1`-`9` or `-`
//! for unsolved.

use crate::error::{ParseError, ParsePuzzleError, ParsePuzzleErrorType};
use crate::puzzle::{Cell, Puzzle, PuzzleCell, Section, Value};

const SIZE: usize = 9;
const BOX_STARTS: [usize; 9] = [0, 3, 6, 27, 30, 33, 54, 57, 60];

pub fn parse_sudoku(text: &str) -> Result<Puzzle, ParsePuzzleError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return Err(ParseError::from_type(ParsePuzzleErrorType::EmptyFile).into());
    }
    if lines.len() != SIZE {
        return Err(ParseError::from_type(ParsePuzzleErrorType::WrongRowCount).into());
    }
    let mut puzzle = Puzzle::new(SIZE, SIZE);
    for (i, line) in lines.iter().enumerate() {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() != SIZE + 2 {
            return Err(ParseError::new(
                ParsePuzzleErrorType::RaggedRow,
                line,
                Some(i + 1),
            )
            .into());
        }
        for token in &parts[1..=SIZE] {
            let cell = parse_cell(token, i + 1)?;
            puzzle.add_cell(cell);
        }
    }
    add_sections(&mut puzzle)?;
    if puzzle.unsolved_cell_count() == SIZE * SIZE {
        return Err(ParseError::from_type(ParsePuzzleErrorType::NoSolvedCells).into());
    }
    Ok(puzzle)
}

fn parse_cell(token: &str, line: usize) -> Result<Cell, ParseError> {
    if token == "-" {
        return Ok(Cell::Puzzle(PuzzleCell::new()));
    }
    match token.parse::<Value>() {
        Ok(value) if value >= 1 && value <= 9 => Ok(Cell::Puzzle(PuzzleCell::with_value(value))),
        _ => Err(ParseError::new(
            ParsePuzzleErrorType::InvalidToken,
            token,
            Some(line),
        )),
    }
}

/// Nine row, nine column, and nine box uniqueness sections
fn add_sections(puzzle: &mut Puzzle) -> Result<(), ParsePuzzleError> {
    for i in 0..SIZE {
        let row = (0..SIZE).map(|col| i * SIZE + col).collect();
        puzzle.add_section(Section::unique(row)?)?;
    }
    for i in 0..SIZE {
        let col = (0..SIZE).map(|row| row * SIZE + i).collect();
        puzzle.add_section(Section::unique(col)?)?;
    }
    for &start in &BOX_STARTS {
        let cells = (0..3)
            .flat_map(|row| (0..3).map(move |col| start + row * SIZE + col))
            .collect();
        puzzle.add_section(Section::unique(cells)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::parse_sudoku;
    use crate::error::{ParsePuzzleError, ParsePuzzleErrorType};

    fn error_type(result: Result<crate::puzzle::Puzzle, ParsePuzzleError>) -> ParsePuzzleErrorType {
        match result.unwrap_err() {
            ParsePuzzleError::Parse(e) => e.error_type(),
            ParsePuzzleError::InvalidPuzzle(e) => panic!("unexpected error: {}", e),
        }
    }

    fn grid(rows: &[&str]) -> String {
        rows.iter()
            .map(|row| {
                let cells: Vec<String> = row
                    .chars()
                    .map(|c| if c == '0' { "-".into() } else { c.to_string() })
                    .collect();
                format!("|{}|", cells.join("|"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn wiki_grid() {
        let text = grid(&[
            "530070000",
            "600195000",
            "098000060",
            "800060003",
            "400803001",
            "700020006",
            "060000280",
            "000419005",
            "000080079",
        ]);
        let puzzle = parse_sudoku(&text).unwrap();
        assert_eq!(9, puzzle.width());
        assert_eq!(27, puzzle.sections().len());
        assert_eq!(51, puzzle.unsolved_cell_count());
        // every cell belongs to a row, a column and a box
        for cell in puzzle.cells() {
            assert_eq!(3, cell.puzzle_cell().unwrap().sections().len());
        }
    }

    #[test]
    fn all_unsolved_rejected() {
        let text = grid(&["000000000"; 9]);
        assert_eq!(
            ParsePuzzleErrorType::NoSolvedCells,
            error_type(parse_sudoku(&text))
        );
    }

    #[test]
    fn wrong_row_count() {
        let text = grid(&["530070000"; 8]);
        assert_eq!(
            ParsePuzzleErrorType::WrongRowCount,
            error_type(parse_sudoku(&text))
        );
    }

    #[test]
    fn ragged_row() {
        let mut text = grid(&["530070000"; 9]);
        text.truncate(text.len() - 3);
        assert_eq!(
            ParsePuzzleErrorType::RaggedRow,
            error_type(parse_sudoku(&text))
        );
    }

    #[test]
    fn invalid_token() {
        let text = grid(&[
            "53c070000",
            "600195000",
            "098000060",
            "800060003",
            "400803001",
            "700020006",
            "060000280",
            "000419005",
            "000080079",
        ]);
        assert_eq!(
            ParsePuzzleErrorType::InvalidToken,
            error_type(parse_sudoku(&text))
        );
    }

    #[test]
    fn empty() {
        assert_eq!(ParsePuzzleErrorType::EmptyFile, error_type(parse_sudoku("")));
    }
}
