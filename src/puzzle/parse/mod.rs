//! Parse puzzles from text

pub use self::kakuro::parse_kakuro;
pub use self::sudoku::parse_sudoku;

mod kakuro;
mod sudoku;
