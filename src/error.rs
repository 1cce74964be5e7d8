//! Error types

use std::fmt;
use std::io;

use thiserror::Error;

use crate::puzzle::{Coord, Value};

/// An invalid puzzle definition
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("invalid puzzle: {msg}")]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// A cell value outside the valid range
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("cell value {} is greater than 9 at {}", value, coord)]
pub struct InvalidCellValue {
    coord: Coord,
    value: Value,
}

impl InvalidCellValue {
    pub(crate) fn new(coord: Coord, value: Value) -> Self {
        Self { coord, value }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }
}

/// Invalid arguments to the partition calculator
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum PartitionArgsError {
    #[error("maximum value {0} cannot be greater than 9")]
    MaxTooLarge(Value),
    #[error("maximum value {max} cannot be greater than or equal to the total {total}")]
    MaxNotBelowTotal { max: Value, total: u32 },
    #[error("minimum value {min} must be less than the maximum value {max}")]
    MinNotBelowMax { min: Value, max: Value },
}

/// A contradiction in a sum section, failing the current branch of the search
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("sum section with clue {} has no remainder for {} unsolved cells", clue, unsolved)]
pub struct DeadEnd {
    clue: u32,
    unsolved: usize,
}

impl DeadEnd {
    pub(crate) fn new(clue: u32, unsolved: usize) -> Self {
        Self { clue, unsolved }
    }
}

/// An error while solving a puzzle
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum SolveError {
    #[error(transparent)]
    DeadEnd(#[from] DeadEnd),
    #[error(transparent)]
    InvalidCellValue(#[from] InvalidCellValue),
    #[error(transparent)]
    PartitionArgs(#[from] PartitionArgsError),
}

/// An error while loading a puzzle from a file
#[derive(Debug, Error)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
    #[error("unrecognized puzzle file extension \"{0}\"")]
    UnrecognizedExtension(String),
}

/// An error while parsing a puzzle from text
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParsePuzzleErrorType,
    token: Option<String>,
    line: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(
        error_type: ParsePuzzleErrorType,
        token: impl fmt::Display,
        line: Option<usize>,
    ) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line,
        }
    }

    pub(crate) const fn from_type(error_type: ParsePuzzleErrorType) -> Self {
        Self {
            error_type,
            token: None,
            line: None,
        }
    }

    pub fn error_type(&self) -> ParsePuzzleErrorType {
        self.error_type
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(line) = self.line {
            write!(f, " on line {}", line)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsePuzzleErrorType {
    EmptyFile,
    InvalidClue,
    InvalidToken,
    NoSolvedCells,
    RaggedRow,
    TooNarrow,
    WrongRowCount,
}

impl fmt::Display for ParsePuzzleErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyFile => "Empty puzzle file",
            Self::InvalidClue => "Invalid clue",
            Self::InvalidToken => "Invalid token",
            Self::NoSolvedCells => "Puzzle has no solved cells",
            Self::RaggedRow => "Mismatched row width",
            Self::TooNarrow => "Puzzle too narrow",
            Self::WrongRowCount => "Wrong number of rows",
        };
        write!(f, "{}", msg)
    }
}
