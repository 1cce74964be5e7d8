//! The puzzle data model

use std::fmt;
use std::fs;
use std::path::Path;

use ahash::AHashSet;
use itertools::Itertools;

use crate::error::{InvalidCellValue, InvalidPuzzle, PuzzleFromFileError, SolveError};
use crate::solve::PartitionCache;

pub use self::cell::{Cell, ClueCell, PuzzleCell};
pub use self::coord::Coord;
pub use self::section::Section;

mod cell;
mod coord;
pub mod parse;
mod section;

/// A row-major cell index
pub type CellId = usize;

/// An index into a puzzle's sections
pub type SectionId = usize;

/// A cell value, `0` meaning unsolved
pub type Value = u32;

/// A grid of cells and the sections constraining them.
///
/// Cells and sections reference each other by id.
#[derive(Clone, Debug)]
pub struct Puzzle {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    sections: Vec<Section>,
}

impl Puzzle {
    /// Creates an empty puzzle to be populated with `add_cell` and
    /// `add_section`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
            sections: Vec::new(),
        }
    }

    /// Reads a puzzle from a file, selecting the format by file extension
    /// (`.kak` or `.sud`)
    pub fn from_file(path: &Path) -> Result<Self, PuzzleFromFileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension {
            "kak" => Ok(parse::parse_kakuro(&fs::read_to_string(path)?)?),
            "sud" => Ok(parse::parse_sudoku(&fs::read_to_string(path)?)?),
            _ => Err(PuzzleFromFileError::UnrecognizedExtension(extension.into())),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn coord_at(&self, id: CellId) -> Coord {
        Coord::new(id % self.width, id / self.width)
    }

    pub fn add_cell(&mut self, cell: Cell) -> CellId {
        let id = self.cells.len();
        self.cells.push(cell);
        id
    }

    /// Adds a section and back-links its member cells to it. Every member
    /// must be a puzzle cell.
    pub fn add_section(&mut self, section: Section) -> Result<SectionId, InvalidPuzzle> {
        if let Some(&id) = section
            .cell_ids()
            .iter()
            .find(|&&id| !self.cells[id].is_puzzle())
        {
            return Err(InvalidPuzzle::new(format!(
                "section member {} is not a puzzle cell",
                id
            )));
        }
        let section_id = self.sections.len();
        for &cell_id in section.cell_ids() {
            self.cells[cell_id]
                .puzzle_cell_mut()
                .expect("not a puzzle cell")
                .add_section(section_id);
        }
        self.sections.push(section);
        Ok(section_id)
    }

    /// Assigns a value to a puzzle cell. Values greater than 9 are rejected.
    pub fn set_cell_value(&mut self, id: CellId, value: Value) -> Result<(), InvalidCellValue> {
        if value > 9 {
            return Err(InvalidCellValue::new(self.coord_at(id), value));
        }
        self.cells[id]
            .puzzle_cell_mut()
            .expect("not a puzzle cell")
            .set_value(value);
        Ok(())
    }

    /// Resets a puzzle cell to unsolved
    pub fn clear_cell_value(&mut self, id: CellId) {
        self.cells[id]
            .puzzle_cell_mut()
            .expect("not a puzzle cell")
            .set_value(0);
    }

    pub fn unsolved_cell_count(&self) -> usize {
        self.puzzle_cells()
            .filter(|(_, cell)| !cell.is_solved())
            .count()
    }

    pub(crate) fn puzzle_cells(&self) -> impl Iterator<Item = (CellId, &PuzzleCell)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(id, cell)| cell.puzzle_cell().map(|cell| (id, cell)))
    }

    pub(crate) fn unsolved_cell_ids(&self) -> Vec<CellId> {
        self.puzzle_cells()
            .filter(|(_, cell)| !cell.is_solved())
            .map(|(id, _)| id)
            .collect()
    }

    fn section_values(&self, section: &Section) -> Vec<Value> {
        section
            .cell_ids()
            .iter()
            .map(|&id| {
                self.cells[id]
                    .puzzle_cell()
                    .expect("not a puzzle cell")
                    .value()
            })
            .collect()
    }

    /// Values the unsolved cells of a section may take
    pub fn section_possible_values(
        &self,
        id: SectionId,
        cache: &mut PartitionCache,
    ) -> Result<Vec<Value>, SolveError> {
        let section = &self.sections[id];
        section.possible_values(&self.section_values(section), cache)
    }

    /// Values a puzzle cell may take, the intersection of its sections'
    /// possible values in the order of the first section's list
    pub fn cell_possible_values(
        &self,
        id: CellId,
        cache: &mut PartitionCache,
    ) -> Result<Vec<Value>, SolveError> {
        let section_ids = self.cells[id]
            .puzzle_cell()
            .expect("not a puzzle cell")
            .sections();
        let mut section_ids = section_ids.iter();
        let mut values = match section_ids.next() {
            Some(&section_id) => self.section_possible_values(section_id, cache)?,
            None => return Ok(Vec::new()),
        };
        for &section_id in section_ids {
            let other = self.section_possible_values(section_id, cache)?;
            retain_common(&mut values, &other);
        }
        Ok(values)
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.puzzle_cells().all(|(_, cell)| cell.is_solved())
            && self
                .sections
                .iter()
                .all(|section| section.is_solved(&self.section_values(section)))
    }
}

fn retain_common(values: &mut Vec<Value>, other: &[Value]) {
    let other: AHashSet<Value> = other.iter().copied().collect();
    values.retain(|v| other.contains(v));
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.cells.iter().chunks(self.width);
        let text = rows
            .into_iter()
            .map(|row| format!("|{}|", row.map(|cell| cell.to_string()).join("|")))
            .join("\n");
        write!(f, "{}", text)
    }
}
